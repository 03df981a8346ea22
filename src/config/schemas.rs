/// Configuration schemas for the pool metrics engine
use crate::pools::constants::{
    DAYS_PER_YEAR,
    MONTH_DAYS,
    POOLS_PER_PAGE,
    POOLS_POLL_INTERVAL_MS,
    WEEK_DAYS,
};
use crate::pools::sort::{ SortDirection, SortKey };

config_struct! {
    /// Fixed direction bound to each sort key
    pub struct SortDirections {
        total_users: SortDirection = SortDirection::Desc,
        amount: SortDirection = SortDirection::Desc,
        // Best performance first
        week_performance: SortDirection = SortDirection::Desc,
        month_performance: SortDirection = SortDirection::Desc,
        commission_percentage: SortDirection = SortDirection::Asc,
    }
}

impl SortDirections {
    /// Direction bound to a sort key
    pub fn for_key(&self, key: SortKey) -> SortDirection {
        match key {
            SortKey::TotalUsers => self.total_users,
            SortKey::Amount => self.amount,
            SortKey::WeekPerformance => self.week_performance,
            SortKey::MonthPerformance => self.month_performance,
            SortKey::CommissionPercentage => self.commission_percentage,
        }
    }
}

config_struct! {
    /// Paging, sorting and annualization parameters
    pub struct EngineConfig {
        /// Rows per page
        page_size: usize = POOLS_PER_PAGE,
        /// Refresh cadence for the external fetcher (10 minutes)
        poll_interval_ms: u64 = POOLS_POLL_INTERVAL_MS,
        /// Sort key used when the caller does not pick one
        default_sort: SortKey = SortKey::CommissionPercentage,
        week_days: u32 = WEEK_DAYS,
        month_days: u32 = MONTH_DAYS,
        year_days: u32 = DAYS_PER_YEAR,
        directions: SortDirections = SortDirections::default(),
    }
}

config_struct! {
    /// Display parameters for token amounts
    pub struct DisplayConfig {
        token_symbol: String = "CTSI".to_string(),
        /// Base-unit decimals of the staked token
        token_decimals: u32 = 18,
        amount_fraction_digits: u32 = 2,
    }
}

// ============================================================================
// ROOT CONFIGURATION
// ============================================================================

config_struct! {
    /// Root configuration structure containing all sub-configurations
    pub struct Config {
        /// Engine configuration
        engine: EngineConfig = EngineConfig::default(),

        /// Display configuration
        display: DisplayConfig = DisplayConfig::default(),
    }
}
