/// Pool metrics constants

/// Rows per page served by the indexer
pub const POOLS_PER_PAGE: usize = 50;

/// Refresh cadence of the pool list (10 minutes)
pub const POOLS_POLL_INTERVAL_MS: u64 = 600_000;

// Annualization windows
pub const DAYS_PER_YEAR: u32 = 365;
pub const WEEK_DAYS: u32 = 7;
pub const MONTH_DAYS: u32 = 30;

/// Placeholder for figures the indexer does not have yet
pub const ABSENT_LABEL: &str = "-";

pub const FLAT_RATE_COMMISSION_TOOLTIP: &str =
    "Flat-rate commission: the pool keeps a fixed percentage of every block reward.";
pub const GAS_TAX_COMMISSION_TOOLTIP: &str =
    "Gas-tax commission: the pool keeps enough of every block reward to cover the gas it spent producing the block, priced at the configured gas units.";
pub const PAUSED_POOL_NOTICE: &str = "This pool is not accepting stake at the moment";
