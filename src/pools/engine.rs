/// Pool metrics engine
///
/// Pure transformation from raw pool counters to table rows: filter, order,
/// slice one page, then annualize performance and build display labels.
/// Holds only its configuration; every call is independent.
use std::ops::Range;

use bigdecimal::num_bigint::BigUint;

use crate::config::{ Config, DisplayConfig, EngineConfig };
use crate::errors::Result;
use crate::logger::{ self, LogTag };
use crate::pools::calculator::annualize_over;
use crate::pools::constants::PAUSED_POOL_NOTICE;
use crate::pools::filter::WhereClause;
use crate::pools::format;
use crate::pools::query::QueryVariables;
use crate::pools::sort::{ compare_records, SortKey };
use crate::pools::types::{ PoolRecord, PoolView };

/// Zero-based page of a fixed size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_number: usize,
    pub page_size: usize,
}

impl PageRequest {
    pub fn new(page_number: usize, page_size: usize) -> Self {
        Self { page_number, page_size }
    }

    pub fn first(page_size: usize) -> Self {
        Self::new(0, page_size)
    }

    /// Index of the first row on this page
    pub fn offset(&self) -> usize {
        self.page_number.saturating_mul(self.page_size)
    }

    /// Rows of a `total`-row list covered by this page, empty past the end
    pub fn range(&self, total: usize) -> Range<usize> {
        let start = self.offset().min(total);
        let end = start.saturating_add(self.page_size).min(total);
        start..end
    }
}

#[derive(Debug, Clone, Default)]
pub struct PoolMetricsEngine {
    engine: EngineConfig,
    display: DisplayConfig,
}

impl PoolMetricsEngine {
    pub fn new(engine: EngineConfig, display: DisplayConfig) -> Self {
        Self { engine, display }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.engine.clone(), config.display.clone())
    }

    /// Engine using the globally loaded configuration
    pub fn from_global_config() -> Self {
        crate::config::with_config(Self::from_config)
    }

    pub fn engine_config(&self) -> &EngineConfig {
        &self.engine
    }

    pub fn display_config(&self) -> &DisplayConfig {
        &self.display
    }

    /// Page request sized by the configured page size
    pub fn page(&self, page_number: usize) -> PageRequest {
        PageRequest::new(page_number, self.engine.page_size)
    }

    /// Variables the fetcher sends for the same request
    pub fn query_variables(
        &self,
        sort: SortKey,
        page: PageRequest,
        filter: &WhereClause
    ) -> QueryVariables {
        QueryVariables::from_request(sort, page, filter, &self.engine)
    }

    /// Filter, order and slice `records`, then build one view per row.
    ///
    /// Equal sort values are ordered by ascending id. A page past the end is
    /// empty. Fails only when a record breaks the annualization contract.
    pub fn sort_and_paginate(
        &self,
        records: &[PoolRecord],
        sort: SortKey,
        page: PageRequest,
        filter: &WhereClause
    ) -> Result<Vec<PoolView>> {
        let filter = filter.normalized();
        let direction = self.engine.directions.for_key(sort);

        let mut selected: Vec<&PoolRecord> = records
            .iter()
            .filter(|record| filter.matches(record))
            .collect();
        selected.sort_by(|a, b| compare_records(a, b, sort, direction));

        let range = page.range(selected.len());
        logger::debug(
            LogTag::Pools,
            &format!(
                "{} of {} pools match {:?}; sort={} {} page={} rows={:?}",
                selected.len(),
                records.len(),
                filter,
                sort,
                direction,
                page.page_number,
                range
            )
        );

        selected[range]
            .iter()
            .map(|record| self.view(record))
            .collect()
    }

    /// Annualized figures and labels for a single record
    pub fn view(&self, record: &PoolRecord) -> Result<PoolView> {
        let week_apr = self.annualize_field(
            record,
            "weekPerformance",
            record.week_performance,
            self.engine.week_days
        )?;
        let month_apr = self.annualize_field(
            record,
            "monthPerformance",
            record.month_performance,
            self.engine.month_days
        )?;
        let (commission_label, commission_tooltip) = record.commission().display();

        Ok(PoolView {
            id: record.id.clone(),
            manager: record.manager.clone(),
            total_users: record.total_users,
            amount: record.amount.clone(),
            user_total_reward: record.user_total_reward.clone(),
            week_performance: record.week_performance,
            month_performance: record.month_performance,
            commission_percentage: record.commission_percentage,
            fee_commission: record.fee_commission,
            fee_gas: record.fee_gas,
            paused: record.paused,
            week_apr,
            month_apr,
            commission_label,
            commission_tooltip: commission_tooltip.map(str::to_string),
            accrued_commission_label: record.accrued_commission_label(),
            amount_label: self.token_label(&record.amount),
            user_total_reward_label: self.token_label(&record.user_total_reward),
            week_performance_label: format::performance_label(record.week_performance, week_apr),
            month_performance_label: format::performance_label(record.month_performance, month_apr),
            paused_label: record.paused.then(|| PAUSED_POOL_NOTICE.to_string()),
        })
    }

    fn annualize_field(
        &self,
        record: &PoolRecord,
        field: &str,
        period_return: Option<f64>,
        period_days: u32
    ) -> Result<Option<f64>> {
        period_return
            .map(|r| annualize_over(r, period_days, self.engine.year_days))
            .transpose()
            .map_err(|e| e.in_record(&record.id, field))
    }

    fn token_label(&self, amount: &BigUint) -> String {
        format!(
            "{} {}",
            format::format_token_amount(
                amount,
                self.display.token_decimals,
                self.display.amount_fraction_digits
            ),
            self.display.token_symbol
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SortDirections;
    use crate::errors::PoolScopeError;
    use crate::pools::sort::SortDirection;

    fn engine() -> PoolMetricsEngine {
        PoolMetricsEngine::default()
    }

    fn ids(views: &[PoolView]) -> Vec<&str> {
        views
            .iter()
            .map(|v| v.id.as_str())
            .collect()
    }

    fn numbered_pools(count: usize) -> Vec<PoolRecord> {
        (0..count)
            .map(|i| PoolRecord::new(format!("0x{:04}", i)).with_total_users(i as u64))
            .collect()
    }

    #[test]
    fn test_page_range_bounds() {
        let page = PageRequest::new(1, 50);
        assert_eq!(page.offset(), 50);
        assert_eq!(page.range(120), 50..100);
        assert_eq!(PageRequest::new(2, 50).range(120), 100..120);
        assert_eq!(PageRequest::new(3, 50).range(120), 120..120);
        assert_eq!(PageRequest::new(usize::MAX, 50).range(120), 120..120);
    }

    #[test]
    fn test_pages_never_exceed_page_size() {
        let pools = numbered_pools(120);
        let engine = engine();
        let mut seen = 0;
        for page_number in 0..5 {
            let views = engine
                .sort_and_paginate(&pools, SortKey::TotalUsers, engine.page(page_number), &WhereClause::default())
                .unwrap();
            assert!(views.len() <= 50);
            seen += views.len();
        }
        assert_eq!(seen, 120);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let pools = numbered_pools(3);
        let views = engine()
            .sort_and_paginate(&pools, SortKey::Amount, PageRequest::new(7, 50), &WhereClause::default())
            .unwrap();
        assert!(views.is_empty());

        let views = engine()
            .sort_and_paginate(&[], SortKey::Amount, PageRequest::first(50), &WhereClause::default())
            .unwrap();
        assert!(views.is_empty());
    }

    #[test]
    fn test_total_users_sorted_descending() {
        let pools = numbered_pools(5);
        let views = engine()
            .sort_and_paginate(&pools, SortKey::TotalUsers, PageRequest::first(50), &WhereClause::default())
            .unwrap();
        assert_eq!(ids(&views), vec!["0x0004", "0x0003", "0x0002", "0x0001", "0x0000"]);
    }

    #[test]
    fn test_amount_sorts_big_integers() {
        let huge: BigUint = "340282366920938463463374607431768211456".parse().unwrap();
        let pools = vec![
            PoolRecord::new("0xsmall").with_amount(10u32),
            PoolRecord::new("0xhuge").with_amount(huge),
            PoolRecord::new("0xmid").with_amount(u64::MAX)
        ];
        let views = engine()
            .sort_and_paginate(&pools, SortKey::Amount, PageRequest::first(50), &WhereClause::default())
            .unwrap();
        assert_eq!(ids(&views), vec!["0xhuge", "0xmid", "0xsmall"]);
    }

    #[test]
    fn test_commission_sorted_ascending_with_absent_last() {
        let pools = vec![
            PoolRecord::new("0xc").with_commission_percentage(0.2),
            PoolRecord::new("0xa"),
            PoolRecord::new("0xb").with_commission_percentage(0.05)
        ];
        let views = engine()
            .sort_and_paginate(&pools, SortKey::CommissionPercentage, PageRequest::first(50), &WhereClause::default())
            .unwrap();
        assert_eq!(ids(&views), vec!["0xb", "0xc", "0xa"]);
    }

    #[test]
    fn test_week_performance_best_first() {
        let pools = vec![
            PoolRecord::new("0xa").with_week_performance(-0.01),
            PoolRecord::new("0xb").with_week_performance(0.02),
            PoolRecord::new("0xc")
        ];
        let views = engine()
            .sort_and_paginate(&pools, SortKey::WeekPerformance, PageRequest::first(50), &WhereClause::default())
            .unwrap();
        assert_eq!(ids(&views), vec!["0xb", "0xa", "0xc"]);
    }

    #[test]
    fn test_equal_keys_are_stable_across_calls() {
        let forward: Vec<PoolRecord> = ["0xd", "0xb", "0xa", "0xc"]
            .iter()
            .map(|id| PoolRecord::new(*id).with_total_users(7))
            .collect();
        let mut backward = forward.clone();
        backward.reverse();

        let engine = engine();
        let first = engine
            .sort_and_paginate(&forward, SortKey::TotalUsers, engine.page(0), &WhereClause::default())
            .unwrap();
        let second = engine
            .sort_and_paginate(&backward, SortKey::TotalUsers, engine.page(0), &WhereClause::default())
            .unwrap();
        assert_eq!(ids(&first), vec!["0xa", "0xb", "0xc", "0xd"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_filter_applies_before_paging() {
        let pools = vec![
            PoolRecord::new("0x1").with_manager("0xAAA").with_total_users(1),
            PoolRecord::new("0x2").with_manager("0xbbb").with_total_users(2),
            PoolRecord::new("0x3").with_manager("0xaaa").with_total_users(3)
        ];
        let filter = WhereClause::new(Some("0xAaA".into()), Some(" ".into()));
        let views = engine()
            .sort_and_paginate(&pools, SortKey::TotalUsers, PageRequest::first(1), &filter)
            .unwrap();
        assert_eq!(ids(&views), vec!["0x3"]);
    }

    #[test]
    fn test_view_derives_labels() {
        let record = PoolRecord::new("0xabc")
            .with_week_performance(0.01)
            .with_fee_commission(250)
            .with_fee_gas(1000)
            .with_amount(1_500_000_000_000_000_000u128)
            .with_paused(true);
        let view = engine().view(&record).unwrap();

        let apr = view.week_apr.unwrap();
        assert!((apr - 0.6801).abs() < 1e-4);
        assert_eq!(view.week_performance_label, "1% (68.01%)");
        assert_eq!(view.month_apr, None);
        assert_eq!(view.month_performance_label, "-");
        assert_eq!(view.commission_label, "2.50 %");
        assert!(view.commission_tooltip.is_some());
        assert_eq!(view.accrued_commission_label, "-");
        assert_eq!(view.amount_label, "1.50 CTSI");
        assert_eq!(view.user_total_reward_label, "0.00 CTSI");
        assert_eq!(view.paused_label.as_deref(), Some(PAUSED_POOL_NOTICE));
    }

    #[test]
    fn test_month_window_uses_thirty_days() {
        let record = PoolRecord::new("0x1").with_month_performance(0.01);
        let view = engine().view(&record).unwrap();
        let expected = (1.01f64).powf(365.0 / 30.0) - 1.0;
        assert!((view.month_apr.unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_loss_beyond_total_is_invalid_record() {
        let pools = vec![PoolRecord::new("0xbad").with_month_performance(-1.2)];
        let err = engine()
            .sort_and_paginate(&pools, SortKey::TotalUsers, PageRequest::first(50), &WhereClause::default())
            .unwrap_err();
        match err {
            PoolScopeError::InvalidRecord { pool_id, field, .. } => {
                assert_eq!(pool_id, "0xbad");
                assert_eq!(field, "monthPerformance");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_configured_direction_and_page_size() {
        let config = EngineConfig {
            page_size: 2,
            directions: SortDirections {
                total_users: SortDirection::Asc,
                ..SortDirections::default()
            },
            ..EngineConfig::default()
        };
        let engine = PoolMetricsEngine::new(config, DisplayConfig::default());
        let views = engine
            .sort_and_paginate(&numbered_pools(5), SortKey::TotalUsers, engine.page(1), &WhereClause::default())
            .unwrap();
        assert_eq!(ids(&views), vec!["0x0002", "0x0003"]);
    }

    #[test]
    fn test_view_serializes_camel_case() {
        let view = engine()
            .view(&PoolRecord::new("0x1").with_amount(5u32))
            .unwrap();
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["amount"], "5");
        assert_eq!(json["accruedCommissionLabel"], "-");
        assert!(json.get("weekApr").is_some());
    }
}
