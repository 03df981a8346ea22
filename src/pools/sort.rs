/// Sort keys, directions and the record comparator
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{ Deserialize, Serialize };

use crate::errors::PoolScopeError;
use crate::pools::types::PoolRecord;

/// Closed set of columns a pool table can be ordered by
///
/// Serialized names match the indexer's `orderBy` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    TotalUsers,
    Amount,
    WeekPerformance,
    MonthPerformance,
    CommissionPercentage,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::TotalUsers,
        SortKey::Amount,
        SortKey::WeekPerformance,
        SortKey::MonthPerformance,
        SortKey::CommissionPercentage,
    ];

    /// Field name as sent in `orderBy`
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::TotalUsers => "totalUsers",
            SortKey::Amount => "amount",
            SortKey::WeekPerformance => "weekPerformance",
            SortKey::MonthPerformance => "monthPerformance",
            SortKey::CommissionPercentage => "commissionPercentage",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = PoolScopeError;

    /// Accepts the camelCase field name or its snake_case spelling
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('_', "").to_lowercase();
        SortKey::ALL.iter()
            .copied()
            .find(|key| key.as_str().to_lowercase() == wanted)
            .ok_or_else(|| PoolScopeError::invalid_input(format!("unknown sort key '{}'", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Orient an ascending comparison result
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Total order over pool records for one sort key.
///
/// Absent optional values go after present ones in both directions. Equal
/// keys fall back to ascending id, so the order is identical across polls.
pub fn compare_records(
    a: &PoolRecord,
    b: &PoolRecord,
    key: SortKey,
    direction: SortDirection
) -> Ordering {
    let primary = match key {
        SortKey::TotalUsers => direction.apply(a.total_users.cmp(&b.total_users)),
        SortKey::Amount => direction.apply(a.amount.cmp(&b.amount)),
        SortKey::WeekPerformance => {
            compare_optional(a.week_performance, b.week_performance, direction)
        }
        SortKey::MonthPerformance => {
            compare_optional(a.month_performance, b.month_performance, direction)
        }
        SortKey::CommissionPercentage => {
            compare_optional(a.commission_percentage, b.commission_percentage, direction)
        }
    };

    primary.then_with(|| a.id.cmp(&b.id))
}

fn compare_optional(a: Option<f64>, b: Option<f64>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => direction.apply(x.total_cmp(&y)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
