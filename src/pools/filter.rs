/// Pool list filtering (`where` clause)
///
/// Matching is case-insensitive: values are lowercased once, and blank values
/// are dropped instead of being sent as empty-string filters.
use serde::{ Deserialize, Serialize };

use crate::pools::types::PoolRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhereClause {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl WhereClause {
    pub fn new(manager: Option<String>, id: Option<String>) -> Self {
        Self { manager, id }
    }

    /// Lowercased copy with blank values removed
    pub fn normalized(&self) -> WhereClause {
        WhereClause {
            manager: normalize_value(self.manager.as_deref()),
            id: normalize_value(self.id.as_deref()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.manager.is_none() && self.id.is_none()
    }

    /// Whether a record passes every key of this clause
    ///
    /// Expects a normalized clause. A pool without a known manager never
    /// matches a manager filter.
    pub fn matches(&self, record: &PoolRecord) -> bool {
        if let Some(id) = &self.id {
            if record.id.to_lowercase() != *id {
                return false;
            }
        }
        if let Some(manager) = &self.manager {
            match &record.manager {
                Some(record_manager) if record_manager.to_lowercase() == *manager => {}
                _ => {
                    return false;
                }
            }
        }
        true
    }
}

fn normalize_value(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization_lowercases_and_drops_empty() {
        let clause = WhereClause::new(Some("0xABC".to_string()), Some(String::new()));
        assert_eq!(clause.normalized(), WhereClause::new(Some("0xabc".to_string()), None));
    }

    #[test]
    fn test_blank_values_are_dropped() {
        let clause = WhereClause::new(Some("   ".to_string()), None).normalized();
        assert!(clause.is_empty());
        assert_eq!(serde_json::to_string(&clause).unwrap(), "{}");
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let record = PoolRecord::new("0xPool").with_manager("0xManager");

        assert!(WhereClause::default().matches(&record));
        assert!(WhereClause::new(Some("0XMANAGER".into()), None).normalized().matches(&record));
        assert!(WhereClause::new(None, Some("0xpool".into())).normalized().matches(&record));
        assert!(!WhereClause::new(None, Some("0xother".into())).normalized().matches(&record));
    }

    #[test]
    fn test_manager_filter_skips_pools_without_manager() {
        let record = PoolRecord::new("0x1");
        let clause = WhereClause::new(Some("0xabc".into()), None).normalized();
        assert!(!clause.matches(&record));
    }
}
