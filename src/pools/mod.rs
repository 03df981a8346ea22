/// Staking pool metrics
///
/// Turns indexer pool rows into sorted, paginated table rows with annualized
/// performance and commission labels.

pub mod calculator;
pub mod constants;
pub mod engine;
pub mod filter;
pub mod format;
pub mod loader;
pub mod query;
pub mod sort;
pub mod types;

// Re-export main components
pub use calculator::{ annualize, annualize_over };
pub use engine::{ PageRequest, PoolMetricsEngine };
pub use filter::WhereClause;
pub use loader::{ load_records_from_path, load_records_from_str, ValidationMode };
pub use query::QueryVariables;
pub use sort::{ SortDirection, SortKey };
pub use types::{ Commission, PoolRecord, PoolView, RawPoolRecord };
