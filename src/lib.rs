pub mod arguments;
pub mod config;
pub mod errors; // Structured error handling
pub mod logger;
pub mod pools; // Pool metrics engine

pub use errors::{ PoolScopeError, Result };
pub use pools::{ PageRequest, PoolMetricsEngine, PoolRecord, PoolView, SortKey, WhereClause };
