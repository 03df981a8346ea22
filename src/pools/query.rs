/// Indexer query variables
///
/// The external fetcher sends these with the pool list query; the engine
/// applies the same sort, page and filter locally.
use serde::Serialize;

use crate::config::EngineConfig;
use crate::pools::engine::PageRequest;
use crate::pools::filter::WhereClause;
use crate::pools::sort::{ SortDirection, SortKey };

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryVariables {
    pub first: usize,
    pub skip: usize,
    #[serde(rename = "where")]
    pub where_clause: WhereClause,
    pub order_by: SortKey,
    pub order_direction: SortDirection,
}

impl QueryVariables {
    pub fn from_request(
        sort: SortKey,
        page: PageRequest,
        filter: &WhereClause,
        config: &EngineConfig
    ) -> Self {
        Self {
            first: page.page_size,
            skip: page.offset(),
            where_clause: filter.normalized(),
            order_by: sort,
            order_direction: config.directions.for_key(sort),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        // Plain structs of strings and integers always serialize
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
