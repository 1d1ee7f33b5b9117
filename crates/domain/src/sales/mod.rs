//! Sales lifecycle service and search aggregation.

mod search;
mod service;

pub use search::{SearchOutcome, SearchSummary};
pub use service::SalesService;
