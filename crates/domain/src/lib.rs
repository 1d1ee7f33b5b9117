//! Sales lifecycle domain.
//!
//! This crate owns the only real business logic in the system:
//! - `SalesService` — creation, status transition, and filtered search with
//!   aggregation over sale records
//! - `UserDirectory` — the existence-check contract against the external
//!   user system, with HTTP and in-memory implementations
//! - `SalesError` — the error taxonomy separating caller-fixable failures
//!   from infrastructure failures

pub mod directory;
pub mod error;
pub mod sales;

pub use directory::{DirectoryError, HttpUserDirectory, InMemoryUserDirectory, UserDirectory};
pub use error::SalesError;
pub use sales::{SalesService, SearchOutcome, SearchSummary};
