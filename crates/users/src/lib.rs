//! User records and the CRUD service behind the user API.
//!
//! The sales core never calls into this crate directly; it reaches the
//! user system over HTTP through its existence-check client.

pub mod error;
pub mod memory;
pub mod service;
pub mod store;
pub mod user;

pub use common::{UserId, Version};
pub use error::{Result, UserStoreError};
pub use memory::InMemoryUserStore;
pub use service::{NewUser, UserService, UserUpdate};
pub use store::UserStore;
pub use user::User;
