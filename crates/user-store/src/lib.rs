//! User entity and storage backends.
//!
//! [`UserStore`] is the persistence seam used by the HTTP layer. Two
//! backends are provided: [`InMemoryUserStore`] for local runs and tests,
//! and [`PostgresUserStore`] for a relational `users` table.

pub mod error;
pub mod memory;
pub mod postgres;
pub mod store;
pub mod user;

pub use common::UserId;
pub use error::{Result, UserStoreError};
pub use memory::InMemoryUserStore;
pub use postgres::PostgresUserStore;
pub use store::{UserStore, UserStoreExt};
pub use user::{NewUser, User};
