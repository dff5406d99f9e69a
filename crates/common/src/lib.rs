//! Shared types for the realtime-app workspace.

pub mod types;

pub use types::UserId;
