//! Userbase Core
//!
//! Storage-agnostic types, the store trait, and error handling for Userbase.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `UserPayload`, `IdRange`
//! - **Core Traits**: `UserStore`
//! - **Error Handling**: Unified `UserbaseError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use userbase_core::types::IdRange;
//!
//! // Ids 3, 4, 5 and 6
//! let range = IdRange::new(3, 4);
//! assert_eq!(range.bounds(), Some((3, 6)));
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{Result, UserbaseError};
pub use store::UserStore;
pub use types::{IdRange, User, UserId, UserPayload};
