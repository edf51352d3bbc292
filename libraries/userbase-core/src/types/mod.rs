//! Domain types

mod range;
mod user;

pub use range::IdRange;
pub use user::{User, UserId, UserPayload};
