//! Userbase Client
//!
//! Typed HTTP client for the Userbase API, used by the load-test harness
//! and by anything else that talks to a running server.
//!
//! # Example
//!
//! ```ignore
//! use userbase_client::{ClientConfig, UsersClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = UsersClient::new(ClientConfig::new("http://localhost:8080"))?;
//!
//!     client.create_user("Alice").await?;
//!     println!("{} users stored", client.count().await?);
//!
//!     for user in client.get_range(1, 10).await? {
//!         println!("{} - {:?}", user.id, user.name);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::UsersClient;
pub use error::{ClientError, Result};
pub use types::{ClientConfig, HealthInfo};
