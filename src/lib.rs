//! # supacrud
//!
//! A resilient Rust client for Supabase's PostgREST API.
//!
//! ## Features
//!
//! - **CRUD + RPC**: `create`, `read`, `update`, `delete`, and stored-procedure
//!   calls mapped onto PostgREST path conventions
//! - **Automatic Retries**: configurable retry policy with exponential backoff
//! - **Uniform Errors**: callers see a single error type on terminal failure,
//!   never a raw transport exception
//! - **Pluggable Transport**: the `Requester` trait lets tests swap the HTTP
//!   layer for a scripted fake
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use supacrud::{ClientConfig, Supacrud, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ClientConfig::builder()
//!         .base_url("https://project.supabase.co/rest/v1")
//!         .anon_key("anon-key")
//!         .service_role_key("service-role-key")
//!         .build()?;
//!
//!     let client = Supacrud::new(config)?;
//!
//!     // Create a record
//!     let created = client
//!         .create("stories", &serde_json::json!({"story_name": "first"}))
//!         .await?;
//!
//!     // Read it back by id
//!     let rows = client.read_by_id("stories", "1").await?;
//!
//!     // Call a stored procedure
//!     let by_email = client
//!         .rpc("get_story_by_email", &serde_json::json!({"author_email_param": "a@b.com"}))
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    Supacrud (resource client)            │
//! │  create() read() update() delete() rpc()                 │
//! └──────────────────────────────────────────────────────────┘
//!                            │
//! ┌──────────────────────────┴───────────────────────────────┐
//! │  HttpRequester: URL composition, headers, credentials    │
//! └──────────────────────────────────────────────────────────┘
//!                            │
//! ┌──────────────────────────┴───────────────────────────────┐
//! │  RetryExecutor: attempt loop, classification, backoff    │
//! └──────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Credentials and header application
pub mod auth;

/// Client configuration
pub mod config;

/// Retry policy and executor
pub mod retry;

/// Requester and resource client
pub mod client;

pub use auth::Credentials;
pub use client::{HttpRequester, Requester, Supacrud};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use retry::{RetryExecutor, RetryPolicy};
pub use types::{ApiResponse, JsonValue, Method};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
