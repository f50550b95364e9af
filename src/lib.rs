//! Fabula - client library for an AI story generation service
//!
//! This library provides the core functionality for the Fabula CLI:
//! a typed HTTP client for the story API, a session state container
//! with explicit update actions, filtering, and clipboard helpers.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `api`: `StoryBackend` trait and the HTTP client implementation
//! - `session`: session state container and the generation state machine
//! - `story`: the `Story` data model and filtering
//! - `clipboard`: best-effort copy of story text
//! - `config`: configuration management and validation
//! - `error`: error types and result aliases
//! - `cli`: command-line interface definition
//! - `commands`: presentation adapters (interactive session, one-shots)
//!
//! # Example
//!
//! ```no_run
//! use fabula::{Config, StoryApiClient, StorySession};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     config.validate()?;
//!
//!     let client = StoryApiClient::new(&config.api)?;
//!     let mut session = StorySession::new(client);
//!     session.refresh().await;
//!     session.generate("dragons").await;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod session;
pub mod story;

// Re-export commonly used types
pub use api::{StoryApiClient, StoryBackend};
pub use config::Config;
pub use error::{FabulaError, Result};
pub use session::{GenerateOutcome, Phase, SessionState, StorySession};
pub use story::Story;
