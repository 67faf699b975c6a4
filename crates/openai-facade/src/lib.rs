#![cfg_attr(not(test), deny(unsafe_code))]
#![warn(
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::missing_docs_in_private_items
)]

//! A uniform calling convention over the OpenAI API.
//!
//! Every method of [`OpenAIService`] takes one of three call shapes:
//! - [`BodyCall`] `{ body, options }` for create and update operations
//! - [`QueryCall`] `{ query, options }` for list operations
//! - [`IdentifierCall`] `(id, options?)` for retrieve, delete and cancel operations
//!
//! The parts are handed to exactly one remote [`Operation`] without being
//! touched. Remote failures come back as the original [`OpenAIRequestError`].
//! Completions are returned inside a [`ResultEnvelope`].
//!
//! # Example
//!
//! ```rust,no_run
//! use openai_facade::{OpenAIService, QueryCall, RequestOptions};
//! use openai_ox::batches::BatchListParams;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = OpenAIService::from_env()?;
//!
//!     let call = QueryCall::new(BatchListParams::builder().limit(10).build())
//!         .with_options(RequestOptions::with_timeout(Duration::from_millis(5000)));
//!     let batches = service.list_batches(call).await?;
//!     println!("{} batches", batches.data.len());
//!
//!     service.cancel_fine_tuning_job("ftjob-abc123").await?;
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod dispatch;
pub mod envelope;
pub mod error;
pub mod operation;
pub mod result;
pub mod service;

pub use config::FacadeConfig;
pub use dispatch::{dispatch, dispatch_enveloped};
pub use envelope::{BodyCall, CallRequest, CallShape, Decompose, IdentifierCall, QueryCall};
pub use error::ConfigError;
pub use operation::{Action, Operation, Resource};
pub use result::ResultEnvelope;
pub use service::{COMPLETION_CREATED, OpenAIService};

// Re-export the pieces callers need to build calls and match failures
pub use facade_common::{CancellationToken, RequestOptions};
pub use openai_ox::OpenAIRequestError;
