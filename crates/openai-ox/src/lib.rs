#![cfg_attr(not(test), deny(unsafe_code))]
#![warn(
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::missing_docs_in_private_items
)]

//! OpenAI API client for Rust
//!
//! This crate provides a Rust client for the OpenAI API, with support for:
//! - Legacy text completions
//! - Text embeddings
//! - File management, including multi-part uploads
//! - Image generation, variations and edits
//! - Audio transcription, translation and speech
//! - Content moderation
//! - Model listing and deletion
//! - Fine-tuning jobs, events and checkpoints
//! - Batches
//! - Assistants (beta)
//!
//! Every operation accepts per-call [`RequestOptions`] as its last argument.
//!
//! # Example
//!
//! ```rust,no_run
//! use openai_ox::{OpenAI, batches::BatchListParams};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OpenAI::new("your-api-key");
//!
//!     let query = BatchListParams::builder().limit(10).build();
//!     let options = openai_ox::RequestOptions::with_timeout(Duration::from_secs(5));
//!     let batches = client.batches().list(&query, Some(&options)).await?;
//!     for batch in batches.data {
//!         println!("{} {:?}", batch.id, batch.status);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod assistants;
pub mod audio;
pub mod batches;
pub mod client;
pub mod completions;
pub mod embeddings;
pub mod error;
pub mod files;
pub mod fine_tuning;
pub mod images;
pub mod models;
pub mod moderations;
pub mod shared;
pub mod uploads;

// Re-export main types
pub use client::{BASE_URL, OpenAI};
pub use error::OpenAIRequestError;
pub use shared::{Deleted, FileUpload, List, Order};

// Re-export transport types from facade-common
pub use facade_common::{CancellationToken, RequestOptions};
