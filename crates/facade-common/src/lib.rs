#![cfg_attr(not(test), deny(unsafe_code))]
#![warn(
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::missing_docs_in_private_items
)]

//! Shared HTTP plumbing for the openai-facade workspace
//!
//! Provides the endpoint description, request execution helpers and the
//! per-call transport options that every remote operation accepts.

pub mod error;
pub mod options;
pub mod query;
pub mod request_builder;

pub use error::CommonRequestError;
pub use options::RequestOptions;
pub use request_builder::{Endpoint, HttpMethod, MultipartForm, RequestBuilder, RequestConfig};

pub use tokio_util::sync::CancellationToken;
