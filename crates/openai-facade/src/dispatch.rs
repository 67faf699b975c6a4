//! Invoke a remote operation, log around it, and hand back its outcome.
//!
//! Neither function retries, translates or swallows failures: the error
//! returned is the error the remote operation produced.

use core::fmt::Display;
use std::future::Future;

use crate::{operation::Operation, result::ResultEnvelope};

/// Log target shared by every dispatched call.
pub const LOG_TARGET: &str = "openai_facade::dispatch";

/// Await `call` and return its result untouched.
///
/// Logs the attempt and the success at `debug`, a failure at `error`.
pub async fn dispatch<T, E, F>(operation: Operation, call: F) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
    E: Display,
{
    log::debug!(target: LOG_TARGET, "calling {operation} ({} call)", operation.shape);
    match call.await {
        Ok(response) => {
            log::debug!(target: LOG_TARGET, "{operation} succeeded");
            Ok(response)
        }
        Err(err) => {
            log::error!(target: LOG_TARGET, "{operation} failed: {err}");
            Err(err)
        }
    }
}

/// Await `call` and wrap a success in a [`ResultEnvelope`] carrying `message`.
///
/// Logs the attempt and the success at `info`, a failure at `error`. The
/// failure is returned as-is, never as an unsuccessful envelope.
pub async fn dispatch_enveloped<T, E, F>(
    operation: Operation,
    message: &str,
    call: F,
) -> Result<ResultEnvelope<T>, E>
where
    F: Future<Output = Result<T, E>>,
    E: Display,
{
    log::info!(target: LOG_TARGET, "calling {operation} ({} call)", operation.shape);
    match call.await {
        Ok(response) => {
            log::info!(target: LOG_TARGET, "{operation}: {message}");
            Ok(ResultEnvelope::ok(message, response))
        }
        Err(err) => {
            log::error!(target: LOG_TARGET, "{operation} failed: {err}");
            Err(err)
        }
    }
}
