use bon::Builder;
use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use crate::error::CommonRequestError;

/// Per-call transport overrides.
///
/// Options travel untouched from the caller to the remote operation, which is
/// the only place they are applied. Every field is optional; an empty value
/// behaves exactly like passing no options at all.
#[derive(Debug, Clone, Default, Builder)]
pub struct RequestOptions {
    /// Timeout for this request only, overriding the client default.
    pub timeout: Option<Duration>,

    /// Extra headers. They are applied last and replace defaults with the same name.
    #[builder(default)]
    pub headers: HashMap<String, String>,

    /// Extra query parameters appended after the endpoint's own.
    #[builder(default)]
    pub query: Vec<(String, String)>,

    /// Sent as the `Idempotency-Key` header.
    #[builder(into)]
    pub idempotency_key: Option<String>,

    /// Abort signal. When it fires first, the call fails with
    /// [`CommonRequestError::Cancelled`].
    pub cancellation: Option<CancellationToken>,
}

impl RequestOptions {
    /// Options carrying only a timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..Self::default()
        }
    }

    /// Add a header, replacing any previous value for the same name.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Add a query parameter.
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}

/// Runs `fut`, racing it against the cancellation token in `options` if one was supplied.
pub async fn run_cancellable<T, F>(
    options: Option<&RequestOptions>,
    fut: F,
) -> Result<T, CommonRequestError>
where
    F: Future<Output = Result<T, CommonRequestError>>,
{
    match options.and_then(|o| o.cancellation.as_ref()) {
        Some(token) => {
            tokio::select! {
                biased;
                () = token.cancelled() => Err(CommonRequestError::Cancelled),
                res = fut => res,
            }
        }
        None => fut.await,
    }
}
