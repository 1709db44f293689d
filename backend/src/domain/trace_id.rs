//! Correlation id shared by a request's log events, errors and response.
//!
//! The HTTP middleware puts a [`TraceId`] in task-local scope before any
//! handler runs. [`crate::domain::Error`] reads it on construction, so a
//! redacted 500 still tells operators which log lines belong to it.
//! Spawned tasks do not inherit the scope; wrap them in [`TraceId::scope`].

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use tokio::task_local;
use uuid::Uuid;

task_local! {
    static CURRENT: TraceId;
}

/// Header carrying the id on responses, and optionally on requests.
pub const TRACE_ID_HEADER: &str = "trace-id";

/// UUID naming one request.
///
/// # Examples
/// ```
/// use backend::TraceId;
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let id: TraceId = "6f1c1d9e-3a8b-4c55-9d57-2a4d2b4f9c10".parse().expect("uuid");
/// let seen = TraceId::scope(id, async { TraceId::current() }).await;
/// assert_eq!(seen, Some(id));
/// assert_eq!(TraceId::current(), None);
/// # });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Fresh random id for a request that arrived without one.
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Adopt a caller-supplied header value when it is a UUID.
    ///
    /// Anything else is ignored so clients cannot inject arbitrary text into
    /// logs or response headers.
    pub(crate) fn from_header(value: &str) -> Option<Self> {
        value.trim().parse().ok()
    }

    /// Id of the request being served on this task, if any.
    pub fn current() -> Option<Self> {
        CURRENT.try_with(|id| *id).ok()
    }

    /// Run `fut` with `trace_id` as the current id.
    pub async fn scope<Fut>(trace_id: TraceId, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        CURRENT.scope(trace_id, fut).await
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}
