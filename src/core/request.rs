use crate::domain::model::ApiResponse;
use crate::utils::error::{ApiError, Result};
use reqwest::RequestBuilder;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::task::JoinHandle;

/// Completion handler: `(err, res)`.
///
/// `err` is set when the request failed or the server answered with a
/// non-success status; `res` is set whenever a response was received.
pub type Callback = Box<dyn FnOnce(Option<ApiError>, Option<ApiResponse>) + Send + 'static>;

/// Boxes a closure into a [`Callback`].
pub fn callback<F>(f: F) -> Callback
where
    F: FnOnce(Option<ApiError>, Option<ApiResponse>) + Send + 'static,
{
    Box::new(f)
}

/// The default handler used when a caller passes no callback.
pub fn no_callback() -> Callback {
    Box::new(|_err, _res| {})
}

type Outcome = Result<ApiResponse>;

/// A request that is already in flight.
///
/// Await it to get `Result<ApiResponse, ApiError>`, or hand it a callback with
/// [`PendingRequest::end`]. Dropping it does not cancel the request.
#[derive(Debug)]
pub struct PendingRequest {
    method: reqwest::Method,
    url: String,
    handle: JoinHandle<Outcome>,
}

impl PendingRequest {
    /// Spawns `request` on the current Tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside of a Tokio runtime.
    pub(crate) fn dispatch(method: reqwest::Method, url: String, request: RequestBuilder) -> Self {
        tracing::debug!("Dispatching {} {}", method, url);
        let handle = tokio::spawn(execute(request));
        Self {
            method,
            url,
            handle,
        }
    }

    pub fn method(&self) -> &reqwest::Method {
        &self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Invokes `callback(err, res)` exactly once when the request completes,
    /// or the no-op handler when `callback` is `None`.
    ///
    /// The returned handle resolves after the handler has run.
    pub fn end(self, callback: Option<Callback>) -> JoinHandle<()> {
        let observed = callback.is_some();
        let callback = callback.unwrap_or_else(no_callback);
        let Self {
            method,
            url,
            handle,
        } = self;

        tokio::spawn(async move {
            let (err, res) = match handle.await {
                Ok(Ok(response)) => (None, Some(response)),
                Ok(Err(error)) => {
                    let response = error.response().cloned();
                    (Some(error), response)
                }
                Err(join_error) => (Some(ApiError::TaskAborted(join_error)), None),
            };
            if !observed {
                if let Some(e) = &err {
                    tracing::warn!("{} {} failed with no callback attached: {}", method, url, e);
                }
            }
            callback(err, res);
        })
    }
}

impl Future for PendingRequest {
    type Output = Result<ApiResponse>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.handle).poll(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Ok(outcome)) => Poll::Ready(outcome),
            Poll::Ready(Err(join_error)) => Poll::Ready(Err(ApiError::TaskAborted(join_error))),
        }
    }
}

async fn execute(request: RequestBuilder) -> Outcome {
    let response = request.send().await?;

    let status = response.status();
    tracing::debug!("Response status: {}", status);

    let status_error = response.error_for_status_ref().err();
    let headers = response.headers().clone();
    let body = response.bytes().await?;
    let response = ApiResponse::new(status, headers, body.to_vec());

    match status_error {
        Some(source) => Err(ApiError::Status {
            source,
            response: Box::new(response),
        }),
        None => Ok(response),
    }
}
