//! The HTTP seam.

use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use async_trait::async_trait;

/// A completed HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl FetchResponse {
    /// Create a response.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A `200 OK` response.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced a response (network down, CORS, aborted).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Issues GET requests for relative asset paths.
#[async_trait(?Send)]
pub trait Transport {
    /// Fetch `path` and read the body as text.
    async fn get(&self, path: &str) -> Result<FetchResponse, TransportError>;
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for Rc<T> {
    async fn get(&self, path: &str) -> Result<FetchResponse, TransportError> {
        (**self).get(path).await
    }
}

#[derive(Debug, Clone)]
enum Scripted {
    Respond(FetchResponse),
    Fail(String),
}

/// In-memory transport (for development/testing).
///
/// Paths without a scripted response answer `404`. Every request is logged so
/// tests can assert on request counts.
#[derive(Debug, Default)]
pub struct MemoryTransport {
    routes: RefCell<HashMap<String, Scripted>>,
    delays: RefCell<HashMap<String, usize>>,
    requests: RefCell<Vec<String>>,
}

impl MemoryTransport {
    /// Create a transport with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a `200 OK` response.
    pub fn with_body(self, path: impl Into<String>, body: impl Into<String>) -> Self {
        self.respond(path, FetchResponse::ok(body));
        self
    }

    /// Script a response with an explicit status.
    pub fn with_status(self, path: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        self.respond(path, FetchResponse::new(status, body));
        self
    }

    /// Script a transport failure.
    pub fn with_failure(self, path: impl Into<String>, message: impl Into<String>) -> Self {
        self.routes
            .borrow_mut()
            .insert(path.into(), Scripted::Fail(message.into()));
        self
    }

    /// Make requests for `path` yield to the executor `polls` times before
    /// completing, so other tasks can run in between.
    pub fn with_delay(self, path: impl Into<String>, polls: usize) -> Self {
        self.delays.borrow_mut().insert(path.into(), polls);
        self
    }

    /// Script or replace a response after construction.
    pub fn respond(&self, path: impl Into<String>, response: FetchResponse) {
        self.routes
            .borrow_mut()
            .insert(path.into(), Scripted::Respond(response));
    }

    /// Every path requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    /// How many times `path` was requested.
    pub fn request_count(&self, path: &str) -> usize {
        self.requests
            .borrow()
            .iter()
            .filter(|requested| requested.as_str() == path)
            .count()
    }

    /// Total number of requests.
    pub fn total_requests(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait(?Send)]
impl Transport for MemoryTransport {
    async fn get(&self, path: &str) -> Result<FetchResponse, TransportError> {
        self.requests.borrow_mut().push(path.to_string());

        let polls = self.delays.borrow().get(path).copied().unwrap_or(0);
        for _ in 0..polls {
            YieldNow::default().await;
        }

        let scripted = self.routes.borrow().get(path).cloned();
        match scripted {
            Some(Scripted::Respond(response)) => Ok(response),
            Some(Scripted::Fail(message)) => Err(TransportError(message)),
            None => Ok(FetchResponse::new(404, "")),
        }
    }
}

/// Returns `Pending` once, waking itself immediately.
#[derive(Default)]
struct YieldNow {
    yielded: bool,
}

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded {
            Poll::Ready(())
        } else {
            self.yielded = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}
