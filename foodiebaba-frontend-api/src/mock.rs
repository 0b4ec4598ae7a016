//! In-memory [`HttpClient`] for tests.

use std::{cell::RefCell, collections::VecDeque, rc::Rc};

use async_trait::async_trait;
use serde::Serialize;

use crate::{HttpClient, HttpRequest, HttpResponse, TransportError};

/// Replays canned responses in order and records every request.
///
/// Clones share the same queue and log.
#[derive(Clone, Default)]
pub struct MockClient {
    inner: Rc<RefCell<Inner>>,
}

#[derive(Default)]
struct Inner {
    responses: VecDeque<Result<HttpResponse, TransportError>>,
    requests: Vec<HttpRequest>,
}

impl MockClient {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: impl Into<String>) {
        let response = HttpResponse {
            status,
            body: body.into(),
        };
        self.inner.borrow_mut().responses.push_back(Ok(response));
    }

    pub fn respond_json<T>(&self, status: u16, data: &T)
    where
        T: Serialize,
    {
        let body = serde_json::to_string(data).expect("serializable test data");
        self.respond(status, body);
    }

    pub fn fail(&self, err: TransportError) {
        self.inner.borrow_mut().responses.push_back(Err(err));
    }

    #[must_use]
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.inner.borrow().requests.clone()
    }

    #[must_use]
    pub fn request_count(&self) -> usize {
        self.inner.borrow().requests.len()
    }

    #[must_use]
    pub fn last_request(&self) -> Option<HttpRequest> {
        self.inner.borrow().requests.last().cloned()
    }
}

#[async_trait(?Send)]
impl HttpClient for MockClient {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut inner = self.inner.borrow_mut();
        inner.requests.push(request);
        inner
            .responses
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::NoResponse("no canned response".into())))
    }
}
