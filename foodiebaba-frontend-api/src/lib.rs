use std::rc::Rc;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use foodiebaba_boundary::ErrorResponse;

mod admin;
mod http;
mod public;
mod user;
mod util;

#[cfg(target_arch = "wasm32")]
mod gloo;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

#[cfg(target_arch = "wasm32")]
pub use self::gloo::GlooClient;
pub use self::{admin::*, http::*, public::*, user::*};

pub type Result<T> = std::result::Result<T, Error>;

pub const OPERATION_FAILED_MESSAGE: &str = "Operation failed";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error, please try again";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An error occurred";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// The server answered with a non-2xx status.
    #[error("request rejected with status {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    /// The request was sent but no response was received.
    #[error("network failure: {0}")]
    Network(String),

    #[error("unable to send request: {0}")]
    Request(String),

    #[error("missing or malformed bearer credential")]
    MissingCredentials,

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// How a failed call is reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ServerRejection,
    NetworkFailure,
    UnexpectedClientError,
}

impl Error {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Rejected { .. } => ErrorKind::ServerRejection,
            Self::Network(_) => ErrorKind::NetworkFailure,
            Self::Request(_) | Self::MissingCredentials | Self::InvalidResponse(_) => {
                ErrorKind::UnexpectedClientError
            }
        }
    }

    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The message to show for this error.
    ///
    /// `fallback` is used for rejections without a server supplied message.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected { message, .. } => {
                message.clone().unwrap_or_else(|| fallback.to_string())
            }
            Self::Network(_) => NETWORK_ERROR_MESSAGE.to_string(),
            Self::Request(_) | Self::MissingCredentials | Self::InvalidResponse(_) => {
                UNEXPECTED_ERROR_MESSAGE.to_string()
            }
        }
    }

    #[must_use]
    pub fn message(&self) -> String {
        self.user_message(OPERATION_FAILED_MESSAGE)
    }
}

impl From<TransportError> for Error {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::NoResponse(msg) => Self::Network(msg),
            TransportError::Request(msg) => Self::Request(msg),
        }
    }
}

/// Description of a single backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(&'static str, String)>,
    body: Body,
    requires_auth: bool,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: vec![],
            body: Body::Empty,
            requires_auth: false,
        }
    }
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }
    #[must_use]
    pub fn query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }
    pub fn json<T>(mut self, data: &T) -> Result<Self>
    where
        T: Serialize,
    {
        let json = serde_json::to_string(data).map_err(|err| Error::Request(err.to_string()))?;
        self.body = Body::Json(json);
        Ok(self)
    }
    #[must_use]
    pub fn multipart(mut self, parts: Vec<FormPart>) -> Self {
        self.body = Body::Multipart(parts);
        self
    }
    #[must_use]
    pub const fn authorized(mut self) -> Self {
        self.requires_auth = true;
        self
    }
    #[must_use]
    pub const fn requires_auth(&self) -> bool {
        self.requires_auth
    }
}

/// The request issuing facility shared by all API wrappers.
#[derive(Clone)]
pub struct Api {
    url: Rc<str>,
    client: Rc<dyn HttpClient>,
}

impl Api {
    pub fn new(url: &str, client: Rc<dyn HttpClient>) -> Self {
        let url = url.trim_end_matches('/').into();
        Self { url, client }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn send<T>(&self, request: ApiRequest, token: Option<&str>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.execute(request, token).await?;
        into_json(response)
    }

    /// Like [`Api::send`] but ignores the body of a successful response.
    pub async fn send_empty(&self, request: ApiRequest, token: Option<&str>) -> Result<()> {
        let response = self.execute(request, token).await?;
        ensure_ok(response).map(|_| ())
    }

    async fn execute(&self, request: ApiRequest, token: Option<&str>) -> Result<HttpResponse> {
        let request = self.build(request, token)?;
        log::debug!("{} {}", request.method.as_str(), request.url);
        let response = self.client.execute(request).await.map_err(|err| {
            log::warn!("Request failed: {err}");
            Error::from(err)
        })?;
        if !response.ok() {
            log::warn!("Request rejected with status {}", response.status);
        }
        Ok(response)
    }

    fn build(&self, request: ApiRequest, token: Option<&str>) -> Result<HttpRequest> {
        let ApiRequest {
            method,
            path,
            query,
            body,
            requires_auth,
        } = request;
        let mut headers = vec![];
        if requires_auth {
            let token = token
                .filter(|t| util::is_valid_token(t))
                .ok_or(Error::MissingCredentials)?;
            headers.push(("Authorization".to_string(), util::auth_header_value(token)));
        }
        if matches!(body, Body::Json(_)) {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        let mut url = format!("{}{path}", self.url);
        if !query.is_empty() {
            url = format!("{url}?{}", util::query_string(&query));
        }
        Ok(HttpRequest {
            method,
            url,
            headers,
            body,
        })
    }
}

pub fn into_json<T>(response: HttpResponse) -> Result<T>
where
    T: DeserializeOwned,
{
    let response = ensure_ok(response)?;
    serde_json::from_str(&response.body).map_err(|err| Error::InvalidResponse(err.to_string()))
}

fn ensure_ok(response: HttpResponse) -> Result<HttpResponse> {
    // ensure we've got 2xx status
    if response.ok() {
        return Ok(response);
    }
    let message = serde_json::from_str::<ErrorResponse>(&response.body)
        .ok()
        .and_then(ErrorResponse::into_message);
    Err(Error::Rejected {
        status: response.status,
        message,
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::{mock::MockClient, *};

    fn api(client: &MockClient) -> Api {
        Api::new("http://localhost:8080/", Rc::new(client.clone()))
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Thing {
        id: u64,
    }

    #[tokio::test]
    async fn surface_server_message() {
        let client = MockClient::new();
        client.respond(400, r#"{"message":"bad input"}"#);
        let err = api(&client)
            .send::<Thing>(ApiRequest::get("/things"), None)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ServerRejection);
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.message(), "bad input");
        assert_eq!(err.user_message("Login failed"), "bad input");
    }

    #[tokio::test]
    async fn fall_back_to_generic_message_without_body() {
        let client = MockClient::new();
        client.respond(400, "");
        let err = api(&client)
            .send_empty(ApiRequest::post("/things"), None)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ServerRejection);
        assert_eq!(err.message(), OPERATION_FAILED_MESSAGE);
        assert_eq!(err.user_message("Login failed"), "Login failed");
    }

    #[tokio::test]
    async fn backend_error_field_is_used_as_message() {
        let client = MockClient::new();
        client.respond(401, r#"{"error":"Invalid credentials"}"#);
        let err = api(&client)
            .send_empty(ApiRequest::post("/login"), None)
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Invalid credentials");
    }

    #[tokio::test]
    async fn classify_missing_response_as_network_failure() {
        let client = MockClient::new();
        client.fail(TransportError::NoResponse("connection refused".into()));
        let err = api(&client)
            .send::<Thing>(ApiRequest::get("/things"), None)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NetworkFailure);
        assert_eq!(err.message(), NETWORK_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn classify_unsendable_request_as_unexpected() {
        let client = MockClient::new();
        client.fail(TransportError::Request("invalid header".into()));
        let err = api(&client)
            .send::<Thing>(ApiRequest::get("/things"), None)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedClientError);
        assert_eq!(err.message(), UNEXPECTED_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn undecodable_success_body_is_unexpected() {
        let client = MockClient::new();
        client.respond(200, "<html>");
        let err = api(&client)
            .send::<Thing>(ApiRequest::get("/things"), None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidResponse(_)));
        assert_eq!(err.message(), UNEXPECTED_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn attach_bearer_header_to_authorized_requests() {
        let client = MockClient::new();
        client.respond(200, r#"{"id":1}"#);
        let thing: Thing = api(&client)
            .send(ApiRequest::get("/things/1").authorized(), Some("t0k3n"))
            .await
            .unwrap();
        assert_eq!(thing, Thing { id: 1 });
        let req = client.last_request().unwrap();
        assert_eq!(req.url, "http://localhost:8080/things/1");
        assert_eq!(req.header("authorization"), Some("Bearer t0k3n"));
    }

    #[tokio::test]
    async fn public_requests_carry_no_credentials() {
        let client = MockClient::new();
        client.respond(200, r#"{"id":1}"#);
        let _: Thing = api(&client)
            .send(ApiRequest::get("/things/1"), Some("t0k3n"))
            .await
            .unwrap();
        assert_eq!(client.last_request().unwrap().header("Authorization"), None);
    }

    #[tokio::test]
    async fn fail_fast_without_credentials() {
        let client = MockClient::new();
        let err = api(&client)
            .send_empty(ApiRequest::post("/things").authorized(), None)
            .await
            .unwrap_err();
        assert_eq!(err, Error::MissingCredentials);

        let err = api(&client)
            .send_empty(ApiRequest::post("/things").authorized(), Some(""))
            .await
            .unwrap_err();
        assert_eq!(err, Error::MissingCredentials);
        assert_eq!(client.request_count(), 0);
    }

    #[tokio::test]
    async fn json_body_and_query() {
        let client = MockClient::new();
        client.respond(201, "");
        let request = ApiRequest::post("/things")
            .query("page", 2)
            .query("name", "a b")
            .json(&serde_json::json!({"x": 1}))
            .unwrap();
        api(&client).send_empty(request, None).await.unwrap();
        let req = client.last_request().unwrap();
        assert_eq!(req.method, Method::Post);
        assert_eq!(req.url, "http://localhost:8080/things?page=2&name=a%20b");
        assert_eq!(req.header("Content-Type"), Some("application/json"));
        assert_eq!(req.body, Body::Json(r#"{"x":1}"#.to_string()));
    }
}
