//! 共享测试工具：fixture 解析、脚本化 Transport、回环 axum 服务器

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dnsimple_client::{Client, ClientError, RawResponse, Result, Transport, TransportRequest};
use axum::Router;
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::response::IntoResponse;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping: {} is not set", $var);
                return;
            }
        )+
    };
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

// ============ Fixtures ============

/// A recorded HTTP response (`tests/fixtures/**/*.http`).
///
/// Format: status line, headers, blank line, body.
#[derive(Debug, Clone)]
pub struct Fixture {
    pub status: u16,
    pub reason: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Fixture {
    /// Load a fixture by its path relative to `tests/fixtures`.
    pub fn load(name: &str) -> Self {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name);
        let text = std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("cannot read fixture {}: {e}", path.display()));
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Self {
        let text = text.replace("\r\n", "\n");
        let (head, body) = text.split_once("\n\n").unwrap_or((text.as_str(), ""));

        let mut lines = head.lines();
        let status_line = lines.next().unwrap_or_default();
        let mut parts = status_line.splitn(3, ' ');
        let _version = parts.next();
        let status = parts
            .next()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(|| panic!("bad status line: {status_line}"));
        let reason = parts.next().unwrap_or_default().to_string();

        let headers = lines
            .filter_map(|line| line.split_once(':'))
            .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
            .collect();

        Self {
            status,
            reason,
            headers,
            body: body.trim_end().to_string(),
        }
    }

    /// As returned by a [`Transport`].
    pub fn to_raw_response(&self) -> RawResponse {
        let mut headers = HeaderMap::new();
        for (name, value) in &self.headers {
            let (Ok(name), Ok(value)) = (
                HeaderName::from_bytes(name.to_ascii_lowercase().as_bytes()),
                HeaderValue::from_str(value),
            ) else {
                continue;
            };
            headers.append(name, value);
        }
        RawResponse {
            status: self.status,
            headers,
            body: self.body.clone(),
        }
    }

    /// As served by [`MockServer`].
    pub fn to_http_response(&self) -> axum::response::Response {
        let mut builder = axum::http::Response::builder().status(self.status);
        for (name, value) in &self.headers {
            // Framing headers are recomputed by the server
            if matches!(
                name.to_ascii_lowercase().as_str(),
                "content-length" | "connection" | "transfer-encoding"
            ) {
                continue;
            }
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder
            .body(Body::from(self.body.clone()))
            .unwrap_or_else(|e| panic!("invalid fixture response: {e}"))
    }
}

// ============ Scripted transport ============

/// In-memory [`Transport`] that replays fixtures in order and records requests.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<RawResponse>>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl ScriptedTransport {
    pub fn new(fixtures: &[&str]) -> Arc<Self> {
        let responses = fixtures
            .iter()
            .map(|name| Fixture::load(name).to_raw_response())
            .collect();
        Arc::new(Self {
            responses: Mutex::new(responses),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn last_request(&self) -> Option<TransportRequest> {
        self.requests().pop()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: TransportRequest) -> Result<RawResponse> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }
        self.responses
            .lock()
            .ok()
            .and_then(|mut queue| queue.pop_front())
            .ok_or_else(|| ClientError::NetworkError {
                detail: "no scripted response left".to_string(),
            })
    }
}

/// Client backed by a [`ScriptedTransport`] replaying `fixtures`.
pub fn scripted_client(fixtures: &[&str]) -> (Client, Arc<ScriptedTransport>) {
    let transport = ScriptedTransport::new(fixtures);
    let client = Client::with_transport(transport.clone());
    (client, transport)
}

// ============ Loopback HTTP server ============

/// A request as received by [`MockServer`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    /// Header names are lower-cased.
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    pub fn json_body(&self) -> serde_json::Value {
        serde_json::from_str(&self.body)
            .unwrap_or_else(|e| panic!("request body is not JSON ({e}): {}", self.body))
    }
}

/// axum server on `127.0.0.1` replaying fixtures in order, one per request.
///
/// Once the script is exhausted every request gets `501 Not Implemented`.
pub struct MockServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: JoinHandle<()>,
}

#[derive(Clone)]
struct ReplayState {
    responses: Arc<Mutex<VecDeque<Fixture>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockServer {
    pub async fn start(fixtures: &[&str]) -> Self {
        let responses: VecDeque<Fixture> = fixtures.iter().map(|name| Fixture::load(name)).collect();
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .unwrap_or_else(|e| panic!("cannot bind loopback listener: {e}"));
        let addr = listener
            .local_addr()
            .unwrap_or_else(|e| panic!("no local address: {e}"));

        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = ReplayState {
            responses: Arc::new(Mutex::new(responses)),
            requests: Arc::clone(&requests),
        };
        let app = Router::new().fallback(replay).with_state(state);

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("mock server stopped: {e}");
            }
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
            handle,
        }
    }

    /// Client pointed at this server, bypassing any system proxy.
    pub fn client(&self) -> Client {
        Client::builder("test-token")
            .base_url(&self.base_url)
            .no_proxy()
            .build()
            .unwrap_or_else(|e| panic!("cannot build client: {e}"))
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Fallback handler: record the request, answer with the next fixture
async fn replay(
    State(state): State<ReplayState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> axum::response::Response {
    let recorded = RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        headers: headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect(),
        body: String::from_utf8_lossy(&body).into_owned(),
    };
    if let Ok(mut list) = state.requests.lock() {
        list.push(recorded);
    }

    let next = state.responses.lock().ok().and_then(|mut queue| queue.pop_front());
    match next {
        Some(fixture) => fixture.to_http_response(),
        None => (StatusCode::NOT_IMPLEMENTED, "no scripted response left").into_response(),
    }
}
