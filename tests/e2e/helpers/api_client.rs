use anyhow::Result;
use http_body_util::{BodyExt, Empty};
use hyper::body::Bytes;
use hyper::{HeaderMap, Request, StatusCode};
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;
use serde_json::Value;

/// Minimal HTTP client for exercising the gateway. The gateway surface is
/// GET-only, so that is all this client speaks.
pub struct TestClient {
    base_url: String,
    client: Client<HttpConnector, Empty<Bytes>>,
}

impl TestClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            client: Client::builder(TokioExecutor::new()).build_http(),
        }
    }

    pub async fn get(&self, path: &str) -> Result<ApiResponse> {
        let request =
            Request::get(format!("{}{}", self.base_url, path)).body(Empty::<Bytes>::new())?;

        let response = self.client.request(request).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = response.into_body().collect().await?.to_bytes().to_vec();
        let body = serde_json::from_slice(&body_bytes).ok();

        Ok(ApiResponse {
            status,
            headers,
            body,
            body_bytes,
        })
    }
}

pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Option<Value>,
    pub body_bytes: Vec<u8>,
}

impl ApiResponse {
    pub fn assert_status(&self, expected: StatusCode) -> &Self {
        assert_eq!(
            self.status, expected,
            "unexpected status; body: {:?}",
            self.body
        );
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json(&self) -> &Value {
        self.body.as_ref().expect("response body is not JSON")
    }
}
