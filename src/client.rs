use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use hyper::{client::HttpConnector, header::USER_AGENT, Body, Client, Request};
use hyper_tls::HttpsConnector;
use tokio::time::timeout;
use url::Url;

use crate::{
    error_context,
    utils::http::{hyper_client, random_useragent},
};

/// Raw outcome of one GET against the service: final status plus the
/// undecoded body. Decoding is left to the caller so that error payloads
/// can be parsed too.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Seam between the controller and the wire. Everything above this trait is
/// testable without a running service.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issues a GET for `endpoint` (path + query, relative to the service
    /// root). An `Err` means the response never made it back; a non-2xx
    /// status comes back as `Ok`.
    async fn get(&self, endpoint: &str) -> anyhow::Result<ApiResponse>;
}

pub struct HttpTransport {
    base_url: Url,
    client: Client<HttpsConnector<HttpConnector>>,
    timeout: u64,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout: u64) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url).context(error_context!())?;
        if !base_url.has_host() {
            anyhow::bail!("base url does not have a valid host");
        }
        Ok(HttpTransport {
            base_url,
            client: hyper_client(),
            timeout,
        })
    }
}

impl std::fmt::Display for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<HttpTransport {}>", self.base_url)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, endpoint: &str) -> anyhow::Result<ApiResponse> {
        let url = self.base_url.join(endpoint).context(error_context!())?;
        let request = Request::builder()
            .uri(url.as_str())
            .header(USER_AGENT, random_useragent(true))
            .body(Body::empty())
            .context(error_context!())?;

        let response = timeout(
            Duration::from_secs(self.timeout),
            self.client.request(request),
        )
        .await
        .context(error_context!())?
        .context(error_context!())?;

        let status = response.status().as_u16();
        let body = hyper::body::to_bytes(response.into_body())
            .await
            .context(error_context!())?;
        log::debug!("GET {} -> {} ({} bytes)", url, status, body.len());

        Ok(ApiResponse {
            status,
            body: body.to_vec(),
        })
    }
}
