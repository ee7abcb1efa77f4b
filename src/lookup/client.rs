//! HTTP transport for the name registry.

use async_trait::async_trait;
use tracing::{debug, warn};

use super::parser::{parse_lookup_response, ResponseFormat};
use super::{LookupResult, NameLookup};
use crate::core::config::LookupConfig;
use crate::core::errors::{NamesmithError, NamesmithResultExt, Result};

/// [`NameLookup`] backed by the registry's HTTP endpoint.
pub struct HttpNameLookup {
    endpoint: String,
    lang_id: u32,
    format: ResponseFormat,
    client: reqwest::Client,
}

impl HttpNameLookup {
    /// Build a client with the configured per-request timeout
    pub fn new(config: &LookupConfig) -> Result<Self> {
        config.validate()?;
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_http_err("building lookup client")?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            lang_id: config.lang_id,
            format: ResponseFormat::from(config),
            client,
        })
    }

    /// Fetch the raw response body for `name`.
    pub async fn fetch_raw(&self, name: &str) -> Result<String> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("lang_id", self.lang_id.to_string()), ("name", name.to_string())])
            .send()
            .await
            .map_http_err("querying name registry")?;

        let status = response.status();
        if !status.is_success() {
            return Err(NamesmithError::http(
                "querying name registry",
                format!("unexpected status {status}"),
            ));
        }

        response.text().await.map_http_err("reading registry response")
    }
}

#[async_trait]
impl NameLookup for HttpNameLookup {
    async fn lookup(&self, name: &str) -> Option<LookupResult> {
        match self.fetch_raw(name).await {
            Ok(body) => {
                let parsed = parse_lookup_response(name, &body, &self.format);
                if parsed.is_none() {
                    debug!(candidate = name, "registry has no entry");
                }
                parsed
            }
            Err(err) => {
                warn!(candidate = name, error = %err, "name lookup failed, treating as not found");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve one canned HTTP response and hand back the request line received.
    async fn serve_once(
        status: &'static str,
        body: &'static str,
    ) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let endpoint = format!("http://{}/names_content.php", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {status}\r\n\
                 Content-Type: text/plain; charset=utf-8\r\n\
                 Content-Length: {}\r\n\
                 Connection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();

            String::from_utf8_lossy(&request)
                .lines()
                .next()
                .unwrap_or_default()
                .to_string()
        });

        (endpoint, handle)
    }

    fn client_for(endpoint: String) -> HttpNameLookup {
        let config = LookupConfig {
            endpoint,
            timeout_secs: 2,
            ..LookupConfig::default()
        };
        HttpNameLookup::new(&config).expect("client")
    }

    #[tokio::test]
    async fn found_name_is_queried_and_parsed() {
        let (endpoint, server) = serve_once("200 OK", "Şükür - (turkcha) shukr").await;
        let client = client_for(endpoint);

        let result = client.lookup("Şükür").await;

        assert_eq!(
            result,
            Some(LookupResult {
                meaning: "shukr".to_string(),
                origin: "turkcha".to_string(),
            })
        );
        let request_line = server.await.unwrap();
        assert_eq!(
            request_line,
            "GET /names_content.php?lang_id=1&name=%C5%9E%C3%BCk%C3%BCr HTTP/1.1"
        );
    }

    #[tokio::test]
    async fn not_found_body_is_none() {
        let (endpoint, server) = serve_once("200 OK", "Bunday ism topilmadi").await;
        let client = client_for(endpoint);

        assert!(client.lookup("Qwerty").await.is_none());
        assert!(server.await.unwrap().contains("name=Qwerty"));
    }

    #[tokio::test]
    async fn error_status_is_none() {
        let (endpoint, server) =
            serve_once("500 Internal Server Error", "Kamol - (arabcha) mukammal").await;
        let client = client_for(endpoint);

        assert!(client.lookup("Kamol").await.is_none());
        server.await.unwrap();
    }

    #[test]
    fn rejects_invalid_config() {
        let mut config = LookupConfig::default();
        config.timeout_secs = 0;
        assert!(HttpNameLookup::new(&config).is_err());
    }

    #[tokio::test]
    async fn unreachable_registry_is_not_found() {
        let config = LookupConfig {
            // port 9 (discard) is closed on test machines
            endpoint: "http://127.0.0.1:9/names_content.php".to_string(),
            timeout_secs: 1,
            ..LookupConfig::default()
        };
        let client = HttpNameLookup::new(&config).expect("client");

        assert!(client.lookup("Kamol").await.is_none());
        assert!(client.fetch_raw("Kamol").await.is_err());
    }
}
