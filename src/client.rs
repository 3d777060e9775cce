//! Thin client for the Jamix menu service REST API.
//!
//! Two endpoints, both public and unauthenticated:
//!
//! - `GET {base}/public` — the full catalog: every customer with its kitchens
//! - `GET {base}/menu/{customerId}/{kitchenId}?lang=fi` — one kitchen's menus
//!
//! The client owns no state beyond the connection pool; callers pass the
//! fetched catalog around as plain data.

use reqwest::Client;
use tracing::debug;

use crate::error::Error;
use crate::menu::KitchenMenu;
use crate::types::Customer;

/// Production endpoint of the Finnish menu service.
pub const DEFAULT_BASE_URL: &str = "https://fi.jamix.cloud/apps/menuservice/rest/haku";

#[derive(Debug, Clone)]
pub struct JamixClient {
    http: Client,
    base_url: String,
}

impl JamixClient {
    /// Client against the production service.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client against an alternate base URL (tests, mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    /// Fetch the complete customer/kitchen catalog.
    pub async fn fetch_customers(&self) -> Result<Vec<Customer>, Error> {
        let url = format!("{}/public", self.base_url);
        debug!(%url, "fetching kitchen catalog");
        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(Error::Api {
                status: response.status().as_u16(),
            });
        }
        Ok(response.json().await?)
    }

    /// Fetch the menus of one kitchen. Finnish is the only language the
    /// upstream UI requests, so `lang=fi` is hardwired.
    pub async fn fetch_menu(
        &self,
        customer_id: &str,
        kitchen_id: i64,
    ) -> Result<Vec<KitchenMenu>, Error> {
        let url = format!(
            "{}/menu/{}/{}?lang=fi",
            self.base_url, customer_id, kitchen_id
        );
        debug!(%url, "fetching kitchen menu");
        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(Error::Api {
                status: response.status().as_u16(),
            });
        }
        Ok(response.json().await?)
    }
}

impl Default for JamixClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read as _, Write as _};
    use std::net::TcpListener;

    use super::*;

    /// Serve one canned HTTP response on an ephemeral port.
    fn serve_once(status_line: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut request = [0u8; 1024];
                let _ = stream.read(&mut request);
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                    status_line
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{}", addr)
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = JamixClient::with_base_url("http://localhost:9000/haku/");
        assert_eq!(client.base_url, "http://localhost:9000/haku");
    }

    #[tokio::test]
    async fn non_success_status_becomes_api_error() {
        let client = JamixClient::with_base_url(serve_once("503 Service Unavailable"));
        match client.fetch_customers().await {
            Err(Error::Api { status }) => assert_eq!(status, 503),
            other => panic!("expected Error::Api, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn missing_kitchen_becomes_api_error() {
        let client = JamixClient::with_base_url(serve_once("404 Not Found"));
        match client.fetch_menu("12345", 999).await {
            Err(Error::Api { status }) => assert_eq!(status, 404),
            other => panic!("expected Error::Api, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn connection_failure_becomes_http_error() {
        // Bind and drop to get a port with nothing listening on it.
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = JamixClient::with_base_url(format!("http://127.0.0.1:{}", port));
        let result = client.fetch_customers().await;
        assert!(matches!(result, Err(Error::Http(_))), "got {:?}", result);
    }
}
