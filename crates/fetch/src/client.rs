//! Blocking HTTP client shared by the provider clients.

use serde::de::DeserializeOwned;

use ppinet_core::{PpiError, PpiResult};

use crate::config::FetchConfig;

/// A `ureq` agent with the configured timeout and user agent.
///
/// A 404 is reported as `Ok(None)`; every other non-success status and
/// every transport failure becomes [`PpiError::Http`].
#[derive(Debug, Clone)]
pub struct HttpClient {
    agent: ureq::Agent,
}

impl HttpClient {
    /// Build a client from `config`.
    pub fn new(config: &FetchConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout())
            .user_agent(&format!("{}/{}", config.tool, env!("CARGO_PKG_VERSION")))
            .build();
        Self { agent }
    }

    /// GET `url` and return the body as text.
    pub fn get_text(
        &self,
        url: &str,
        query: &[(&str, &str)],
        accept: &str,
    ) -> PpiResult<Option<String>> {
        match self.send(url, query, accept)? {
            Some(response) => response
                .into_string()
                .map(Some)
                .map_err(|e| PpiError::http(url, format!("reading body: {}", e))),
            None => Ok(None),
        }
    }

    /// GET `url` and decode a JSON body.
    pub fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> PpiResult<Option<T>> {
        match self.send(url, query, "application/json")? {
            Some(response) => response
                .into_json::<T>()
                .map(Some)
                .map_err(|e| PpiError::http(url, format!("decoding JSON: {}", e))),
            None => Ok(None),
        }
    }

    fn send(&self, url: &str, query: &[(&str, &str)], accept: &str) -> PpiResult<Option<ureq::Response>> {
        let mut request = self
            .agent
            .get(url)
            .set("Accept", accept)
            .set("Content-Type", accept);
        for (key, value) in query {
            request = request.query(key, value);
        }
        tracing::debug!(url, "GET");

        match request.call() {
            Ok(response) => Ok(Some(response)),
            Err(ureq::Error::Status(404, _)) => Ok(None),
            Err(ureq::Error::Status(code, response)) => Err(PpiError::http(
                url,
                format!("HTTP {} {}", code, response.status_text()),
            )),
            Err(ureq::Error::Transport(transport)) => Err(PpiError::http(url, transport.to_string())),
        }
    }
}
