use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use tracing::{debug, warn};

use crate::error::{map_transport_err, Result};
use crate::provider::Endpoint;
use crate::query::QueryRequest;
use crate::response::QueryResponse;

// Resolver sends DoH JSON queries. The underlying HTTP client is reused for the
// lifetime of the resolver.
pub struct Resolver {
    client: Client,
}

impl Resolver {
    pub fn new() -> Result<Resolver> {
        let client = Client::builder().build().map_err(|e| map_transport_err(&e))?;
        Ok(Resolver { client })
    }

    pub fn with_client(client: Client) -> Resolver {
        Resolver { client }
    }

    // Builds the URL for `query`, performs exactly one GET against the endpoint and
    // returns the parsed and annotated response.
    pub fn resolve(&self, endpoint: &impl Endpoint, query: &QueryRequest) -> Result<QueryResponse> {
        let url = endpoint.url(query)?;
        debug!(url = %url, record_type = query.record_type(), "Sending DoH query");

        let mut request = self.client.get(url.clone());
        if let Some(accept) = endpoint.accept() {
            request = request.header(ACCEPT, accept);
        }
        let response = request.send().map_err(|e| map_transport_err(&e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "DoH endpoint returned a non-success status");
        }

        let body = response.bytes().map_err(|e| map_transport_err(&e))?;
        debug!(url = %url, response_len = body.len(), "DoH response received");

        QueryResponse::from_json(&body)
    }
}
