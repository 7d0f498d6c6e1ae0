/// A single DoH query. Built once per invocation and consumed by one resolve call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    resource: String,
    record_type: String,
    content_type: Option<String>,
    edns_client_subnet: Option<String>,
    random_padding: Option<String>,
    disable_validation: bool,
    show_dnssec: bool,
}

impl QueryRequest {
    // A query for `resource` with the defaults of the command line: DNSSEC data
    // requested, validation left enabled and no optional parameters set.
    pub fn new(resource: impl Into<String>, record_type: impl Into<String>) -> QueryRequest {
        QueryRequest {
            resource: resource.into(),
            record_type: record_type.into(),
            content_type: None,
            edns_client_subnet: None,
            random_padding: None,
            disable_validation: false,
            show_dnssec: true,
        }
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> QueryRequest {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn edns_client_subnet(mut self, subnet: impl Into<String>) -> QueryRequest {
        self.edns_client_subnet = Some(subnet.into());
        self
    }

    pub fn random_padding(mut self, padding: impl Into<String>) -> QueryRequest {
        self.random_padding = Some(padding.into());
        self
    }

    pub fn disable_validation(mut self, disable: bool) -> QueryRequest {
        self.disable_validation = disable;
        self
    }

    pub fn show_dnssec(mut self, show: bool) -> QueryRequest {
        self.show_dnssec = show;
        self
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn record_type(&self) -> &str {
        &self.record_type
    }

    pub fn content_type_value(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn edns_client_subnet_value(&self) -> Option<&str> {
        self.edns_client_subnet.as_deref()
    }

    pub fn random_padding_value(&self) -> Option<&str> {
        self.random_padding.as_deref()
    }

    pub fn disables_validation(&self) -> bool {
        self.disable_validation
    }

    pub fn shows_dnssec(&self) -> bool {
        self.show_dnssec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let query = QueryRequest::new("example.com", "A");
        assert_eq!(query.resource(), "example.com");
        assert_eq!(query.record_type(), "A");
        assert!(query.shows_dnssec());
        assert!(!query.disables_validation());
        assert_eq!(query.content_type_value(), None);
        assert_eq!(query.edns_client_subnet_value(), None);
        assert_eq!(query.random_padding_value(), None);
    }

    #[test]
    fn test_builder() {
        let query = QueryRequest::new("example.com", "MX")
            .content_type("application/dns-json")
            .edns_client_subnet("0.0.0.0/0")
            .random_padding("xyz")
            .disable_validation(true)
            .show_dnssec(false);
        assert_eq!(query.content_type_value(), Some("application/dns-json"));
        assert_eq!(query.edns_client_subnet_value(), Some("0.0.0.0/0"));
        assert_eq!(query.random_padding_value(), Some("xyz"));
        assert!(query.disables_validation());
        assert!(!query.shows_dnssec());
    }
}
