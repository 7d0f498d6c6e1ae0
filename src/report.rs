//! Terminal rendering of a resolved query.

use std::fmt::{self, Display, Formatter};

use crate::provider::Provider;
use crate::query::QueryRequest;
use crate::response::{Answer, QueryResponse};

/// The dig-like report printed for one query.
///
/// The options block echoing the request is only rendered when
/// [`Report::with_options`] is used.
pub struct Report<'a> {
    provider: &'a Provider,
    query: &'a QueryRequest,
    response: &'a QueryResponse,
    show_options: bool,
}

impl<'a> Report<'a> {
    pub fn new(provider: &'a Provider, query: &'a QueryRequest, response: &'a QueryResponse) -> Report<'a> {
        Report {
            provider,
            query,
            response,
            show_options: false,
        }
    }

    pub fn with_options(mut self, show: bool) -> Report<'a> {
        self.show_options = show;
        self
    }

    fn fmt_options(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let query = self.query;
        writeln!(f, "Options:")?;
        writeln!(f, "  Provider:           {}", self.provider.kind())?;
        writeln!(f, "  Variant:            {}", self.provider.variant().unwrap_or(""))?;
        writeln!(f, "  Record Type:        {}", query.record_type())?;
        writeln!(f, "  Content Type:       {}", query.content_type_value().unwrap_or(""))?;
        writeln!(f, "  eDNS Client Subnet: {}", query.edns_client_subnet_value().unwrap_or(""))?;
        writeln!(f, "  Random Pad:         {}", query.random_padding_value().unwrap_or(""))?;
        writeln!(f, "  Disable DNSSEC:     {}", query.disables_validation())?;
        writeln!(f, "  Show DNSSEC:        {}", query.shows_dnssec())
    }
}

fn fmt_record(f: &mut Formatter<'_>, record: &Answer) -> fmt::Result {
    writeln!(
        f,
        "    {}  {}  {}  {}",
        record.name(),
        record.ttl(),
        record.type_name(),
        record.data()
    )
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let response = self.response;
        writeln!(f, "Querying:")?;
        writeln!(f, "  {}", self.query.resource())?;
        if self.show_options {
            self.fmt_options(f)?;
        }
        writeln!(f, "Answer:")?;
        writeln!(f, "  Status:             {}", response.status())?;
        writeln!(f, "  Truncated:          {}", response.truncated())?;
        writeln!(f, "  RD:                 {}", response.recursion_desired())?;
        writeln!(f, "  RA:                 {}", response.recursion_available())?;
        writeln!(f, "  DNSSEC Validated:   {}", response.authenticated_data())?;
        writeln!(f, "  DNSSEC Disabled:    {}", response.checking_disabled())?;
        writeln!(f, "  eDNS Client Subnet: {}", response.edns_client_subnet().unwrap_or(""))?;
        writeln!(f, "  Data:")?;
        for answer in response.answers() {
            fmt_record(f, answer)?;
        }
        if !response.authorities().is_empty() {
            writeln!(f, "  Authority:")?;
            for authority in response.authorities() {
                fmt_record(f, authority)?;
            }
        }
        for additional in response.additionals() {
            writeln!(f, "Additional: {}", additional)?;
        }
        if let Some(comment) = response.comment() {
            writeln!(f, "Comment: {}", comment)?;
        }
        Ok(())
    }
}
