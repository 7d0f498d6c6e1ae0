use std::str::FromStr;

use itertools::Itertools;
use reqwest::Url;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::{DohDigError, Result};
use crate::query::QueryRequest;

// Accept header required by the providers serving JSON on their `/dns-query` path.
pub const DNS_JSON: &str = "application/dns-json";

// The identifiers accepted by `--provider` and printed by `list-providers`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, EnumIter, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ProviderKind {
    Google,
    Cloudflare,
    BlahDns,
    NextDns,
    NixNet,
    SecureDns,
    Snopyta,
}

impl ProviderKind {
    pub fn parse(id: &str) -> Result<ProviderKind> {
        ProviderKind::from_str(id).map_err(|_| DohDigError::UnknownProvider(id.to_owned()))
    }

    // The sub-variant selectors this provider accepts; the first one is the default.
    pub fn variants(&self) -> Vec<&'static str> {
        match self {
            ProviderKind::BlahDns => BlahCountry::iter().map(<&'static str>::from).collect(),
            ProviderKind::NixNet => NixNetServer::iter().map(<&'static str>::from).collect(),
            _ => vec![],
        }
    }
}

// BlahDNS server locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum BlahCountry {
    Fi,
    Jp,
    De,
}

// NixNet server pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum NixNetServer {
    Uncensored,
    Adblock,
    LasVegas,
    NewYork,
    Luxembourg,
}

impl NixNetServer {
    fn host(&self) -> &'static str {
        match self {
            NixNetServer::Uncensored => "uncensored.any.dns.nixnet.xyz",
            NixNetServer::Adblock => "adblock.any.dns.nixnet.xyz",
            NixNetServer::LasVegas => "uncensored.lv1.dns.nixnet.xyz",
            NixNetServer::NewYork => "uncensored.ny1.dns.nixnet.xyz",
            NixNetServer::Luxembourg => "uncensored.lux1.dns.nixnet.xyz",
        }
    }
}

/// Something the resolver can send a DoH JSON query to.
pub trait Endpoint {
    /// The full request URL for `query`, query string included.
    fn url(&self, query: &QueryRequest) -> Result<Url>;

    /// Value of the `Accept` header, when the endpoint needs one.
    fn accept(&self) -> Option<&'static str> {
        None
    }
}

/// A provider with its sub-variant resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Google,
    Cloudflare,
    BlahDns(BlahCountry),
    NextDns,
    NixNet(NixNetServer),
    SecureDns,
    Snopyta,
}

impl Provider {
    // Resolves the sub-variant for `kind`. Providers with variants fall back to their
    // first one when none is given; any selector they do not know, or any selector at
    // all for a provider without variants, is rejected.
    pub fn select(kind: ProviderKind, variant: Option<&str>) -> Result<Provider> {
        let unsupported = |v: &str| DohDigError::UnsupportedVariant(kind.to_string(), v.to_owned());
        let provider = match (kind, variant) {
            (ProviderKind::BlahDns, None) => Provider::BlahDns(BlahCountry::Fi),
            (ProviderKind::BlahDns, Some(v)) => {
                Provider::BlahDns(BlahCountry::from_str(v).map_err(|_| unsupported(v))?)
            }
            (ProviderKind::NixNet, None) => Provider::NixNet(NixNetServer::Uncensored),
            (ProviderKind::NixNet, Some(v)) => {
                Provider::NixNet(NixNetServer::from_str(v).map_err(|_| unsupported(v))?)
            }
            (_, Some(v)) => return Err(unsupported(v)),
            (ProviderKind::Google, None) => Provider::Google,
            (ProviderKind::Cloudflare, None) => Provider::Cloudflare,
            (ProviderKind::NextDns, None) => Provider::NextDns,
            (ProviderKind::SecureDns, None) => Provider::SecureDns,
            (ProviderKind::Snopyta, None) => Provider::Snopyta,
        };
        Ok(provider)
    }

    pub fn kind(&self) -> ProviderKind {
        match self {
            Provider::Google => ProviderKind::Google,
            Provider::Cloudflare => ProviderKind::Cloudflare,
            Provider::BlahDns(_) => ProviderKind::BlahDns,
            Provider::NextDns => ProviderKind::NextDns,
            Provider::NixNet(_) => ProviderKind::NixNet,
            Provider::SecureDns => ProviderKind::SecureDns,
            Provider::Snopyta => ProviderKind::Snopyta,
        }
    }

    pub fn variant(&self) -> Option<&'static str> {
        match self {
            Provider::BlahDns(country) => Some((*country).into()),
            Provider::NixNet(server) => Some((*server).into()),
            _ => None,
        }
    }

    pub fn base_url(&self) -> String {
        match self {
            Provider::Google => String::from("https://dns.google.com/resolve"),
            Provider::Cloudflare => String::from("https://cloudflare-dns.com/dns-query"),
            Provider::BlahDns(country) => {
                format!("https://doh-{}.blahdns.com/dns-query", <&'static str>::from(*country))
            }
            Provider::NextDns => String::from("https://dns.nextdns.io/dns-query"),
            Provider::NixNet(server) => format!("https://{}/dns-query", server.host()),
            Provider::SecureDns => String::from("https://doh.securedns.eu/dns-query"),
            Provider::Snopyta => String::from("https://fi.doh.dns.snopyta.org/dns-query"),
        }
    }

    // The query parameters this provider honours, in the order they are sent. Only
    // Google's JSON API understands the content type, subnet and padding extensions.
    pub fn params(&self, query: &QueryRequest) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("name", query.resource().to_owned()),
            ("type", query.record_type().to_owned()),
        ];
        if let Provider::Google = self {
            let extensions = [
                ("ct", query.content_type_value()),
                ("edns_client_subnet", query.edns_client_subnet_value()),
                ("random_padding", query.random_padding_value()),
            ];
            for (key, value) in extensions {
                if let Some(value) = value {
                    params.push((key, value.to_owned()));
                }
            }
        }
        params.push(("cd", query.disables_validation().to_string()));
        params.push(("do", query.shows_dnssec().to_string()));
        params
    }
}

impl Endpoint for Provider {
    fn url(&self, query: &QueryRequest) -> Result<Url> {
        build_url(&self.base_url(), &self.params(query), query.resource())
    }

    fn accept(&self) -> Option<&'static str> {
        match self {
            Provider::Google => None,
            _ => Some(DNS_JSON),
        }
    }
}

// Appends `params` to `base` verbatim and parses the result. Values are not escaped
// beyond what URL parsing itself does, so malformed input reaches the provider as is.
pub fn build_url(base: &str, params: &[(&str, String)], resource: &str) -> Result<Url> {
    let query = params
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .join("&");
    Url::parse(&format!("{base}?{query}"))
        .map_err(|e| DohDigError::UrlConstruction(resource.to_owned(), e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url_for(kind: ProviderKind, variant: Option<&str>, query: &QueryRequest) -> String {
        Provider::select(kind, variant)
            .unwrap()
            .url(query)
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_google_url() {
        let query = QueryRequest::new("example.com", "A");
        let url = url_for(ProviderKind::Google, None, &query);
        assert_eq!(url, "https://dns.google.com/resolve?name=example.com&type=A&cd=false&do=true");
    }

    #[test]
    fn test_google_url_with_extensions() {
        let query = QueryRequest::new("example.com", "A")
            .content_type("application/x-javascript")
            .edns_client_subnet("0.0.0.0/0")
            .random_padding("abc")
            .disable_validation(true);
        let url = url_for(ProviderKind::Google, None, &query);
        assert!(url.contains("name=example.com&type=A"));
        assert!(url.contains("ct=application/x-javascript"));
        assert!(url.contains("edns_client_subnet=0.0.0.0/0"));
        assert!(url.contains("random_padding=abc"));
        assert!(url.ends_with("cd=true&do=true"));
    }

    #[test]
    fn test_json_providers_ignore_google_extensions() {
        let query = QueryRequest::new("example.com", "AAAA")
            .content_type("application/x-javascript")
            .edns_client_subnet("1.2.3.0/24");
        let cases = [
            (ProviderKind::Cloudflare, None, "cloudflare-dns.com"),
            (ProviderKind::BlahDns, Some("jp"), "doh-jp.blahdns.com"),
            (ProviderKind::NextDns, None, "dns.nextdns.io"),
            (ProviderKind::NixNet, Some("newyork"), "uncensored.ny1.dns.nixnet.xyz"),
            (ProviderKind::SecureDns, None, "doh.securedns.eu"),
            (ProviderKind::Snopyta, None, "fi.doh.dns.snopyta.org"),
        ];
        for (kind, variant, host) in cases {
            let provider = Provider::select(kind, variant).unwrap();
            let url = provider.url(&query).unwrap();
            assert_eq!(url.host_str(), Some(host));
            assert_eq!(url.path(), "/dns-query");
            assert_eq!(url.query(), Some("name=example.com&type=AAAA&cd=false&do=true"));
            assert_eq!(provider.accept(), Some(DNS_JSON));
        }
        assert_eq!(Provider::Google.accept(), None);
    }

    #[test]
    fn test_variant_defaults() {
        assert_eq!(
            Provider::select(ProviderKind::BlahDns, None).unwrap(),
            Provider::BlahDns(BlahCountry::Fi)
        );
        assert_eq!(
            Provider::select(ProviderKind::NixNet, None).unwrap(),
            Provider::NixNet(NixNetServer::Uncensored)
        );
        assert_eq!(
            Provider::select(ProviderKind::NixNet, Some("lasvegas")).unwrap().base_url(),
            "https://uncensored.lv1.dns.nixnet.xyz/dns-query"
        );
    }

    #[test]
    fn test_unsupported_variant() {
        let err = Provider::select(ProviderKind::BlahDns, Some("xx")).unwrap_err();
        assert!(matches!(
            err,
            DohDigError::UnsupportedVariant(ref p, ref v) if p == "blahdns" && v == "xx"
        ));
        assert!(Provider::select(ProviderKind::NixNet, Some("tokyo")).is_err());
        assert!(Provider::select(ProviderKind::Google, Some("fi")).is_err());
    }

    #[test]
    fn test_provider_kind_parse() {
        assert_eq!(ProviderKind::parse("google").unwrap(), ProviderKind::Google);
        assert_eq!(ProviderKind::parse("BlahDNS").unwrap(), ProviderKind::BlahDns);
        assert_eq!(ProviderKind::parse("nixnet").unwrap(), ProviderKind::NixNet);
        assert!(matches!(
            ProviderKind::parse("quad9"),
            Err(DohDigError::UnknownProvider(id)) if id == "quad9"
        ));
    }

    #[test]
    fn test_listing() {
        let ids: Vec<String> = ProviderKind::iter().map(|k| k.to_string()).collect();
        assert_eq!(
            ids,
            ["google", "cloudflare", "blahdns", "nextdns", "nixnet", "securedns", "snopyta"]
        );
        assert_eq!(ProviderKind::BlahDns.variants(), ["fi", "jp", "de"]);
        assert!(ProviderKind::Snopyta.variants().is_empty());
        assert_eq!(
            ProviderKind::NixNet.variants(),
            ["uncensored", "adblock", "lasvegas", "newyork", "luxembourg"]
        );
        for country in BlahCountry::iter() {
            let provider = Provider::BlahDns(country);
            let selector = provider.variant().unwrap();
            assert_eq!(provider.base_url(), format!("https://doh-{selector}.blahdns.com/dns-query"));
        }
        for kind in ProviderKind::iter() {
            for variant in kind.variants() {
                let provider = Provider::select(kind, Some(variant)).unwrap();
                assert_eq!(provider.kind(), kind);
                assert_eq!(provider.variant(), Some(variant));
            }
        }
    }

    #[test]
    fn test_invalid_base_is_a_url_error() {
        let err = build_url("not a url", &[("name", String::from("x"))], "x").unwrap_err();
        assert!(matches!(err, DohDigError::UrlConstruction(ref r, _) if r == "x"));
    }
}
