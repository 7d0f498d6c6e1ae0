use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use dohdig::{
    provider::{Provider, ProviderKind},
    query::QueryRequest,
    report::Report,
    resolver::Resolver,
};
use itertools::Itertools;
use strum::IntoEnumIterator;
use tracing::debug;

/// A small, dig-like command that resolves names through DNS-over-HTTPS providers
#[derive(Parser)]
#[command(name = "dohdig", version = "0.1.0")]
#[command(subcommand_negates_reqs = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// The name to resolve
    #[arg(required = true)]
    resource: Option<String>,

    /// The DoH provider to query (see `list-providers`)
    #[arg(short = 'P', long, default_value = "google")]
    provider: String,

    /// Provider sub-variant, e.g. a BlahDNS country or a NixNet server pool
    #[arg(short = 's', long)]
    variant: Option<String>,

    /// The DNS record type to query
    #[arg(short = 't', long, default_value = "A")]
    record_type: String,

    /// The desired content type to return (Google only)
    #[arg(short = 'c', long, default_value = "application/x-javascript")]
    content_type: String,

    /// Set source IP address for DNS resolution (Google only)
    #[arg(short = 'e', long, default_value = "0.0.0.0/0")]
    edns_client_subnet: String,

    /// Pad request with random data (Google only)
    #[arg(short = 'p', long)]
    random_padding: Option<String>,

    /// Disable DNSSEC validation
    #[arg(short = 'n', long)]
    disable_dnssec_checking: bool,

    /// Show DNSSEC information in response
    #[arg(short = 'd', long, action = ArgAction::Set, default_value_t = true)]
    show_dnssec: bool,

    /// Echo the query options in the report
    #[arg(short = 'o', long)]
    show_options: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the supported providers and their variants
    ListProviders,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::ListProviders) => {
            list_providers();
            Ok(())
        }
        None => query(cli),
    }
}

fn list_providers() {
    for kind in ProviderKind::iter() {
        let variants = kind.variants();
        if variants.is_empty() {
            println!("{}", kind);
        } else {
            println!("{} (variants: {})", kind, variants.iter().join(", "));
        }
    }
}

fn query(cli: Cli) -> Result<()> {
    let resource = cli.resource.context("missing the name to resolve")?;
    let kind = ProviderKind::parse(&cli.provider)?;
    let provider = Provider::select(kind, cli.variant.as_deref())
        .with_context(|| format!("could not select a {} endpoint", kind))?;

    let mut query = QueryRequest::new(resource, cli.record_type)
        .content_type(cli.content_type)
        .edns_client_subnet(cli.edns_client_subnet)
        .disable_validation(cli.disable_dnssec_checking)
        .show_dnssec(cli.show_dnssec);
    if let Some(padding) = cli.random_padding {
        query = query.random_padding(padding);
    }
    debug!(provider = %kind, variant = provider.variant(), "Resolved provider");

    let resolver = Resolver::new().context("could not create the HTTP client")?;
    let response = resolver
        .resolve(&provider, &query)
        .with_context(|| format!("{} query for {} failed", kind, query.resource()))?;

    print!(
        "{}",
        Report::new(&provider, &query, &response).with_options(cli.show_options)
    );
    Ok(())
}
