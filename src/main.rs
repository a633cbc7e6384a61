//! Pay-for-Blob submission CLI entry point.
//!
//! The CLI is the presentation layer around [`PfbStore`]: it resolves the
//! endpoint selection, enforces the non-empty input and endpoint-selected
//! guards, and renders the store state after an operation. The core never
//! sees an unselected endpoint.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pfb_submit::endpoint::Endpoint;
use pfb_submit::submit::PfbTx;
use pfb_submit::{Config, PfbStore, ViewStatus};

/// Display name of the fixed public endpoint. It is offered alongside the
/// stored collection but never persisted or removable.
const PUBLIC_ENDPOINT_NAME: &str = "AndromedaPool public endpoint";

/// URL of the fixed public endpoint.
const PUBLIC_ENDPOINT_URL: &str = "https://bridge-node-pfb.andromedapool.com/submit_pfb";

/// Pay-for-Blob submission client.
#[derive(Parser, Debug)]
#[command(name = "pfb-submit")]
#[command(about = "Submit Pay-for-Blob transactions to a data availability node endpoint")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit a Pay-for-Blob transaction to the selected endpoint.
    Submit {
        /// Namespace ID tagging the submitted blob.
        #[arg(long)]
        namespace_id: String,

        /// Blob payload, e.g. a hex-encoded message.
        #[arg(long)]
        data: String,

        /// Endpoint to submit to, by name or url.
        #[arg(short, long)]
        endpoint: Option<String>,
    },

    /// Manage the persisted endpoint collection.
    Endpoint {
        #[command(subcommand)]
        action: EndpointAction,
    },

    /// Print the effective configuration.
    CheckConfig,
}

#[derive(Subcommand, Debug)]
enum EndpointAction {
    /// Add an endpoint to the collection. Duplicates are kept as-is.
    Add {
        /// Display name, e.g. "Server 1".
        name: String,
        /// Submission url, e.g. https://<your_ip_address>:26659/submit_pfb
        url: String,
    },

    /// Remove every stored endpoint with this url.
    Remove {
        /// Url to remove.
        url: String,
    },

    /// List the public endpoint and every stored endpoint.
    List,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("pfb_submit=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let config = Config::load()?;

    match args.command {
        Command::Submit {
            namespace_id,
            data,
            endpoint,
        } => cmd_submit(&config, namespace_id, data, endpoint).await,
        Command::Endpoint { action } => cmd_endpoint(&config, action),
        Command::CheckConfig => cmd_check_config(&config),
    }
}

/// Submit a transaction and render the resulting store state.
async fn cmd_submit(
    config: &Config,
    namespace_id: String,
    data: String,
    endpoint: Option<String>,
) -> anyhow::Result<()> {
    if namespace_id.is_empty() {
        anyhow::bail!("namespace id must not be empty");
    }
    if data.is_empty() {
        anyhow::bail!("data must not be empty");
    }

    let store = PfbStore::from_config(config)?;

    let Some(selection) = endpoint else {
        anyhow::bail!(
            "no endpoint selected; pass --endpoint (the public endpoint is {PUBLIC_ENDPOINT_URL})"
        );
    };
    let url = resolve_endpoint(&store, &selection).ok_or_else(|| {
        anyhow::anyhow!("unknown endpoint {selection:?}; run `pfb-submit endpoint list`")
    })?;

    info!(%url, "submitting pay-for-blob transaction");
    let tx = PfbTx { namespace_id, data };
    store.controller().submit(&tx, &url).await;

    let state = store.state();
    match state.view_status {
        ViewStatus::Success => {
            let rendered = state
                .result
                .map(|value| serde_json::to_string_pretty(&value))
                .transpose()?
                .unwrap_or_default();
            println!("{rendered}");
            Ok(())
        }
        ViewStatus::Error => anyhow::bail!("submission failed: {}", state.error_message),
        status => anyhow::bail!("submission ended in unexpected status {status:?}"),
    }
}

/// Resolve an endpoint selection against the public default and the stored
/// collection, matching on name or url.
fn resolve_endpoint(store: &PfbStore, selection: &str) -> Option<String> {
    if selection == PUBLIC_ENDPOINT_NAME || selection == PUBLIC_ENDPOINT_URL {
        return Some(PUBLIC_ENDPOINT_URL.to_string());
    }
    store
        .registry()
        .endpoints()
        .into_iter()
        .find(|e| e.name == selection || e.url == selection)
        .map(|e| e.url)
}

/// Run a registry operation.
fn cmd_endpoint(config: &Config, action: EndpointAction) -> anyhow::Result<()> {
    let store = PfbStore::from_config(config)?;

    match action {
        EndpointAction::Add { name, url } => {
            if name.is_empty() {
                anyhow::bail!("endpoint name must not be empty");
            }
            if url.is_empty() {
                anyhow::bail!("endpoint url must not be empty");
            }
            store.registry().add(Endpoint { name, url });
            println!("endpoint added");
        }
        EndpointAction::Remove { url } => {
            if url == PUBLIC_ENDPOINT_URL {
                anyhow::bail!("the public endpoint cannot be removed");
            }
            store.registry().remove(&url);
            println!("removed every endpoint with url {url}");
        }
        EndpointAction::List => {
            println!("{PUBLIC_ENDPOINT_NAME}\t{PUBLIC_ENDPOINT_URL}");
            for endpoint in store.registry().endpoints() {
                println!("{}\t{}", endpoint.name, endpoint.url);
            }
        }
    }

    Ok(())
}

/// Print the effective configuration.
fn cmd_check_config(config: &Config) -> anyhow::Result<()> {
    println!("Storage path: {}", config.storage_path.display());
    println!("Log level: {}", config.rust_log);
    println!("Public endpoint: {PUBLIC_ENDPOINT_URL}");
    Ok(())
}
