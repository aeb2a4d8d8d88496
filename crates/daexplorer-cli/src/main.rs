//! daexplorer - resolve and persist the explorer's network endpoints.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use daexplorer_core::{EndpointCatalog, FileStore, KeyValueStore, Settings, SETTINGS_KEY};
use daexplorer_endpoints::{init_settings, ApiUrlComparison, InitOptions, LC_URL_KEY};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use url::Url;

/// Resolve the node RPC and light-client endpoints the explorer connects to.
#[derive(Parser, Debug)]
#[command(name = "daexplorer")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path of the key-value store (defaults to the platform data directory)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// JSON file replacing the built-in endpoint catalog
    #[arg(long, global = true)]
    endpoints: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve endpoints for a location, store them and print them as JSON.
    Resolve {
        /// Location href carrying optional `rpc` and `light` overrides
        #[arg(long, default_value = "http://localhost:3000/#/explorer")]
        href: Url,

        /// Value deciding whether the stored API URL is kept
        #[arg(long, default_value = "live")]
        compare: ApiUrlComparison,

        /// Resolve against a copy of the store without writing it
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the endpoint catalog.
    Endpoints,
    /// Forget the stored API URL and light-client URL.
    Reset,
}

fn load_catalog(path: Option<&Path>) -> Result<EndpointCatalog> {
    match path {
        Some(path) => EndpointCatalog::from_json_file(path)
            .wrap_err_with(|| format!("Failed to load endpoints from {}", path.display())),
        None => Ok(EndpointCatalog::builtin()),
    }
}

fn open_store(path: Option<&Path>) -> Result<FileStore> {
    let store = match path {
        Some(path) => FileStore::open(path),
        None => FileStore::open_default(),
    };
    store.wrap_err("Failed to open store")
}

fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install()?;

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("daexplorer=info".parse()?)
        .add_directive("daexplorer_endpoints=info".parse()?)
        .add_directive("daexplorer_core=info".parse()?);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match args.command {
        Command::Resolve {
            href,
            compare,
            dry_run,
        } => {
            let catalog = load_catalog(args.endpoints.as_deref())?;
            let options = InitOptions {
                comparison: compare,
                ..InitOptions::default()
            };

            let file_store = open_store(args.store.as_deref())?;
            tracing::debug!(
                "Resolving with store {} ({} comparison)",
                file_store.path().display(),
                compare.label()
            );

            let resolved = if dry_run {
                let mut storage = file_store.snapshot();
                let mut settings = Settings::load(&storage, options.env_default.as_deref())?;
                init_settings(&href, &catalog, &mut settings, &mut storage, &options)?
            } else {
                let mut storage = file_store;
                let mut settings = Settings::load(&storage, options.env_default.as_deref())?;
                init_settings(&href, &catalog, &mut settings, &mut storage, &options)?
            };

            println!("{}", serde_json::to_string_pretty(&resolved)?);
        }
        Command::Endpoints => {
            let catalog = load_catalog(args.endpoints.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&catalog)?);
        }
        Command::Reset => {
            let mut storage = open_store(args.store.as_deref())?;
            let removed_settings = storage.remove(SETTINGS_KEY)?;
            let removed_lc = storage.remove(LC_URL_KEY)?;
            tracing::info!(
                "Reset {} (settings: {}, lcUrl: {})",
                storage.path().display(),
                removed_settings,
                removed_lc
            );
        }
    }

    Ok(())
}
