//! OGC map-server viewer CLI.
//!
//! Points at a WMS or WFS endpoint, lists the advertised layers, and
//! builds one overlay request per selected layer.

mod fetch;
mod output;
mod surface;

use anyhow::Result;
use clap::{Parser, Subcommand};
use map_session::{MapSession, OverlayId};
use ogc_common::{LayerDescriptor, OgcError, ServiceKind};
use ogc_protocol::query::validate_base_url;
use ogc_protocol::{parse_capabilities, QueryOptions, RequestSpec};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "viewer")]
#[command(about = "Browse and query layers on OGC WMS/WFS servers", long_about = None)]
struct Cli {
    /// Log level
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the layers a server advertises
    Layers {
        /// Server base URL
        #[arg(short, long, env = "OGC_SERVER_URL")]
        url: String,

        /// Service kind: wms or wfs
        #[arg(short, long, default_value = "wms")]
        service: String,

        /// Output format: table (default), json
        #[arg(short, long, default_value = "table")]
        output: String,
    },

    /// Build one overlay request per selected layer
    Query {
        /// Server base URL
        #[arg(short, long, env = "OGC_SERVER_URL")]
        url: String,

        /// Service kind: wms or wfs
        #[arg(short, long, default_value = "wms")]
        service: String,

        /// Layers to select (comma separated); defaults to the first
        /// advertised layer
        #[arg(short, long, value_delimiter = ',')]
        layers: Vec<String>,

        /// Overlay output format (default: image/png for WMS,
        /// application/json for WFS)
        #[arg(short, long)]
        format: Option<String>,

        /// Spatial reference system
        #[arg(long, default_value = "EPSG:4326")]
        srs: String,

        /// RNG seed for reproducible vector-layer colors
        #[arg(long)]
        seed: Option<u64>,

        /// Fetch WFS feature data after building requests
        #[arg(long)]
        fetch: bool,

        /// Output format: table (default), json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    match cli.command {
        Commands::Layers {
            url,
            service,
            output,
        } => run_layers(&url, &service, &output).await,
        Commands::Query {
            url,
            service,
            layers,
            format,
            srs,
            seed,
            fetch,
            output,
        } => run_query(&url, &service, &layers, format, srs, seed, fetch, &output).await,
    }
}

fn init_tracing(log_level: &str) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

async fn run_layers(url: &str, service: &str, output: &str) -> Result<()> {
    let client = reqwest::Client::new();
    let session = prepare_session(&client, url, service).await?;

    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(session.selection().descriptors())?
        ),
        _ => println!("{}", output::layer_table(session.selection())),
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
async fn run_query(
    url: &str,
    service: &str,
    layers: &[String],
    format: Option<String>,
    srs: String,
    seed: Option<u64>,
    fetch_features: bool,
    output: &str,
) -> Result<()> {
    let client = reqwest::Client::new();
    let mut session = prepare_session(&client, url, service).await?;

    apply_requested_layers(&mut session, layers);
    report_active_extent(&session);

    let options = QueryOptions {
        format: format.unwrap_or_else(|| default_format(session.service()).to_string()),
        srs,
    };
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // Stale overlays go away before any new request is issued, so old and
    // fresh results never coexist.
    let mut surface = surface::LogSurface;
    let removed = session.overlays_mut().clear_all(&mut surface);
    if removed > 0 {
        info!("Cleared {} stale overlay(s)", removed);
    }

    let specs = session.build_queries(&options, &mut rng)?;
    for spec in &specs {
        let title = session
            .selection()
            .descriptors()
            .iter()
            .find(|d| d.name == spec.layer)
            .map(|d| d.title.clone())
            .unwrap_or_else(|| spec.layer.clone());
        session.overlays_mut().register(title, OverlayId::new());
    }
    info!("Tracking {} overlay(s)", session.overlays().len());

    match output {
        "json" => println!("{}", serde_json::to_string_pretty(&specs)?),
        _ => println!("{}", output::spec_table(&specs)),
    }

    if fetch_features {
        if session.service() == ServiceKind::Wfs {
            load_features(&client, &specs).await;
        } else {
            warn!("--fetch only applies to WFS feature queries");
        }
    }

    Ok(())
}

/// Resolve the service kind, normalize the endpoint, and load the layer
/// list into a fresh session.
async fn prepare_session(
    client: &reqwest::Client,
    url: &str,
    service: &str,
) -> Result<MapSession> {
    let kind: ServiceKind = service.parse()?;

    let base_url = kind.rewrite_endpoint(url);
    if base_url != url {
        info!("Rewrote endpoint for {}: {}", kind, base_url);
    }
    validate_base_url(&base_url)?;

    let xml = fetch::fetch_capabilities(client, &base_url, kind).await?;
    let descriptors = parse_document(&xml, kind)?;

    let mut session = MapSession::new(kind, base_url);
    match session.apply_capabilities(descriptors) {
        Some(auto) => info!("Auto-selected layer '{}'", auto),
        None => warn!("Server advertised no layers"),
    }

    Ok(session)
}

fn parse_document(xml: &str, kind: ServiceKind) -> Result<Vec<LayerDescriptor>, OgcError> {
    let doc = roxmltree::Document::parse(xml).map_err(|e| {
        // Keep the raw response around for inspection.
        debug!("Unparsable capabilities response:\n{}", xml);
        OgcError::Parse(e.to_string())
    })?;
    Ok(parse_capabilities(&doc, kind))
}

/// Replace the default selection with the explicitly requested layers.
/// Unknown names warn and are skipped.
fn apply_requested_layers(session: &mut MapSession, requested: &[String]) {
    if requested.is_empty() {
        return;
    }

    let auto: Vec<String> = session.selection().checked_names().to_vec();
    for name in &auto {
        if !requested.contains(name) {
            session.selection_mut().deselect(name);
        }
    }

    let known: Vec<String> = session
        .selection()
        .descriptors()
        .iter()
        .map(|d| d.name.clone())
        .collect();
    for name in requested {
        if known.iter().any(|k| k == name) {
            session.selection_mut().select(name);
        } else {
            warn!("Unknown layer '{}' skipped", name);
        }
    }
}

fn report_active_extent(session: &MapSession) {
    if let Some(bbox) = session.selection().active_bounding_box() {
        // Advertised numbers are unvalidated until this point.
        if bbox.is_valid_geographic() {
            let (lon, lat) = bbox.center();
            info!("Active extent centered at lon {:.3}, lat {:.3}", lon, lat);
        } else {
            warn!("Advertised extent is out of range; ignoring it");
        }
    }
}

fn default_format(kind: ServiceKind) -> &'static str {
    match kind {
        ServiceKind::Wms => "image/png",
        ServiceKind::Wfs => "application/json",
    }
}

/// One failed layer never aborts its siblings.
async fn load_features(client: &reqwest::Client, specs: &[RequestSpec]) {
    for spec in specs {
        match fetch::fetch_features(client, spec).await {
            Ok(count) => info!("Layer '{}' loaded {} feature(s)", spec.layer, count),
            Err(err) => error!("{}", err),
        }
    }
}
