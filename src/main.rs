/// Version injected at compile time via LAYER_NOTES_VERSION env var (set by CI/CD),
/// or "dev" for local builds.
pub const VERSION: &str = match option_env!("LAYER_NOTES_VERSION") {
    Some(v) => v,
    None => "dev",
};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use layer_notes::aws::client::AwsClient;
use layer_notes::aws::identity::StsIdentity;
use layer_notes::aws::layers::LambdaLayerInventory;
use layer_notes::config::{parse_regions, Language, ReleaseConfig};
use layer_notes::{notes, resolver};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Generate GitHub Release notes for OTLP stdout Lambda layers
#[derive(Parser, Debug)]
#[command(name = "layer-notes", version = VERSION, about, long_about = None)]
struct Args {
    /// Programming language for the layer
    #[arg(long, value_enum)]
    language: Language,

    /// Upstream OpenTelemetry Lambda version
    #[arg(long)]
    upstream_version: String,

    /// OTLP stdout exporter version
    #[arg(long)]
    exporter_version: String,

    /// Release group (e.g., beta, prod, dev)
    #[arg(long)]
    release_group: String,

    /// Comma-separated list of AWS regions
    #[arg(long)]
    regions: String,

    /// AWS account ID (will be detected if not provided)
    #[arg(long)]
    account_id: Option<String>,

    /// Full layer name as published to AWS
    #[arg(long)]
    layer_name: String,

    /// AWS profile to use
    #[arg(long)]
    profile: Option<String>,

    /// Log level for diagnostics written to stderr
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,
}

impl Args {
    fn into_config(self) -> ReleaseConfig {
        ReleaseConfig {
            language: self.language,
            upstream_version: self.upstream_version,
            exporter_version: self.exporter_version,
            release_group: self.release_group,
            regions: parse_regions(&self.regions),
            account_id: self.account_id,
            layer_name: self.layer_name,
            profile: self.profile,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

/// Send diagnostics to stderr so stdout only carries the release notes.
/// `RUST_LOG` takes precedence over `--log-level`.
fn setup_logging(level: LogLevel) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let Some(tracing_level) = level.to_tracing_level() else {
        return None;
    };

    // SDK internals stay at warn unless RUST_LOG asks for more
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{},aws_config=warn,aws_smithy_runtime=warn",
            tracing_level.as_str().to_lowercase()
        ))
    });

    let (non_blocking, guard) = tracing_appender::non_blocking(std::io::stderr());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .init();

    tracing::debug!("layer-notes {} started with log level: {:?}", VERSION, level);

    Some(guard)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    let _log_guard = setup_logging(args.log_level);

    let config = args.into_config();
    let client = AwsClient::new(config.profile.as_deref()).await;

    let account_id = match config
        .effective_account_id(&StsIdentity::new(client.clone()))
        .await
    {
        Ok(account_id) => account_id,
        Err(e) => {
            tracing::error!("{:#}", e);
            return Err(e);
        }
    };
    tracing::info!("Using account: {}", account_id);

    let inventory = LambdaLayerInventory::new(client);
    let groups = resolver::collect_layer_data(&inventory, &config.layer_name, &config.regions).await;

    println!("{}", notes::render(&config, &groups));

    Ok(())
}
