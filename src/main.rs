use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use ral_palette::{Converter, ReferenceTable};
use ralmatch::api;
use ralmatch::models::AppConfig;
use ralmatch::server;
use ralmatch::services::{load_table, source_for, TableStatus};

#[derive(Parser)]
#[command(name = "ralmatch")]
#[command(about = "RAL color lookup and nearest-match server")]
struct Cli {
    /// Reference table location (http(s) URL or CSV file path).
    /// Overrides RAL_SOURCE and the config file.
    #[arg(long, global = true)]
    source: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Print the hex value of a RAL code
    RalToHex {
        /// RAL code, e.g. "RAL 9010"
        code: String,
    },
    /// Print the English name of a RAL code
    RalToName {
        /// RAL code, e.g. "RAL 9010"
        code: String,
    },
    /// Print the RAL color closest to a hex color
    HexToRal {
        /// Hex color, e.g. "#F7F9EF" or "fff"
        hex: String,
    },
    /// Print the RGB channels of a hex color
    HexToRgb {
        /// Hex color, e.g. "#F7F9EF" or "fff"
        hex: String,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "ralmatch API",
        description = "RAL color lookup and nearest-match server",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_ral_to_hex,
        api::handle_ral_to_name,
        api::handle_hex_to_ral,
        api::handle_hex_to_rgb,
        api::handle_status,
    ),
    components(schemas(
        api::RalToHexResponse,
        api::RalToNameResponse,
        api::HexToRalResponse,
        api::HexToRgbResponse,
        TableStatus,
    )),
    tags(
        (name = "Conversion", description = "RAL and hex color conversions"),
        (name = "Status", description = "Reference table state")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    // Before the config load so its warnings are not lost
    init_tracing(cli.command.as_ref());
    let config = AppConfig::from_env().with_overrides(cli.source, None);

    match cli.command {
        Some(Commands::Serve) => run_server(config).await,
        Some(Commands::RalToHex { code }) => {
            let table = load_for_cli(&config).await?;
            let hex = Converter::new(&table).ral_to_hex(code.trim())?;
            println!("{hex}");
            Ok(())
        }
        Some(Commands::RalToName { code }) => {
            let table = load_for_cli(&config).await?;
            let name = Converter::new(&table).ral_to_name(code.trim())?;
            println!("{name}");
            Ok(())
        }
        Some(Commands::HexToRal { hex }) => {
            let table = load_for_cli(&config).await?;
            let found = Converter::new(&table).hex_to_ral(&hex)?;
            println!(
                "Closest RAL: {}, Name: {}, Similarity: {}%",
                found.code,
                found.name,
                found.similarity_label()
            );
            Ok(())
        }
        Some(Commands::HexToRgb { hex }) => {
            // No table needed
            let [r, g, b] = ral_palette::hex_to_rgb(&hex)?.to_bytes();
            println!("{r}, {g}, {b}");
            Ok(())
        }
        None => {
            run_status_command(&config);
            Ok(())
        }
    }
}

/// Install the global subscriber: verbose for the server, warnings only for
/// one-shot commands.
fn init_tracing(command: Option<&Commands>) {
    match command {
        Some(Commands::Serve) => {
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| "ralmatch=debug,tower_http=debug".into()),
                )
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
        _ => {
            // Minimal logging for CLI
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| "ralmatch=warn".into()),
                )
                .with(tracing_subscriber::fmt::layer().without_time())
                .init();
        }
    }
}

/// Load the reference table for a one-shot command
async fn load_for_cli(config: &AppConfig) -> anyhow::Result<ReferenceTable> {
    let source = source_for(&config.source);
    let (table, _stats) = load_table(source.as_ref())
        .await
        .with_context(|| format!("Failed to load {}", source.describe()))?;

    Ok(table)
}

/// Display status and configuration information
fn run_status_command(config: &AppConfig) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var("CONFIG_FILE").ok();
    let ral_source = std::env::var("RAL_SOURCE").ok();
    let bind_addr = std::env::var("BIND_ADDR").ok();

    // Header
    println!("ralmatch v{VERSION}");
    println!("RAL color lookup and nearest-match server\n");

    // Environment variables section
    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  RAL_SOURCE  = {}",
        ral_source.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("(not set)")
    );

    // Effective configuration
    println!("\nConfiguration:");
    println!("  Source:  {}", config.source);
    println!("  Listen:  {}", config.bind_addr);

    // Commands section
    println!("\nCommands:");
    println!("  ralmatch serve              Start the HTTP server");
    println!("  ralmatch ral-to-hex <code>  Print the hex value of a RAL code");
    println!("  ralmatch ral-to-name <code> Print the name of a RAL code");
    println!("  ralmatch hex-to-ral <hex>   Find the closest RAL color");
    println!("  ralmatch hex-to-rgb <hex>   Print the RGB channels of a hex color");
    println!("\nRun 'ralmatch --help' for more details.");
}

/// Run the HTTP server
async fn run_server(config: AppConfig) -> anyhow::Result<()> {
    tracing::info!(
        source = %config.source,
        bind_addr = %config.bind_addr,
        "Configuration loaded"
    );

    // Starts the background table load
    let state = server::create_app_state(&config)?;

    // OpenAPI documentation (production only)
    let docs = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi());
    let app = server::build_router(state).merge(docs);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "ralmatch server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
