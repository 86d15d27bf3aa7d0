use anyhow::Context;
use clap::Parser;
use hp_web::{AppState, ErrorMode};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldOrderArg {
    Submission,
    Named,
}

impl FromStr for FieldOrderArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "submission" => Ok(FieldOrderArg::Submission),
            "named" => Ok(FieldOrderArg::Named),
            other => Err(format!("Unknown field order: {}", other)),
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Serve house price predictions from a trained model", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Path to the trained model artifact
    #[arg(long, env = "MODEL_PATH", default_value = hp_inference::DEFAULT_MODEL_PATH, global = true)]
    model_path: PathBuf,
    #[command(flatten)]
    serve: ServeArgs,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Args, Debug, Clone)]
struct ServeArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,
    #[arg(long, env = "PORT", default_value_t = 5000)]
    port: u16,
    /// How failed predictions are shown: generic (bare 500) or page (form with the cause)
    #[arg(long, default_value = "generic")]
    error_mode: ErrorMode,
    /// How form fields map to model inputs: submission (order only) or named (by feature name)
    #[arg(long, default_value = "submission")]
    field_order: FieldOrderArg,
}

impl Default for ServeArgs {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            error_mode: ErrorMode::Generic,
            field_order: FieldOrderArg::Submission,
        }
    }
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the web server (default)
    Serve(ServeArgs),
    /// Load the model and print what it expects
    Inspect,
}

fn build_state(model_path: &Path, args: &ServeArgs) -> anyhow::Result<AppState> {
    let model = hp_inference::load(model_path)
        .with_context(|| format!("Failed to load model from {}", model_path.display()))?;

    let state = AppState::new(model).with_error_mode(args.error_mode);
    let state = match args.field_order {
        FieldOrderArg::Submission => state,
        FieldOrderArg::Named => state.with_named_fields()?,
    };
    Ok(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("👋 Shutting down");
}

async fn serve(model_path: &Path, args: ServeArgs) -> anyhow::Result<()> {
    let state = build_state(model_path, &args)?;
    let app = hp_web::create_app(state);

    let listener = tokio::net::TcpListener::bind((args.host.as_str(), args.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", args.host, args.port))?;

    info!("🏠 Listening on http://{}", listener.local_addr()?);
    hp_web::serve(listener, app, shutdown_signal()).await?;
    Ok(())
}

fn inspect(model_path: &Path) -> anyhow::Result<()> {
    let model = hp_inference::load(model_path)
        .with_context(|| format!("Failed to load model from {}", model_path.display()))?;

    println!("Model: {}", model.name());
    match model.input_arity() {
        Some(n) => println!("Features: {}", n),
        None => println!("Features: any"),
    }
    if let Some(names) = model.feature_names() {
        println!("Feature names: {}", names.join(", "));
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::Serve(cli.serve)) {
        Commands::Serve(args) => serve(&cli.model_path, args).await,
        Commands::Inspect => inspect(&cli.model_path),
    };

    if let Err(e) = &result {
        error!("❌ {:#}", e);
    }
    result
}
