mod export;
mod replay;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use canvas::color::ColorParseError;
use canvas::{ElementRect, SurfaceError};
use clap::{Parser, Subcommand};
use client::{ApiError, ClientConfig, ClientError, HttpApi, RsvpApi, RsvpPage, SubmissionClient};
use time::format_description::well_known::Rfc3339;
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("cannot read {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },
    #[error("cannot write {path}: {source}")]
    Write { path: PathBuf, source: std::io::Error },
    #[error("invalid pointer script: {0}")]
    Script(#[from] serde_json::Error),
    #[error("cannot create drawing surface: {0}")]
    Surface(#[from] SurfaceError),
    #[error("invalid color in script: {0}")]
    Color(#[from] ColorParseError),
    #[error("timestamp format failed: {0}")]
    Format(#[from] time::error::Format),
}

#[derive(Parser, Debug)]
#[command(name = "rsvp", about = "Submit and browse drawn RSVPs")]
struct Cli {
    #[arg(long, env = "RSVP_BASE_URL", default_value = client::config::DEFAULT_BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check the server's health endpoint.
    Ping,
    /// Print the gallery, newest first.
    List,
    /// Replay a pointer script onto a fresh canvas and submit it.
    Submit {
        #[arg(long)]
        name: String,
        /// JSON pointer script, or - for stdin.
        #[arg(long)]
        script: String,
        #[arg(long, default_value_t = 300)]
        width: u32,
        #[arg(long, default_value_t = 150)]
        height: u32,
    },
    /// Write every gallery drawing to a PNG file.
    Export {
        #[arg(long)]
        dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = ClientConfig::with_base_url(&cli.base_url);
    let api = HttpApi::new(&config)?;

    match cli.command {
        Command::Ping => {
            api.ping().await?;
            println!("ok");
            Ok(())
        }
        Command::List => run_list(&api).await,
        Command::Submit { name, script, width, height } => {
            run_submit(SubmissionClient::new(api, &config), name, &script, width, height).await
        }
        Command::Export { dir } => run_export(&api, &dir).await,
    }
}

async fn run_list(api: &HttpApi) -> Result<(), CliError> {
    let items = api.list().await?;
    if items.is_empty() {
        eprintln!("no rsvps yet");
    }
    for item in &items {
        println!("{}  {}  ({} bytes)", item.created_at.format(&Rfc3339)?, item.name, item.drawing.len());
    }
    Ok(())
}

async fn run_submit(
    client: SubmissionClient<HttpApi>,
    name: String,
    script: &str,
    width: u32,
    height: u32,
) -> Result<(), CliError> {
    let text = read_script(script)?;
    let steps = replay::parse_script(&text)?;

    let mut page = RsvpPage::new(client);
    page.mount_canvas(ElementRect::new(0.0, 0.0, f64::from(width), f64::from(height)))?;
    let summary = replay::replay(page.surface_mut(), &steps)?;
    info!(strokes = summary.strokes, segments = summary.segments, "script replayed");

    page.set_name(name);
    let created = page.submit().await?;
    println!("{}", created.id);
    Ok(())
}

fn read_script(script: &str) -> Result<String, CliError> {
    if script == "-" {
        return std::io::read_to_string(std::io::stdin())
            .map_err(|source| CliError::Read { path: PathBuf::from("<stdin>"), source });
    }
    std::fs::read_to_string(script).map_err(|source| CliError::Read { path: PathBuf::from(script), source })
}

async fn run_export(api: &HttpApi, dir: &Path) -> Result<(), CliError> {
    std::fs::create_dir_all(dir).map_err(|source| CliError::Write { path: dir.to_path_buf(), source })?;

    let items = api.list().await?;
    let mut written = 0_usize;
    for (position, item) in items.iter().enumerate() {
        let bytes = match export::decode_drawing(item) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(id = %item.id, error = %e, "skipping drawing");
                continue;
            }
        };
        let path = dir.join(export::file_name(position, item));
        std::fs::write(&path, bytes).map_err(|source| CliError::Write { path: path.clone(), source })?;
        written += 1;
    }

    info!(written, total = items.len(), dir = %dir.display(), "export finished");
    println!("{written}");
    Ok(())
}
