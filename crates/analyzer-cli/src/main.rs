use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use analyzer_core::{Config, HttpExtractor, Session, UploadSurface, display_name, surface, upload_path};

mod output;

use output::{ColorMode, Sink};

/// content-analyzer: extract the text from a PDF or image via the analysis service
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Upload a PDF or image and print the extracted text
    Extract {
        /// Path to the PDF or image file
        file: PathBuf,

        /// Extraction endpoint, e.g. http://localhost:5000/api/analyze
        #[arg(long)]
        backend_url: Option<String>,

        /// Request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Write the extracted text to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,

        /// Log request details to stderr
        #[arg(short, long)]
        verbose: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Command::Extract {
            file,
            backend_url,
            timeout,
            output,
            no_color,
            verbose,
        } => {
            init_tracing(verbose);
            extract(file, backend_url, timeout, output, no_color).await
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "analyzer_core=info,analyzer_cli=info"
    } else {
        "analyzer_core=warn,analyzer_cli=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn extract(
    file: PathBuf,
    backend_url: Option<String>,
    timeout: Option<u64>,
    output: Option<PathBuf>,
    no_color: bool,
) -> anyhow::Result<ExitCode> {
    if !file.exists() {
        anyhow::bail!("File not found: {}", file.display());
    }
    if !surface::accepts(&file) {
        tracing::warn!(path = %file.display(), "not a PDF or image; the service may reject it");
    }

    // Resolve configuration: CLI flags > env vars > config file > defaults
    let config = Config::resolve(backend_url, timeout);
    let extractor = HttpExtractor::from_config(&config)?;

    let use_color = !no_color && output.is_none();
    let color = ColorMode(use_color);
    let mut status = std::io::stderr();

    let mut surface = UploadSurface::new();
    let mut session = Session::new();

    let Some(path) = surface.take_first(Some(file)) else {
        return Ok(ExitCode::SUCCESS);
    };
    let filename = display_name(&path);

    output::print_uploading(
        &mut status,
        &filename,
        extractor.endpoint().unwrap_or("<unset>"),
        color,
    )?;

    let request = session.begin_upload(&filename);
    let outcome = upload_path(&extractor, &path).await;
    session.complete(request, outcome);

    let content = session.display();
    let sink = if output.is_some() { Sink::File } else { Sink::Stdout };
    let ok = output::finish(&mut status, &content, session.stats(), color, sink, || {
        Ok(match &output {
            Some(output_path) => Box::new(std::fs::File::create(output_path)?) as Box<dyn Write>,
            None => Box::new(std::io::stdout()),
        })
    })?;

    if !ok {
        return Ok(ExitCode::FAILURE);
    }
    if let Some(output_path) = output {
        tracing::info!(path = %output_path.display(), "extracted text written");
    }
    Ok(ExitCode::SUCCESS)
}
