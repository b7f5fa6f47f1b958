//! Label Designer CLI
//!
//! Usage:
//!   label-designer [OPTIONS] [FILE]
//!
//! Reads a stored template record (JSON) and writes an SVG rendering to stdout.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use label_designer::{
    load, print, render_svg, save, ElementId, LabelError, RenderConfig, TemplateRecord, ViewState,
    Zoom,
};

#[derive(Parser)]
#[command(name = "label-designer")]
#[command(about = "Render and sanitize printable label templates")]
struct Cli {
    /// Template record file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Zoom percentage (25-200, snapped to steps of 25)
    #[arg(short, long, default_value_t = 100)]
    zoom: u16,

    /// Element id to draw with a selection outline
    #[arg(long)]
    select: Option<String>,

    /// Render configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON payload merged into {{field}} placeholders before rendering
    #[arg(long)]
    data: Option<PathBuf>,

    /// Print the sanitized record as JSON instead of rendering
    #[arg(long)]
    sanitize: bool,

    /// Hide the reference grid
    #[arg(long)]
    no_grid: bool,

    /// Log engine decisions to stderr
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    match run(&cli) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing(debug: bool) {
    let fallback = if debug { "label_designer=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(cli: &Cli) -> Result<String, LabelError> {
    let source = read_input(cli.input.as_deref())?;
    let mut template = load(TemplateRecord::from_json(&source)?);
    tracing::debug!(elements = template.len(), "template loaded");

    if let Some(path) = &cli.data {
        let data: serde_json::Value = serde_json::from_str(&fs::read_to_string(path)?)?;
        template = print(&template, data).resolved_template();
    }

    if cli.sanitize {
        return save(&template).to_json_pretty();
    }

    let mut config = match &cli.config {
        Some(path) => RenderConfig::from_file(path)?,
        None => RenderConfig::default(),
    };
    if cli.no_grid {
        config = config.with_grid_enabled(false);
    }

    let view = ViewState::new(Zoom::new(cli.zoom))
        .with_selected(cli.select.as_deref().map(ElementId::from));
    Ok(render_svg(&template, &view, &config))
}

fn read_input(path: Option<&Path>) -> Result<String, LabelError> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn print_intro() {
    println!(
        r#"Label Designer - render printable label templates

USAGE:
    label-designer [OPTIONS] [FILE]
    cat template.json | label-designer

OPTIONS:
    -z, --zoom <PERCENT>   Zoom 25-200 in steps of 25 (default 100)
    --select <ID>          Outline the element with this id
    -c, --config <FILE>    Render configuration (TOML)
    --data <FILE>          Merge a JSON payload into {{{{field}}}} placeholders
    --sanitize             Print the sanitized record instead of SVG
    --no-grid              Hide the reference grid
    -d, --debug            Log engine decisions to stderr
    -h, --help             Print help

QUICK START:
    label-designer demos/product_tag.json > tag.svg"#
    );
}
