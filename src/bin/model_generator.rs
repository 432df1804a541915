//! Model Generator CLI
//!
//! Generates class models from exported content type schemas.

use anyhow::Context;
use clap::Parser;
use content_model_generator::{GeneratorConfig, ModelGenerator};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "model-generator")]
#[command(about = "Generate strongly typed models from content type schemas")]
struct Cli {
    /// Config file (defaults to model-generator.toml lookup)
    #[arg(short, long)]
    config: Option<String>,

    /// Directory with types/ and snippets/ schema documents
    #[arg(short, long)]
    schema_dir: Option<PathBuf>,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Namespace of generated classes
    #[arg(short, long)]
    namespace: Option<String>,

    /// Project id, used in diagnostics
    #[arg(short, long)]
    project_id: Option<String>,

    /// Suffix of generated file names
    #[arg(long)]
    file_name_suffix: Option<String>,

    /// Generate management models
    #[arg(long)]
    management: bool,

    /// Generate typed linked item variants
    #[arg(long)]
    extended: bool,

    /// Structured model flags, comma separated (RichText,DateTime,ModularContent,All)
    #[arg(long, value_delimiter = ',')]
    structured: Vec<String>,

    /// Also generate a type provider
    #[arg(long)]
    with_type_provider: bool,

    /// Render without writing files
    #[arg(long)]
    dry_run: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = GeneratorConfig::load_from(cli.config.as_deref())
        .context("failed to load configuration")?;
    apply_overrides(&mut config, &cli);

    let generator = ModelGenerator::from_config(config).with_dry_run(cli.dry_run);
    let report = generator.run().context("generation failed")?;

    for item in report.diagnostics.items() {
        eprintln!("warning[{}]: {}", item.code, item.message);
    }
    for path in &report.files {
        println!("{}", path.display());
    }
    println!(
        "Generated {} content type(s) into {} file(s){}",
        report.content_types,
        report.files.len(),
        if cli.dry_run { " (dry run)" } else { "" }
    );
    Ok(())
}

fn apply_overrides(config: &mut GeneratorConfig, cli: &Cli) {
    if let Some(ref dir) = cli.schema_dir {
        config.schema_dir = dir.clone();
    }
    if let Some(ref dir) = cli.output_dir {
        config.output_dir = dir.clone();
    }
    if let Some(ref namespace) = cli.namespace {
        config.namespace = namespace.clone();
    }
    if let Some(ref project_id) = cli.project_id {
        config.project_id = project_id.clone();
    }
    if let Some(ref suffix) = cli.file_name_suffix {
        config.file_name_suffix = suffix.clone();
    }
    if cli.management {
        config.management_api = true;
    }
    if cli.extended {
        config.extended_models = true;
    }
    if !cli.structured.is_empty() {
        config.structured_model = cli.structured.clone();
    }
    if cli.with_type_provider {
        config.with_type_provider = true;
    }
}
