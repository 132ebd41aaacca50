use std::io::Read;
use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;
use tagkit_codegen::{generate, scrape, GenConfig};
use tagkit_naming::{derive_name, function_name, is_self_closing, Namespace};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "TAGKIT_LOG";

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .without_time()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match Commands::parse() {
        Commands::Scrape(args) => scrape_page(args),
        Commands::Generate(args) => generate_catalog(args),
        Commands::Derive(args) => derive(args),
    }
}

/// Build the tagkit element catalog
#[derive(Parser)]
#[command(name = "tagkit-gen", version)]
enum Commands {
    /// Scrape a saved element reference page into a manifest
    #[clap(name = "scrape")]
    Scrape(ScrapeArgs),

    /// Derive names for every manifest and write the catalog source
    #[clap(name = "generate")]
    Generate(GenerateArgs),

    /// Print the derived names for one tag
    #[clap(name = "derive")]
    Derive(DeriveArgs),
}

#[derive(Parser)]
struct ScrapeArgs {
    /// Which element collection the page documents
    #[clap(short, long, default_value = "html")]
    namespace: Namespace,

    /// Input file, stdin if neither this nor --raw is present
    #[clap(short, long)]
    input: Option<PathBuf>,

    /// Page contents passed inline
    #[clap(short, long)]
    raw: Option<String>,

    /// The URL the page was saved from, recorded in the manifest
    #[clap(short, long)]
    source: Option<String>,

    /// Output file, stdout if not present
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Parser)]
struct GenerateArgs {
    /// Generator config
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Write the catalog here instead of the configured path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Fail if the catalog is out of date instead of writing it
    #[clap(long)]
    check: bool,
}

#[derive(Parser)]
struct DeriveArgs {
    /// The raw tag name
    tag: String,

    #[clap(short, long, default_value = "html")]
    namespace: Namespace,
}

fn scrape_page(args: ScrapeArgs) -> anyhow::Result<()> {
    let page = determine_input(args.input, args.raw)?;

    let mut manifest = scrape(&page, args.namespace)?;
    if let Some(source) = args.source {
        manifest.source = source;
    }

    let toml = manifest.to_toml()?;
    match args.output {
        Some(output) => {
            std::fs::write(&output, &toml)?;
            tracing::info!("Wrote manifest to {}", output.display());
        }
        None => print!("{toml}"),
    }

    Ok(())
}

fn generate_catalog(args: GenerateArgs) -> anyhow::Result<()> {
    let path = args
        .config
        .unwrap_or_else(|| PathBuf::from(GenConfig::DEFAULT_PATH));
    let mut config = GenConfig::load(&path)?;
    if let Some(output) = args.output {
        config.output = output;
    }

    let generated = generate(&config, args.check)?;
    tracing::info!(
        "{} entries in {}{}",
        generated.entries,
        generated.output.display(),
        if generated.changed { "" } else { " (unchanged)" }
    );

    Ok(())
}

fn derive(args: DeriveArgs) -> anyhow::Result<()> {
    let name = derive_name(&args.tag, args.namespace)?;
    println!("canonical:    {name}");
    println!("alias:        {}", function_name(&name));
    println!("self-closing: {}", is_self_closing(&args.tag));
    Ok(())
}

fn determine_input(file: Option<PathBuf>, raw: Option<String>) -> anyhow::Result<String> {
    use std::io::IsTerminal as _;

    // Make sure not both are specified
    if file.is_some() && raw.is_some() {
        bail!("Only one of --input or --raw should be specified.");
    }

    if let Some(raw) = raw {
        return Ok(raw);
    }

    if let Some(file) = file {
        return Ok(std::fs::read_to_string(file)?);
    }

    // If neither exist, we try to read from stdin
    if std::io::stdin().is_terminal() {
        bail!("No input file, page, or stdin to scrape from.");
    }

    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;

    Ok(buffer)
}
