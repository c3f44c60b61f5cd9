use clap::{Parser, Subcommand};
use docsmith::{config, generate, markup, output, scan};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docsmith")]
#[command(about = "Convert markdown documentation into static HTML pages")]
#[command(long_about = "\
Convert markdown documentation into static HTML pages

Every .md file directly inside the source directory becomes one page in the
output directory. Pages share a navbar with four slots (Proposal, Vision,
Architecture, Docs); the slot matching the page filename is highlighted.

Source structure:

  docs/
  ├── config.toml            # Site config (optional)
  ├── index.md               # → index.html (no \"Back to Index\" link)
  ├── project_proposal.md    # → project_proposal.html (Proposal active)
  ├── Vision.md              # → vision.html (Vision active)
  └── architecture.md        # → architecture.html (Architecture active)

Output filenames are lowercased; titles come from the filename with
underscores as spaces (project_proposal.md → \"Project Proposal\").

Run 'docsmith gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Source directory containing the markdown documents
    #[arg(long, default_value = "docs", global = true)]
    source: PathBuf,

    /// Output directory for the generated pages
    #[arg(long, default_value = "website/docs", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the full pipeline: scan → generate
    Build,
    /// Validate the source directory without writing anything
    Check,
    /// List the documents that would be converted
    Scan {
        /// Print the manifest as JSON instead of the inventory
        #[arg(long)]
        json: bool,
    },
    /// Print the HTML fragment for a single markdown file
    Render {
        /// Markdown file to convert
        file: PathBuf,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            println!("==> Stage 1: Scanning {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            output::print_scan_output(&manifest, &cli.source);

            println!("==> Stage 2: Generating HTML → {}", cli.output.display());
            init_thread_pool(&manifest.config.processing);
            let report = generate::generate(&manifest, &cli.source, &cli.output)?;
            output::print_generate_output(&report);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            output::print_scan_output(&manifest, &cli.source);
            println!("==> Source is valid");
        }
        Command::Scan { json } => {
            let manifest = scan::scan(&cli.source)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&manifest)?);
            } else {
                output::print_scan_output(&manifest, &cli.source);
            }
        }
        Command::Render { file } => {
            let markdown = std::fs::read_to_string(&file)?;
            println!("{}", markup::to_html(&markup::normalize_newlines(&markdown)));
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Initialize the rayon thread pool based on processing config.
///
/// Capped at the number of available CPU cores (user can constrain down, not up).
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    log::debug!("converting with {threads} threads");
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
