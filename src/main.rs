use appcache_gen::{config, generate, output};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "appcache-gen")]
#[command(about = "Application cache manifest generator for built static sites")]
#[command(long_about = "\
Application cache manifest generator for built static sites

Points at a built site directory, hashes every file into one content-derived
stamp, writes <dir>/manifest.appcache from a template, and adds the
manifest attribute to the entry HTML's <html> tag. When any file changes,
the stamp changes, and browsers refetch the cache.

Configuration lives in appcache.toml (all optional):

  dir = \"www-built\"              # Built site directory
  html_path = \"index.html\"       # Entry HTML, relative to dir
  extras = [\"api/ping\"]          # Extra cache paths, appended in order
  exclude = [\".htaccess\"]        # File-name fragments to skip

  [[fallbacks]]                  # Rendered in the order written
  resource = \"/app\"
  fallback = \"/offline.html\"

Run 'appcache-gen gen-config' for a fully documented config file.")]
#[command(version = version_string())]
struct Cli {
    /// Config file (default: ./appcache.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Built site directory (overrides config)
    #[arg(long, global = true)]
    dir: Option<String>,

    /// Entry HTML path relative to the site directory (overrides config)
    #[arg(long, global = true)]
    html: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Patch the entry HTML and write the manifest
    Build {
        /// Emit the build report as JSON instead of the text summary
        #[arg(long)]
        json: bool,
    },
    /// Validate inputs and report what a build would consume, writing nothing
    Check,
    /// Compute and print the master digest, writing nothing
    Stamp,
    /// Print a stock appcache.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => config::load_config_file(path)?,
        None => config::load_config(Path::new("."))?,
    };
    config.apply_overrides(cli.dir, cli.html)?;

    match cli.command {
        Command::Build { json } => {
            let report = generate::generate(&config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                output::print_build_output(&report);
            }
        }
        Command::Check => {
            let report = generate::check(&config)?;
            output::print_check_output(&report);
            println!("==> Inputs are valid");
        }
        Command::Stamp => {
            println!("{}", generate::stamp(&config)?);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
