use clap::{Parser, Subcommand};
use std::path::PathBuf;
use workshop_showcase::workshop::SteamClient;
use workshop_showcase::{config, pipeline};

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
#[command(name = "workshop-showcase")]
#[command(about = "Render Steam Workshop mod cards into a README")]
#[command(long_about = "\
Render Steam Workshop mod cards into a README

For each item listed in showcase.toml, fetches usage statistics from the
Steam Web API, renders a thumbnail (PNG) and a stats panel (SVG), and
injects one linked card per item between the comment markers in the host
document:

  <!-- WORKSHOP-SHOWCASE:START -->
  <!-- WORKSHOP-SHOWCASE:END -->

Injection is idempotent: re-running with the same inputs leaves the
document byte-identical, so this is safe to run from CI on every push.

The Steam API key is read from the STEAM_API_KEY environment variable.

Run 'workshop-showcase gen-config' to generate a documented showcase.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Config file
    #[arg(long, default_value = "showcase.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch stats, render cards, and update the README
    Build,
    /// Validate the config and the README markers without fetching anything
    Check,
    /// Print a stock showcase.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let config = config::ShowcaseConfig::load(&cli.config)?;
            config.validate()?;

            let api_key = std::env::var("STEAM_API_KEY").map_err(|_| {
                config::ConfigError::Validation(
                    "STEAM_API_KEY environment variable is not set".into(),
                )
            })?;
            let client = SteamClient::new(api_key)?;

            let report = pipeline::run(&config, &client)?;
            println!(
                "==> Showcase complete: {} cards → {}",
                report.cards,
                report.document.display()
            );
        }
        Command::Check => {
            println!("==> Checking {}", cli.config.display());
            let config = config::ShowcaseConfig::load(&cli.config)?;
            config.validate()?;
            pipeline::check_document(&config)?;
            println!(
                "==> Config is valid, markers present in {}",
                config.readme_file
            );
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
