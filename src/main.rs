use clap::{Parser, Subcommand};
use pwa_assets::config::{self, AssetConfig};
use pwa_assets::generate::{self, Procedure};
use pwa_assets::imaging::RustBackend;
use pwa_assets::output;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pwa-assets")]
#[command(about = "Generate favicons, PWA icons and screenshots from one logo")]
#[command(long_about = "\
Generate favicons, PWA icons and screenshots from one logo

Every asset is derived from the same source image and written as lossy WebP
(quality 90) under the public directory:

  public/
  ├── assets/favicons/
  │   └── favicon-16x16.webp ...         # favicons
  └── images/
      ├── icons/
      │   ├── icon-72x72.webp ...        # icons
      │   ├── badge-72x72.webp           # icons
      │   ├── apple-launch-750x1334.webp # icons
      │   └── maskable-icon-192x192.webp # pwa
      └── screenshots/
          ├── home-screen.webp           # icons
          └── wide-dashboard.webp        # pwa

Failed assets are reported and skipped; the run always completes.

Run 'pwa-assets gen-config' to print a documented assets.toml.")]
#[command(version)]
struct Cli {
    /// Source logo (overrides `source` in the config file)
    #[arg(long, global = true)]
    source: Option<PathBuf>,

    /// Public web root (overrides `public_dir` in the config file)
    #[arg(long, global = true)]
    public: Option<PathBuf>,

    /// Config file; stock defaults are used when it does not exist
    #[arg(long, default_value = config::CONFIG_FILE_NAME, global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate browser favicons
    Favicons,
    /// Generate app icons, special icons and placeholder screenshots
    Icons,
    /// Generate maskable icons and the wide dashboard screenshot
    Pwa,
    /// Run favicons, icons and pwa in sequence
    All,
    /// List every asset that would be generated, without writing anything
    Plan,
    /// Print a stock assets.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let procedures: &[Procedure] = match cli.command {
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
            return Ok(());
        }
        Command::Favicons => &[Procedure::Favicons],
        Command::Icons => &[Procedure::Icons],
        Command::Pwa => &[Procedure::Pwa],
        Command::All | Command::Plan => &Procedure::ALL,
    };

    let config = resolve_config(&cli)?;

    if matches!(cli.command, Command::Plan) {
        for &procedure in procedures {
            output::print_plan(procedure, &generate::plan(procedure, &config));
        }
        return Ok(());
    }

    let backend = RustBackend::new();
    let outcome = generate::run_each(
        &backend,
        procedures,
        &config,
        output::print_record,
        output::print_outcome,
    );
    if outcome.is_err() {
        // Already reported per procedure
        std::process::exit(1);
    }

    Ok(())
}

/// Load the config file and apply command-line overrides.
fn resolve_config(cli: &Cli) -> Result<AssetConfig, config::ConfigError> {
    let mut config = config::load_config(&cli.config)?;
    if let Some(source) = &cli.source {
        config.source = source.to_string_lossy().to_string();
    }
    if let Some(public) = &cli.public {
        config.public_dir = public.to_string_lossy().to_string();
    }
    Ok(config)
}
