use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use spotlight_tour::config::{paths::SpotlightPaths, settings::Settings};
use spotlight_tour::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "spotlight",
    version,
    about = "Guided product-tour overlays for terminal applications",
    long_about = "spotlight-tour steps a user through the regions of a \
                  terminal UI, showing a positioned callout and a highlight \
                  ring around each target. The bundled demo runs a tour over \
                  a mock dashboard; supply your own deck file to change the \
                  steps."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the demo tour
    #[command(alias = "demo")]
    Tour {
        /// Path to a JSON or YAML step deck
        #[arg(short, long)]
        deck: Option<PathBuf>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SpotlightPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Tour { deck }) => {
            run_tui(&settings, deck)?;
        }
        Some(Commands::Config) => {
            println!("spotlight-tour Configuration");
            println!("============================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Decks directory:  {}", paths.decks_dir().display());
            println!();
            println!("Settings:");
            println!("  Tick rate (ms):        {}", settings.tick_rate_ms);
            println!("  Scroll cells per tick: {}", settings.scroll_cells_per_tick);
            println!("  Mouse capture:         {}", settings.mouse_capture);
        }
        None => {
            println!("spotlight-tour - guided tours for terminal applications");
            println!();
            println!("Run 'spotlight --help' for usage information.");
            println!("Run 'spotlight tour' to start the demo tour.");
        }
    }

    Ok(())
}
