//! Blockyard CLI - Create, inspect, edit and simulate sandbox worlds

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{config, edit, new, show, simulate};

#[derive(Parser)]
#[command(name = "blockyard")]
#[command(about = "Tile sandbox worlds from the command line", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate fresh terrain and save it
    New {
        /// Grid width in cells
        #[arg(long, default_value = "30")]
        width: usize,

        /// Grid height in cells
        #[arg(long, default_value = "20")]
        height: usize,

        /// Save file to write
        #[arg(short, long, default_value = "world_save.json")]
        output: String,

        /// Overwrite an existing save
        #[arg(long)]
        force: bool,
    },

    /// Print a saved world as text
    Show {
        /// Save file to read
        #[arg(long, default_value = "world_save.json")]
        save: String,
    },

    /// Place or remove a block in a saved world
    #[command(subcommand)]
    Edit(edit::EditCommands),

    /// Run the sandbox headless with scripted input
    Simulate {
        /// Path to a TOML config file
        #[arg(long)]
        config: Option<String>,

        /// Number of fixed ticks to run
        #[arg(long, default_value = "120")]
        ticks: u32,

        /// Hold a direction the whole time (left or right)
        #[arg(long, value_parser = simulate::parse_direction)]
        walk: Option<simulate::Direction>,

        /// Press jump every N ticks
        #[arg(long)]
        jump_every: Option<u32>,
    },

    /// Print the effective configuration as TOML
    Config {
        /// Path to a TOML config file (defaults are printed without one)
        #[arg(long)]
        config: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::New {
            width,
            height,
            output,
            force,
        } => new::run(new::NewArgs {
            width,
            height,
            output,
            force,
        }),
        Commands::Show { save } => show::run(&save),
        Commands::Edit(cmd) => edit::run(cmd),
        Commands::Simulate {
            config,
            ticks,
            walk,
            jump_every,
        } => simulate::run(simulate::SimulateArgs {
            config,
            ticks,
            walk,
            jump_every,
        }),
        Commands::Config { config } => config::run(config.as_deref()),
    }
}
