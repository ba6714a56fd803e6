//! CLI entry point for the `netwalk` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use netwalk::cli::{commands, init_logging, OutputFormat};
use netwalk::WalkError;

#[derive(Parser)]
#[command(
    name = "netwalk",
    about = "netwalk CLI: breadth-first walks over network topology files"
)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display information about a topology file
    Info {
        /// Path to the JSON topology file
        file: PathBuf,
    },
    /// Print layers in breadth-first order from the first input
    Walk {
        /// Path to the JSON topology file
        file: PathBuf,
        /// Maximum layers to print
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show a layer's producers and consumers
    Layer {
        /// Path to the JSON topology file
        file: PathBuf,
        /// Layer name
        name: String,
    },
    /// Re-serialize a topology file
    Export {
        /// Path to the JSON topology file
        file: PathBuf,
        /// Output path (stdout if omitted)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format.is_json();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Walk { file, limit } => commands::cmd_walk(&file, limit, json),
        Commands::Layer { file, name } => commands::cmd_layer(&file, &name, json),
        Commands::Export {
            file,
            output,
            pretty,
        } => commands::cmd_export(&file, output.as_deref(), pretty),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            WalkError::Io(_) => 1,
            WalkError::Json(_)
            | WalkError::DuplicateLayer(_)
            | WalkError::DuplicateData(_)
            | WalkError::DataNotFound(_) => 2,
            WalkError::LayerNotFound(_) => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
