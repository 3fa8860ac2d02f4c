//! Report Rotation CLI
//!
//! Usage:
//!   report-rotation [OPTIONS] angle <SPEC> [--format <FORMAT>] [--workbook <FILE>]
//!   report-rotation [OPTIONS] boxes <FILE> [--id <ID>]
//!
//! Options:
//!   -v, --verbose  Log format remapping and parent fallbacks (RUST_LOG overrides)
//!   -h, --help     Print help

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use env_logger::Env;

use report_rotation::report::{box_report, rotation_report};
use report_rotation::{BoxTree, SheetFormat, Workbook, WorkbookHandle};

#[derive(Parser)]
#[command(name = "report-rotation")]
#[command(about = "Normalize cell rotations and measure content boxes for spreadsheet export")]
struct Cli {
    /// Log remapping decisions (repeat for per-edge fallback detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a rotation specification
    Angle {
        /// Keyword (left, right, none) or degrees
        #[arg(allow_hyphen_values = true)]
        spec: String,

        /// Only map for this format (xls or xlsx)
        #[arg(short, long, conflicts_with = "workbook")]
        format: Option<SheetFormat>,

        /// Infer the format from a workbook file name
        #[arg(short, long)]
        workbook: Option<PathBuf>,
    },

    /// Measure content boxes from a TOML box tree
    Boxes {
        /// Box tree file (TOML format)
        file: PathBuf,

        /// Only report this box
        #[arg(long)]
        id: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    match cli.command {
        Command::Angle {
            spec,
            format,
            workbook,
        } => {
            let formats = match (format, workbook) {
                (Some(format), _) => vec![format],
                (None, Some(path)) => match WorkbookHandle::for_path(path) {
                    Ok(handle) => vec![handle.format()],
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        std::process::exit(1);
                    }
                },
                (None, None) => SheetFormat::ALL.to_vec(),
            };
            println!("{}", rotation_report(Some(&spec), &formats));
        }
        Command::Boxes { file, id } => {
            let tree = match BoxTree::from_file(&file) {
                Ok(tree) => tree,
                Err(e) => {
                    eprintln!("Error loading box tree '{}': {}", file.display(), e);
                    if let Some(suggestions) = e.suggestions().filter(|s| !s.is_empty()) {
                        eprintln!("Did you mean: {}?", suggestions.join(", "));
                    }
                    std::process::exit(1);
                }
            };

            let ids = match id.as_deref() {
                Some(name) => match tree.lookup(name) {
                    Some(id) => vec![id],
                    None => {
                        eprintln!("Error: no box with id '{}' in '{}'", name, file.display());
                        std::process::exit(1);
                    }
                },
                None => tree.ids().collect(),
            };
            println!("{}", box_report(&tree, &ids));
        }
    }
}
