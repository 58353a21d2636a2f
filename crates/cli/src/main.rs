use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use clip64_core::{Selection, SelectionOutcome};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod prompt;
mod sink;

use sink::OutputSink;

#[derive(Parser)]
#[command(name = "clip64")]
#[command(about = "Convert a file's bytes to Base64 text")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a file to Base64 and deliver the text
    Convert {
        /// Candidate files; with more than one, a choice is prompted
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Copy the text to the system clipboard instead of stdout
        #[arg(long)]
        clipboard: bool,
        /// Write the text to this file instead of stdout
        #[arg(long, short, conflicts_with = "clipboard")]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("clip64=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            paths,
            clipboard,
            output,
        } => {
            let sink = OutputSink::from_flags(clipboard, output);

            match clip64_core::select(paths)? {
                Selection::Immediate(path) => convert_and_deliver(&path, &sink)?,
                Selection::Prompt(pending) => {
                    let choice = prompt::ask(&pending)?;
                    match pending.resolve(choice) {
                        SelectionOutcome::Convert(path) => convert_and_deliver(&path, &sink)?,
                        SelectionOutcome::Cancelled => {
                            eprintln!("Cancelled. Nothing was converted.");
                        }
                        SelectionOutcome::Exit => {}
                        SelectionOutcome::Unrecognised => {
                            eprintln!("No choice was made, so nothing happened.");
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

fn convert_and_deliver(path: &Path, sink: &OutputSink) -> Result<(), Box<dyn std::error::Error>> {
    let encoded = clip64_core::convert_file(path)?;
    sink.deliver(&encoded)?;

    if sink.confirms() {
        eprintln!(
            "{} is now Base64 text. {}",
            path.display(),
            clip64_core::pick(rand::random())
        );
    }

    Ok(())
}
