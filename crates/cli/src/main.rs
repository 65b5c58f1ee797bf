use clap::{Parser, Subcommand};
use names_core::recognizer::{FixedRecognizer, HeuristicRecognizer};
use names_core::{titles, EntitySpan, NameService};
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "names")]
#[command(about = "Extract person names and their character offsets from text")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract names from text, a file or stdin
    Extract {
        /// Text to scan (reads stdin when neither TEXT nor --file is given)
        text: Option<String>,
        /// Read the text from a file
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
        /// Replay recognizer output from a JSON file instead of running the heuristic recognizer
        #[arg(long)]
        entities: Option<PathBuf>,
        /// Indent the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// List the honorific titles that extend a name
    Titles,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Extract {
            text,
            file,
            entities,
            pretty,
        }) => {
            let text = match (text, file) {
                (Some(text), _) => text,
                (None, Some(path)) => std::fs::read_to_string(path)?,
                (None, None) => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };

            let service = match entities {
                Some(path) => {
                    let spans: Vec<EntitySpan> =
                        serde_json::from_str(&std::fs::read_to_string(path)?)?;
                    NameService::new(Arc::new(FixedRecognizer::new(spans)))
                }
                None => NameService::new(Arc::new(HeuristicRecognizer::new())),
            };

            let res = service.extract_names(&text)?;
            let out = if pretty {
                serde_json::to_string_pretty(&res)?
            } else {
                serde_json::to_string(&res)?
            };
            println!("{}", out);
        }
        Some(Commands::Titles) => {
            for title in titles::titles() {
                println!("{}", title);
            }
        }
        None => {
            println!("Use 'names --help' for commands");
        }
    }

    Ok(())
}
