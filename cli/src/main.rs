use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use dbus_idlgen_loader::{Idl, IdlError};
use dbus_idlgen_schema::map_signature;

#[derive(Parser)]
#[command(name = "dbus-idlgen")]
#[command(about = "Inspect D-Bus introspection XML and resolve type signatures", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse an introspection XML file and dump the model as JSON
    Inspect {
        /// Input introspection XML file
        #[arg(short, long)]
        input: PathBuf,

        /// Output JSON file (if omitted, prints to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Resolve a D-Bus type signature to its Rust type name
    Resolve {
        /// Type signature, e.g. "as" or "a{sv}"
        signature: String,
    },
}

fn main() -> Result<(), IdlError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Inspect { input, output } => {
            // Load and parse the IDL file
            let idl = Idl::load(input)?;
            // Pretty-print the model for a downstream template to consume
            let json = serde_json::to_string_pretty(&idl).unwrap();
            if let Some(out_path) = output {
                fs::write(out_path, &json).map_err(IdlError::Io)?;
                println!("Inspected {} → {}", input.display(), out_path.display());
            } else {
                println!("{}", json);
            }
            Ok(())
        }

        Commands::Resolve { signature } => {
            println!("{}", map_signature(signature));
            Ok(())
        }
    }
}
