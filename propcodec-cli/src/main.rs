mod logging;
mod view;

use clap::{Parser, Subcommand};
use propcodec::{SourceEncoding, codec::export_file_name};
use propcodec_cli::{run_decode_command, run_encode_command, run_import_command};

use crate::view::print_view;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log what the codec does (debug level) to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode a .properties file into a JSON array of entries.
    Decode {
        /// The .properties file to decode
        #[arg(short, long)]
        input: String,
        /// Write the JSON here instead of stdout
        #[arg(short, long)]
        output: Option<String>,
        /// How the file bytes are interpreted: latin1, utf8 or auto
        #[arg(short, long, default_value_t = SourceEncoding::Latin1)]
        encoding: SourceEncoding,
    },

    /// Encode a JSON array of entries into .properties text.
    Encode {
        /// The JSON file holding the entries
        #[arg(short, long)]
        input: String,
        /// Write the .properties text here instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Import a translated .properties file against a JSON file of originals.
    Import {
        /// The translated .properties file
        #[arg(short, long)]
        input: String,
        /// JSON array of the project's original entries
        #[arg(long)]
        originals: String,
        /// Project the originals belong to
        #[arg(long, default_value_t = 1)]
        project_id: u64,
        /// Write the reconciled JSON here instead of stdout
        #[arg(short, long)]
        output: Option<String>,
        /// How the file bytes are interpreted: latin1, utf8 or auto
        #[arg(short, long, default_value_t = SourceEncoding::Latin1)]
        encoding: SourceEncoding,
    },

    /// View the entries of a .properties file.
    View {
        /// The .properties file to view
        #[arg(short, long)]
        input: String,
        /// How the file bytes are interpreted: latin1, utf8 or auto
        #[arg(short, long, default_value_t = SourceEncoding::Latin1)]
        encoding: SourceEncoding,
        /// Display full values without truncation
        #[arg(long)]
        full: bool,
    },

    /// Print the export file name for a project and locale.
    Name {
        /// Project slug
        #[arg(short, long)]
        project: String,
        /// BCP 47 locale, e.g. pt-BR
        #[arg(short, long)]
        locale: String,
    },
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    let result = match args.commands {
        Commands::Decode {
            input,
            output,
            encoding,
        } => run_decode_command(&input, output.as_deref(), encoding),
        Commands::Encode { input, output } => run_encode_command(&input, output.as_deref()),
        Commands::Import {
            input,
            originals,
            project_id,
            output,
            encoding,
        } => run_import_command(&input, &originals, project_id, output.as_deref(), encoding),
        Commands::View {
            input,
            encoding,
            full,
        } => print_view(&input, encoding, full),
        Commands::Name { project, locale } => export_file_name(&project, &locale)
            .map(|name| println!("{}", name))
            .map_err(|e| e.to_string()),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}
