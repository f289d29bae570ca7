// CLI binary entry point for ferrotag
//
// Resolves command-line options to frame identifiers and hands the already
// resolved identifier to the library; the tag codec itself knows nothing of
// command syntax.

use clap::{Args, Parser, Subcommand};
use std::process;

use ferrotag::cli::commands;
use ferrotag::cli::{OutputFormat, OutputFormatter};
use ferrotag::field_mapping::StandardField;

/// ferrotag - ID3v2.3 tag viewer and editor
#[derive(Parser, Debug)]
#[command(name = "ferrotag")]
#[command(about = "View and edit ID3v2.3 tags in MP3 files", long_about = None)]
#[command(version)]
struct Config {
    /// Output format
    #[arg(short, long, value_enum, default_value = "pretty")]
    format: OutputFormat,

    /// Quiet mode (suppress status messages)
    #[arg(short, long)]
    quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// View tags in MP3 file(s)
    View {
        /// MP3 file path(s)
        #[arg(value_name = "FILE")]
        files: Vec<String>,
    },
    /// Edit one tag in an MP3 file, in place
    Edit {
        #[command(flatten)]
        field: FieldArgs,

        /// MP3 file to edit
        #[arg(value_name = "FILE")]
        file: String,
    },
}

/// One of these selects the frame to edit and carries its new text
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct FieldArgs {
    /// New song title (TIT2)
    #[arg(short = 't', long, value_name = "TEXT")]
    title: Option<String>,

    /// New artist name (TPE1)
    #[arg(short = 'a', long, value_name = "TEXT")]
    artist: Option<String>,

    /// New album name (TALB)
    #[arg(short = 'A', long, value_name = "TEXT")]
    album: Option<String>,

    /// New year (TYER)
    #[arg(short = 'y', long, value_name = "TEXT")]
    year: Option<String>,

    /// New genre (TCON)
    #[arg(short = 'm', long, value_name = "TEXT")]
    genre: Option<String>,

    /// New comment (COMM)
    #[arg(short = 'c', long, value_name = "TEXT")]
    comment: Option<String>,
}

impl FieldArgs {
    fn resolve(&self) -> Option<(StandardField, &str)> {
        if let Some(v) = self.title.as_deref() {
            Some((StandardField::Title, v))
        } else if let Some(v) = self.artist.as_deref() {
            Some((StandardField::Artist, v))
        } else if let Some(v) = self.album.as_deref() {
            Some((StandardField::Album, v))
        } else if let Some(v) = self.year.as_deref() {
            Some((StandardField::Year, v))
        } else if let Some(v) = self.genre.as_deref() {
            Some((StandardField::Genre, v))
        } else if let Some(v) = self.comment.as_deref() {
            Some((StandardField::Comment, v))
        } else {
            None
        }
    }
}

fn main() {
    let config = Config::parse();
    let formatter = OutputFormatter::new(config.format.clone(), config.quiet);

    let result = match &config.command {
        Commands::View { files } => commands::command_view(files, &formatter),
        Commands::Edit { field, file } => match field.resolve() {
            Some((field, text)) => commands::command_edit(file, field, text, &formatter),
            None => {
                eprintln!("Error: missing tag option (use -t, -a, -A, -y, -m or -c)");
                process::exit(1);
            }
        },
    };

    if let Err(e) = result {
        eprintln!("✗ {:#}", e);
        process::exit(1);
    }
}
