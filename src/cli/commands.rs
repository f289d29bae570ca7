// CLI command implementations

use std::io;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::cli::OutputFormatter;
use crate::field_mapping::StandardField;
use crate::id3::RewriteOutcome;

/// Read and display tags from each file
pub fn command_view(files: &[String], formatter: &OutputFormatter) -> Result<()> {
    if files.is_empty() {
        bail!("no files specified");
    }

    let mut stdout = io::stdout();
    let mut failed = 0usize;
    for file_path in files {
        if !has_mp3_extension(file_path) {
            formatter.print_error(&format!("{}: file extension should be .mp3", file_path));
            failed += 1;
            continue;
        }

        match crate::read_tags(file_path) {
            Ok(tags) => {
                formatter
                    .output_tags(file_path, &tags, &mut stdout)
                    .context("writing output")?;
            }
            Err(e) => {
                formatter.print_error(&format!("{}: {}", file_path, e));
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{} file(s) could not be read", failed);
    }
    Ok(())
}

/// Replace one tag frame in a file, in place
pub fn command_edit(
    file: &str,
    field: StandardField,
    new_text: &str,
    formatter: &OutputFormatter,
) -> Result<()> {
    if !has_mp3_extension(file) {
        bail!("{}: file extension should be .mp3", file);
    }

    let frame_id = field.frame_id();
    let outcome = crate::replace_frame(file, frame_id, new_text)
        .with_context(|| format!("editing {}", file))?;

    match outcome {
        RewriteOutcome::Replaced { .. } => {
            formatter.print_success(&format!("{} updated in {}", field.as_str(), file));
        }
        RewriteOutcome::NotFound => {
            // a legitimate outcome, not a failure
            formatter.print_info(&format!(
                "frame {} not found in {}, no changes made",
                frame_id, file
            ));
        }
    }
    Ok(())
}

fn has_mp3_extension(path: &str) -> bool {
    Path::new(path)
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("mp3"))
        .unwrap_or(false)
}
