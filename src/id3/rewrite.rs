// Single-pass frame replacement over a tag stream

use std::io::{self, Read, Write};

use crate::error::{TagError, TagResult};
use crate::id3::v2::{FrameWalk, Id3v2Header};

/// Block size for the verbatim audio-tail copy
const COPY_BLOCK: usize = 4096;

/// Terminal outcome of a rewrite pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteOutcome {
    /// The first frame matching the target identifier was replaced
    Replaced { frame_id: String },
    /// No frame matched; the staged output must be discarded
    NotFound,
}

/// Stream `source` to `output`, replacing the payload of the first frame
/// matching `target_id` with `new_text` and passing every other byte through
/// untouched.
///
/// The 10-byte header is copied verbatim. Non-matching frames (and any later
/// duplicates of the target) are re-emitted byte-for-byte. The replacement
/// keeps the frame's identifier, flags, and encoding byte, and declares a
/// size of `new_text.len() + 1`; empty replacement text is legal. After the
/// frame region, the padding sentinel and everything behind it (padding
/// residue plus the audio stream) is copied in fixed-size blocks, never
/// parsed.
///
/// Write failures surface as [`TagError::Staging`] so the caller knows the
/// original file is still intact.
pub fn rewrite<R: Read, W: Write>(
    source: &mut R,
    output: &mut W,
    target_id: &[u8; 4],
    new_text: &[u8],
) -> TagResult<RewriteOutcome> {
    let header = Id3v2Header::read(source)?;
    output.write_all(header.raw_bytes()).map_err(TagError::Staging)?;

    let mut walk = FrameWalk::new(&mut *source, &header);
    let mut outcome = RewriteOutcome::NotFound;
    while let Some(frame) = walk.next_frame()? {
        if outcome == RewriteOutcome::NotFound && frame.id == *target_id {
            frame
                .with_payload(new_text)
                .write_to(output)
                .map_err(TagError::Staging)?;
            outcome = RewriteOutcome::Replaced {
                frame_id: frame.id_str(),
            };
        } else {
            frame.write_to(output).map_err(TagError::Staging)?;
        }
    }

    let trailer = walk.into_trailer();
    output.write_all(&trailer).map_err(TagError::Staging)?;
    copy_tail(source, output)?;

    Ok(outcome)
}

/// Copy the rest of the source verbatim, in `COPY_BLOCK`-sized reads
fn copy_tail<R: Read, W: Write>(source: &mut R, output: &mut W) -> TagResult<()> {
    let mut buffer = [0u8; COPY_BLOCK];
    loop {
        let read = match source.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(TagError::Io(e)),
        };
        output.write_all(&buffer[..read]).map_err(TagError::Staging)?;
    }
    Ok(())
}
