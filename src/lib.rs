//! ferrotag: read and rewrite ID3v2.3 tags in MP3 files.
//!
//! The view path parses the tag header and every frame into an ordered list,
//! then projects the six recognized fields out of it. The edit path streams
//! the file into a staged sibling copy with exactly one frame's payload
//! replaced, then atomically installs the copy over the original; a failed
//! or matchless edit never modifies the source file.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

pub mod cli;
pub mod error;
pub mod field_mapping;
pub mod id3;
pub mod utils;

pub use error::{TagError, TagResult};
pub use field_mapping::StandardField;
pub use id3::{Id3Frame, Id3v2Header, Id3v2Tag, RewriteOutcome};

use crate::id3::{commit, rewrite, staged_path};
use crate::utils::encoding::{decode_text, TextEncoding};

/// The six recognized tag fields of one file
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct TagSet {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub year: Option<String>,
    pub genre: Option<String>,
    pub comment: Option<String>,
}

impl TagSet {
    /// Project the recognized fields out of a frame list.
    ///
    /// Frames are matched by identifier, in file order, first occurrence
    /// wins. Missing frames stay `None`; order and completeness of the file
    /// do not matter.
    pub fn from_frames(frames: &[Id3Frame]) -> Self {
        let mut tags = TagSet::default();
        for frame in frames {
            let slot = match frame.id_str().as_str() {
                field_mapping::frame_ids::TITLE => &mut tags.title,
                field_mapping::frame_ids::ARTIST => &mut tags.artist,
                field_mapping::frame_ids::ALBUM => &mut tags.album,
                field_mapping::frame_ids::YEAR => &mut tags.year,
                field_mapping::frame_ids::GENRE => &mut tags.genre,
                field_mapping::frame_ids::COMMENT => &mut tags.comment,
                _ => continue,
            };
            if slot.is_none() {
                let text = decode_text(&frame.payload, TextEncoding::from_byte(frame.encoding));
                *slot = Some(text.trim_end_matches('\0').to_string());
            }
        }
        tags
    }

    /// Value of one recognized field
    pub fn get(&self, field: StandardField) -> Option<&str> {
        match field {
            StandardField::Title => self.title.as_deref(),
            StandardField::Artist => self.artist.as_deref(),
            StandardField::Album => self.album.as_deref(),
            StandardField::Year => self.year.as_deref(),
            StandardField::Genre => self.genre.as_deref(),
            StandardField::Comment => self.comment.as_deref(),
        }
    }
}

/// Read the recognized tags from an MP3 file (view path)
pub fn read_tags<P: AsRef<Path>>(path: P) -> TagResult<TagSet> {
    let path = path.as_ref();
    let file = open_source(path)?;
    let mut reader = BufReader::new(file);
    let tag = Id3v2Tag::read(&mut reader)?;
    Ok(TagSet::from_frames(&tag.frames))
}

/// Replace the payload of one frame in an MP3 file (edit path).
///
/// `path` is both source and destination. `frame_id` must be one of the six
/// recognized identifiers. The replacement is staged in a sibling temp file;
/// on a match the staged file atomically replaces the original, on
/// [`RewriteOutcome::NotFound`] it is discarded and the original is left
/// byte-identical. Any staging failure aborts before the original is
/// touched.
pub fn replace_frame<P: AsRef<Path>>(
    path: P,
    frame_id: &str,
    new_text: &str,
) -> TagResult<RewriteOutcome> {
    let path = path.as_ref();
    if StandardField::from_frame_id(frame_id).is_none() {
        return Err(TagError::UnsupportedFrameId(frame_id.to_string()));
    }
    let target: [u8; 4] = frame_id
        .as_bytes()
        .try_into()
        .map_err(|_| TagError::UnsupportedFrameId(frame_id.to_string()))?;

    let source = open_source(path)?;
    let staged = staged_path(path);
    let output = File::create(&staged).map_err(TagError::Staging)?;

    let mut reader = BufReader::new(source);
    let mut writer = BufWriter::new(output);

    let result = rewrite(&mut reader, &mut writer, &target, new_text.as_bytes())
        .and_then(|outcome| {
            writer.flush().map_err(TagError::Staging)?;
            Ok(outcome)
        });

    // Both streams must be closed before the commit step acts.
    drop(reader);
    let outcome = match result {
        Ok(outcome) => {
            drop(writer);
            outcome
        }
        Err(e) => {
            drop(writer);
            let _ = fs::remove_file(&staged);
            return Err(e);
        }
    };

    commit(path, &staged, &outcome)?;
    Ok(outcome)
}

/// Handle to one MP3 file with a validated ID3v2.3 tag
#[derive(Debug, Clone)]
pub struct TagFile {
    path: PathBuf,
    version: (u8, u8),
}

impl TagFile {
    /// Open a file and validate its tag header
    pub fn open<P: AsRef<Path>>(path: P) -> TagResult<Self> {
        let path = path.as_ref();
        let file = open_source(path)?;
        let mut reader = BufReader::new(file);
        let header = Id3v2Header::read(&mut reader)?;
        Ok(TagFile {
            path: path.to_path_buf(),
            version: header.version,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Tag version as displayed, e.g. "2.3.0"
    pub fn version_string(&self) -> String {
        format!("2.{}.{}", self.version.0, self.version.1)
    }

    /// Read the recognized tags
    pub fn read_tags(&self) -> TagResult<TagSet> {
        read_tags(&self.path)
    }

    /// Replace one frame's payload in place
    pub fn replace(&self, frame_id: &str, new_text: &str) -> TagResult<RewriteOutcome> {
        replace_frame(&self.path, frame_id, new_text)
    }
}

fn open_source(path: &Path) -> TagResult<File> {
    File::open(path).map_err(|source| TagError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id3::v2::test_support::{frame_bytes, tag_bytes};
    use std::io::Cursor;

    fn frames_from(bytes: &[u8]) -> Vec<Id3Frame> {
        Id3v2Tag::read(&mut Cursor::new(bytes)).unwrap().frames
    }

    #[test]
    fn projects_all_six_fields_in_canonical_order() {
        let frames = vec![
            frame_bytes(b"TIT2", [0, 0], 0, b"Title"),
            frame_bytes(b"TPE1", [0, 0], 0, b"Artist"),
            frame_bytes(b"TALB", [0, 0], 0, b"Album"),
            frame_bytes(b"TYER", [0, 0], 0, b"2019"),
            frame_bytes(b"TCON", [0, 0], 0, b"Rock"),
            frame_bytes(b"COMM", [0, 0], 0, b"Nice"),
        ];
        let tags = TagSet::from_frames(&frames_from(&tag_bytes(&frames, 16)));
        assert_eq!(tags.title.as_deref(), Some("Title"));
        assert_eq!(tags.artist.as_deref(), Some("Artist"));
        assert_eq!(tags.album.as_deref(), Some("Album"));
        assert_eq!(tags.year.as_deref(), Some("2019"));
        assert_eq!(tags.genre.as_deref(), Some("Rock"));
        assert_eq!(tags.comment.as_deref(), Some("Nice"));
    }

    #[test]
    fn missing_frame_does_not_shift_attribution() {
        // no TALB; the remaining five must land in their own slots
        let frames = vec![
            frame_bytes(b"TIT2", [0, 0], 0, b"Title"),
            frame_bytes(b"TPE1", [0, 0], 0, b"Artist"),
            frame_bytes(b"TYER", [0, 0], 0, b"2019"),
            frame_bytes(b"TCON", [0, 0], 0, b"Rock"),
            frame_bytes(b"COMM", [0, 0], 0, b"Nice"),
        ];
        let tags = TagSet::from_frames(&frames_from(&tag_bytes(&frames, 16)));
        assert_eq!(tags.album, None);
        assert_eq!(tags.year.as_deref(), Some("2019"));
        assert_eq!(tags.comment.as_deref(), Some("Nice"));
    }

    #[test]
    fn reordered_frames_still_attribute_correctly() {
        let frames = vec![
            frame_bytes(b"COMM", [0, 0], 0, b"Nice"),
            frame_bytes(b"TIT2", [0, 0], 0, b"Title"),
        ];
        let tags = TagSet::from_frames(&frames_from(&tag_bytes(&frames, 0)));
        assert_eq!(tags.title.as_deref(), Some("Title"));
        assert_eq!(tags.comment.as_deref(), Some("Nice"));
    }

    #[test]
    fn first_occurrence_wins_and_unknown_frames_are_ignored() {
        let frames = vec![
            frame_bytes(b"TIT2", [0, 0], 0, b"First"),
            frame_bytes(b"TIT2", [0, 0], 0, b"Second"),
            frame_bytes(b"TRCK", [0, 0], 0, b"7"),
        ];
        let tags = TagSet::from_frames(&frames_from(&tag_bytes(&frames, 8)));
        assert_eq!(tags.title.as_deref(), Some("First"));
        assert_eq!(tags.artist, None);
    }

    #[test]
    fn trailing_nulls_are_trimmed_for_display() {
        let frames = vec![frame_bytes(b"TIT2", [0, 0], 0, b"Hi\x00\x00\x00")];
        let tags = TagSet::from_frames(&frames_from(&tag_bytes(&frames, 0)));
        assert_eq!(tags.title.as_deref(), Some("Hi"));
    }

    #[test]
    fn replace_frame_rejects_unrecognized_identifiers() {
        let err = replace_frame("/nonexistent/x.mp3", "APIC", "text").unwrap_err();
        assert!(matches!(err, TagError::UnsupportedFrameId(_)));
        let err = replace_frame("/nonexistent/x.mp3", "TIT", "text").unwrap_err();
        assert!(matches!(err, TagError::UnsupportedFrameId(_)));
    }
}
