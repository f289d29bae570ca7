// Mapping between the recognized tag fields, their ID3v2.3 frame
// identifiers, and the CLI short flags that select them.
//
// This table belongs to the CLI-facing boundary. The codec itself only ever
// sees an already-resolved 4-character frame identifier.

/// ID3v2.3 frame identifiers for the recognized fields
pub mod frame_ids {
    pub const TITLE: &str = "TIT2"; // Title/songname/content description
    pub const ARTIST: &str = "TPE1"; // Lead performer(s)/Soloist(s)
    pub const ALBUM: &str = "TALB"; // Album/Movie/Show title
    pub const YEAR: &str = "TYER"; // Year
    pub const GENRE: &str = "TCON"; // Content type
    pub const COMMENT: &str = "COMM"; // Comments
}

/// The six recognized tag fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardField {
    Title,
    Artist,
    Album,
    Year,
    Genre,
    Comment,
}

impl StandardField {
    pub const ALL: [StandardField; 6] = [
        StandardField::Title,
        StandardField::Artist,
        StandardField::Album,
        StandardField::Year,
        StandardField::Genre,
        StandardField::Comment,
    ];

    /// Field name as displayed to the user
    pub fn as_str(&self) -> &'static str {
        match self {
            StandardField::Title => "title",
            StandardField::Artist => "artist",
            StandardField::Album => "album",
            StandardField::Year => "year",
            StandardField::Genre => "genre",
            StandardField::Comment => "comment",
        }
    }

    /// The ID3v2.3 frame identifier carrying this field
    pub fn frame_id(&self) -> &'static str {
        match self {
            StandardField::Title => frame_ids::TITLE,
            StandardField::Artist => frame_ids::ARTIST,
            StandardField::Album => frame_ids::ALBUM,
            StandardField::Year => frame_ids::YEAR,
            StandardField::Genre => frame_ids::GENRE,
            StandardField::Comment => frame_ids::COMMENT,
        }
    }

    /// Resolve a frame identifier to its field
    pub fn from_frame_id(id: &str) -> Option<Self> {
        match id {
            frame_ids::TITLE => Some(StandardField::Title),
            frame_ids::ARTIST => Some(StandardField::Artist),
            frame_ids::ALBUM => Some(StandardField::Album),
            frame_ids::YEAR => Some(StandardField::Year),
            frame_ids::GENRE => Some(StandardField::Genre),
            frame_ids::COMMENT => Some(StandardField::Comment),
            _ => None,
        }
    }

    /// The short command-line flag selecting this field
    pub fn flag(&self) -> char {
        match self {
            StandardField::Title => 't',
            StandardField::Artist => 'a',
            StandardField::Album => 'A',
            StandardField::Year => 'y',
            StandardField::Genre => 'm',
            StandardField::Comment => 'c',
        }
    }

    /// Resolve a short flag character to its field
    pub fn from_flag(flag: char) -> Option<Self> {
        match flag {
            't' => Some(StandardField::Title),
            'a' => Some(StandardField::Artist),
            'A' => Some(StandardField::Album),
            'y' => Some(StandardField::Year),
            'm' => Some(StandardField::Genre),
            'c' => Some(StandardField::Comment),
            _ => None,
        }
    }
}
