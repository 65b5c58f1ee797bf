//! Constants used throughout the names core crate.
//!
//! The honorific list and the label sets are fixed configuration data; they are read-only for the
//! life of the process.

/// Lowercase honorific tokens that may precede a person's name.
pub const TITLES: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sir", "dame", "lord", "lady", "rev", "sgt", "cpl", "lt",
    "capt", "maj", "col", "gen", "cmdr", "supt", "det", "insp", "judge", "justice", "baron",
    "baroness", "prince", "princess", "king", "queen", "president", "senator", "governor", "mayor",
    "councillor", "minister", "secretary", "cardinal", "archbishop", "bishop", "father", "sister",
    "brother", "sheikh", "imam", "rabbi", "ayatollah",
];

/// Possessive suffixes, ASCII apostrophe and right single quotation mark.
pub const POSSESSIVE_MARKERS: &[&str] = &["'s", "\u{2019}s"];

/// Characters stripped from the end of the word preceding an entity.
pub const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':'];

/// Label the recognizer uses for people.
pub const PERSON_LABEL: &str = "PERSON";

/// Labels that already denote a clearly non-person category.
///
/// A possessive after one of these ("Google's results") is not promoted to a person.
pub const NON_PERSON_LABELS: &[&str] = &["ORG", "GPE", "FAC", "NORP", "EVENT"];

/// Port used when neither `NAMES_REST_ADDR` nor `PORT` is set.
pub const DEFAULT_PORT: u16 = 5001;

/// Directory holding the static assets when `NAMES_STATIC_DIR` is not set.
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Static asset served at `/`.
pub const INDEX_FILENAME: &str = "index.html";

/// Style guide data script served alongside the index page.
pub const STYLE_DATA_FILENAME: &str = "style_guide_data.js";

/// Style guide document served alongside the index page.
pub const STYLE_GUIDE_FILENAME: &str = "guardian_style_guide.md";
