//! Info records, icons and summary cards.
//!
//! - `parse_record`: the `"Name: Description"` metadata format
//! - `resolve_icon`: total body-name to glyph mapping
//! - `generate_cards`: one-time split of body records into two columns

use std::fmt;

/// A parsed name/description pair from a body's metadata attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoRecord {
    pub name: String,
    pub details: String,
}

/// Why a body's metadata could not be presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfoError {
    /// The element carries no metadata attribute at all
    MissingData { body: String },
    /// The metadata does not split into exactly two parts on `": "`
    BadFormat { raw: String },
}

impl fmt::Display for InfoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InfoError::MissingData { body } => {
                write!(f, "no info metadata on body '{}'", body)
            }
            InfoError::BadFormat { raw } => {
                write!(f, "malformed info record: \"{}\"", raw)
            }
        }
    }
}

impl std::error::Error for InfoError {}

/// Parse a raw metadata string. Requires exactly one `": "` occurrence.
pub fn parse_record(raw: &str) -> Result<InfoRecord, InfoError> {
    let parts: Vec<&str> = raw.split(": ").collect();
    if parts.len() != 2 {
        return Err(InfoError::BadFormat {
            raw: raw.to_string(),
        });
    }
    Ok(InfoRecord {
        name: parts[0].to_string(),
        details: parts[1].to_string(),
    })
}

/// Resolve a body's metadata into a record, treating absence as an error.
pub fn record_for(body: &str, metadata: Option<&str>) -> Result<InfoRecord, InfoError> {
    match metadata {
        Some(raw) => parse_record(raw),
        None => Err(InfoError::MissingData {
            body: body.to_string(),
        }),
    }
}

/// Symbolic glyph identifier for a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Thermometer,
    Flame,
    Globe,
    Disc,
    Mars,
    Storm,
    Ring,
    Snowflake,
    Water,
    Star,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Thermometer => "\u{1F321}",
            Icon::Flame => "\u{1F525}",
            Icon::Globe => "\u{1F30D}",
            Icon::Disc => "\u{25CF}",
            Icon::Mars => "\u{2642}",
            Icon::Storm => "\u{1F329}",
            Icon::Ring => "\u{25CE}",
            Icon::Snowflake => "\u{2744}",
            Icon::Water => "\u{1F30A}",
            Icon::Star => "\u{2605}",
        }
    }
}

/// Map a body name to its glyph. Case-insensitive, total: unknown
/// names fall through to the generic star.
pub fn resolve_icon(name: &str) -> Icon {
    match name.to_ascii_lowercase().as_str() {
        "mercury" => Icon::Thermometer,
        "venus" => Icon::Flame,
        "earth" => Icon::Globe,
        "moon" => Icon::Disc,
        "mars" => Icon::Mars,
        "jupiter" => Icon::Storm,
        "saturn" => Icon::Ring,
        "uranus" => Icon::Snowflake,
        "neptune" => Icon::Water,
        _ => Icon::Star,
    }
}

/// One summary card: icon plus the parsed record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoCard {
    pub icon: Icon,
    pub name: String,
    pub details: String,
}

/// The two card columns flanking the stage.
#[derive(Debug, Clone, Default)]
pub struct CardColumns {
    pub left: Vec<InfoCard>,
    pub right: Vec<InfoCard>,
}

impl CardColumns {
    pub fn total(&self) -> usize {
        self.left.len() + self.right.len()
    }
}

/// Build the card columns from `(body, metadata)` pairs in document order.
/// Valid records alternate left/right by parity; rejected ones are logged
/// and skipped, same policy as interaction-time display.
pub fn generate_cards<'a, I>(records: I) -> CardColumns
where
    I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
{
    let mut columns = CardColumns::default();
    let mut valid = 0usize;
    for (body, metadata) in records {
        let record = match record_for(body, metadata) {
            Ok(record) => record,
            Err(err) => {
                log::warn!("card skipped: {}", err);
                continue;
            }
        };
        let card = InfoCard {
            icon: resolve_icon(&record.name),
            name: record.name,
            details: record.details,
        };
        if valid % 2 == 0 {
            columns.left.push(card);
        } else {
            columns.right.push(card);
        }
        valid += 1;
    }
    columns
}
