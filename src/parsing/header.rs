//! Movement header parsing: "Goods From X to Y" and its variants.
//!
//! A header line announces a bulk movement and names the route. Observed
//! phrasings are loose, so resolution follows an explicit precedence order
//! rather than a single pattern:
//!
//! 1. `from … to …` — both markers, "to" after "from"
//! 2. `to … from …` — reversed phrasing, roles swapped
//! 3. `from …` only — destination stays `"Unknown"`
//! 4. `to …` only — source stays `"Unknown"`
//! 5. `offloaded` fallback — source becomes `"Container/External"`
//!
//! Headers are gated on the movement keyword `"Goods"`; a header carrying
//! the negating keyword `"Needed"` is a request, not a movement, and
//! deactivates the running context instead. A body with the movement
//! keyword but no resolvable route marker is not a header at all.

use crate::record::{EXTERNAL_SOURCE, UNKNOWN_LOCATION};

/// Keyword marking a body as a movement announcement.
pub const MOVEMENT_KEYWORD: &str = "Goods";

/// Keyword marking a "Goods Needed" request, which never yields items.
pub const NEGATING_KEYWORD: &str = "Needed";

/// Fallback keyword for container offloads with no explicit route.
const OFFLOAD_KEYWORD: &str = "offloaded";

/// Which phrasing shape resolved the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderShape {
    /// `Goods From X to Y`
    FromThenTo,
    /// `Goods to Y from X`
    ToThenFrom,
    /// `Goods From X` with no destination
    FromOnly,
    /// `Goods to Y` with no source
    ToOnly,
    /// `Goods Offloaded` with no markers at all
    Offloaded,
}

/// A resolved movement header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementHeader {
    /// Origin location, `"Unknown"` or `"Container/External"` if unresolved.
    pub source: String,
    /// Target location, `"Unknown"` if unresolved.
    pub destination: String,
    /// The phrasing shape that matched.
    pub shape: HeaderShape,
}

/// Outcome of testing a message body for a movement header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderOutcome {
    /// The body announces a movement; the context should become active.
    Movement(MovementHeader),
    /// The body is a "Needed" request; the context must go inactive.
    Negated,
    /// The body carries no movement keyword, or carries it without any
    /// resolvable route marker.
    NotAHeader,
}

/// Parses a message body as a potential movement header.
///
/// The movement and negating keywords match case-sensitively (they appear
/// capitalized in practice); the `from`/`to`/`offloaded` markers match
/// ASCII case-insensitively.
pub fn parse_header(body: &str) -> HeaderOutcome {
    if !body.contains(MOVEMENT_KEYWORD) {
        return HeaderOutcome::NotAHeader;
    }
    if body.contains(NEGATING_KEYWORD) {
        return HeaderOutcome::Negated;
    }

    let from_pos = find_ignore_ascii_case(body, "from ");
    let to_pos = find_ignore_ascii_case(body, " to ");

    let (source, destination, shape) = match (from_pos, to_pos) {
        (Some(f), Some(t)) if t >= f + "from ".len() => {
            // Goods From X to Y
            let source = &body[f + "from ".len()..t];
            let destination = &body[t + " to ".len()..];
            (clean(source), clean(destination), HeaderShape::FromThenTo)
        }
        (Some(f), Some(t)) if t < f => {
            // Goods to Y from X
            let destination = &body[t + " to ".len()..f];
            let source = &body[f + "from ".len()..];
            (clean(source), clean(destination), HeaderShape::ToThenFrom)
        }
        // " to " starts inside the matched "from " window: the source name
        // was omitted, as in "Goods From to Shop B"
        (Some(_), Some(t)) | (None, Some(t)) => {
            let destination = &body[t + " to ".len()..];
            (
                UNKNOWN_LOCATION.to_string(),
                clean(destination),
                HeaderShape::ToOnly,
            )
        }
        (Some(f), None) => {
            let source = &body[f + "from ".len()..];
            (
                clean(source),
                UNKNOWN_LOCATION.to_string(),
                HeaderShape::FromOnly,
            )
        }
        (None, None) if find_ignore_ascii_case(body, OFFLOAD_KEYWORD).is_some() => (
            EXTERNAL_SOURCE.to_string(),
            UNKNOWN_LOCATION.to_string(),
            HeaderShape::Offloaded,
        ),
        (None, None) => return HeaderOutcome::NotAHeader,
    };

    HeaderOutcome::Movement(MovementHeader {
        source,
        destination,
        shape,
    })
}

/// Strips a trailing `" on <digits…>"` date fragment, trims, and falls back
/// to `"Unknown"` when nothing remains.
fn clean(name: &str) -> String {
    let name = strip_trailing_date(name).trim();
    if name.is_empty() {
        UNKNOWN_LOCATION.to_string()
    } else {
        name.to_string()
    }
}

/// Cuts a name at `" on "` when a date follows, e.g. `"Shop B on 1/2/25"`
/// becomes `"Shop B"`. Non-date uses of "on" ("Shop on Main") survive.
fn strip_trailing_date(name: &str) -> &str {
    let mut search_from = 0;
    while let Some(rel) = name[search_from..].find(" on ") {
        let pos = search_from + rel;
        let after = &name[pos + " on ".len()..];
        if after.trim_start().starts_with(|c: char| c.is_ascii_digit()) {
            return &name[..pos];
        }
        search_from = pos + " on ".len();
    }
    name
}

/// Byte position of the first ASCII case-insensitive occurrence of `needle`.
fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|w| w.eq_ignore_ascii_case(needle.as_bytes()))
}
