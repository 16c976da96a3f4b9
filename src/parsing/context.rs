//! The rolling movement context tracked across transcript lines.
//!
//! The engine is a two-state machine:
//!
//! - `Idle` — no movement is being itemized; item-looking lines are noise.
//! - `Active` — a header opened a movement; subsequent item lines attach to
//!   its route until something ends the list.
//!
//! Transitions:
//!
//! - `Idle → Active` on a resolved movement header.
//! - `Active → Idle` on a "Needed" header, or on a new timestamped message
//!   with no digit in its body (a conversational reply ends the item list).
//! - `Active → Active` on continuation lines and on new timestamped
//!   messages that still carry a digit (treated as more items of the same
//!   batch).
//!
//! Digit presence is the sole signal separating "more items" from
//! "conversation moved on". It is deliberately coarse: a digitless item
//! line ends the list, and a digit-bearing reply keeps it open. Known
//! misclassification source, kept as observed behavior.

use crate::parsing::header::MovementHeader;
use crate::parsing::line::Timestamp;
use crate::record::UNKNOWN_LOCATION;

/// The currently active (source, destination) route, if any.
///
/// Fields are overwritten wholesale on every new header, never merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionContext {
    /// Origin of the running movement.
    pub source: String,
    /// Target of the running movement.
    pub destination: String,
    /// Whether item lines currently attach to this route.
    pub active: bool,
}

impl TransactionContext {
    /// The idle context: both locations unknown, nothing attaches.
    pub fn idle() -> Self {
        Self {
            source: UNKNOWN_LOCATION.to_string(),
            destination: UNKNOWN_LOCATION.to_string(),
            active: false,
        }
    }

    /// Builds an active context from a resolved header.
    pub fn activated(header: MovementHeader) -> Self {
        Self {
            source: header.source,
            destination: header.destination,
            active: true,
        }
    }

    /// Returns this context with the active flag cleared. Route names are
    /// kept for inspection; the next header overwrites them anyway.
    #[must_use]
    pub fn deactivated(&self) -> Self {
        Self {
            active: false,
            ..self.clone()
        }
    }
}

impl Default for TransactionContext {
    fn default() -> Self {
        Self::idle()
    }
}

/// The per-invocation scan state threaded through the line fold.
///
/// One value per parse invocation; each fold step consumes a state and
/// returns the next one, so concurrent parses never share anything.
#[derive(Debug, Clone, Default)]
pub struct ScanState {
    /// Timestamp of the most recent marker-bearing line.
    pub timestamp: Option<Timestamp>,
    /// The movement context as of the previous line.
    pub context: TransactionContext,
}

impl ScanState {
    /// Returns this state with a newly captured timestamp and context.
    #[must_use]
    pub fn advanced(timestamp: Timestamp, context: TransactionContext) -> Self {
        Self {
            timestamp: Some(timestamp),
            context,
        }
    }
}

/// Returns `true` if the body carries at least one ASCII digit.
pub fn has_digit(body: &str) -> bool {
    body.bytes().any(|b| b.is_ascii_digit())
}
