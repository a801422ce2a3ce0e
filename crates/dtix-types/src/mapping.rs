use std::fmt;

/// Character joining a ticket type and an area id in a mapping string.
pub const MAPPING_SEPARATOR: char = '-';

/// One entry of an event's ticket-area list.
///
/// The program stores each mapping as a single string `"<type>-<area>"`.
/// Decoding splits on the *first* separator only, so area ids may contain
/// further dashes. Strings with no separator at all are kept verbatim and
/// no type or area is inferred from them.
///
/// ```text
///   "VIP-A1"       → Split { ticket_type: "VIP", area: "A1" }
///   "GA-B2-left"   → Split { ticket_type: "GA",  area: "B2-left" }
///   "VIPONLY"      → Opaque("VIPONLY")
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TicketAreaMapping {
    Split { ticket_type: String, area: String },
    Opaque(String),
}

impl TicketAreaMapping {
    #[must_use]
    pub fn new(ticket_type: impl Into<String>, area: impl Into<String>) -> Self {
        Self::Split {
            ticket_type: ticket_type.into(),
            area: area.into(),
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(MAPPING_SEPARATOR) {
            Some((ticket_type, area)) => Self::new(ticket_type, area),
            None => Self::Opaque(raw.to_owned()),
        }
    }

    #[must_use]
    pub fn ticket_type(&self) -> Option<&str> {
        match self {
            Self::Split { ticket_type, .. } => Some(ticket_type),
            Self::Opaque(_) => None,
        }
    }

    #[must_use]
    pub fn area(&self) -> Option<&str> {
        match self {
            Self::Split { area, .. } => Some(area),
            Self::Opaque(_) => None,
        }
    }

    /// The string as it is stored on chain.
    #[must_use]
    pub fn to_wire_string(&self) -> String {
        self.to_string()
    }

    /// `true` when writing this mapping and reading it back yields the same
    /// value. Decoded mappings always are; a hand-built `Split` whose type
    /// contains the separator, or an `Opaque` that contains one, is not.
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        match self {
            Self::Split { ticket_type, .. } => !ticket_type.contains(MAPPING_SEPARATOR),
            Self::Opaque(raw) => !raw.contains(MAPPING_SEPARATOR),
        }
    }
}

impl From<String> for TicketAreaMapping {
    fn from(raw: String) -> Self {
        if raw.contains(MAPPING_SEPARATOR) {
            Self::parse(&raw)
        } else {
            Self::Opaque(raw)
        }
    }
}

impl fmt::Display for TicketAreaMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Split { ticket_type, area } => {
                write!(f, "{ticket_type}{MAPPING_SEPARATOR}{area}")
            }
            Self::Opaque(raw) => f.write_str(raw),
        }
    }
}
