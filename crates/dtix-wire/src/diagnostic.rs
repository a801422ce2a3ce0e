use std::fmt;

/// A non-fatal observation made while decoding.
///
/// Diagnostics never abort a decode run. They are collected in wire order
/// and handed back next to a successful result so the caller can decide
/// whether the record is trustworthy.
///
/// ```text
/// ┌──────────────────────┬────────────────────────────────────────────┐
/// │ Variant              │ Raised when                                │
/// ├──────────────────────┼────────────────────────────────────────────┤
/// │ SuspiciousTag        │ boolean byte is neither 0 nor 1            │
/// │ UnknownEnumTag       │ enum byte names no known variant           │
/// │ NoTicketAreaMappings │ mapping vector decoded with zero elements  │
/// └──────────────────────┴────────────────────────────────────────────┘
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// A boolean byte other than `0x00`/`0x01`. It was read as `true`.
    SuspiciousTag {
        field: &'static str,
        offset: usize,
        value: u8,
    },

    /// A one-byte enum tag outside the variants this decoder knows.
    UnknownEnumTag {
        field: &'static str,
        enum_name: &'static str,
        offset: usize,
        value: u8,
    },

    /// The ticket-area mapping vector was present but empty.
    NoTicketAreaMappings { offset: usize },
}

impl Diagnostic {
    /// Offset of the byte(s) the diagnostic refers to.
    #[must_use]
    pub fn offset(&self) -> usize {
        match self {
            Self::SuspiciousTag { offset, .. }
            | Self::UnknownEnumTag { offset, .. }
            | Self::NoTicketAreaMappings { offset } => *offset,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SuspiciousTag {
                field,
                offset,
                value,
            } => write!(
                f,
                "suspicious tag {value:#04X} for `{field}` at offset {offset}, read as true"
            ),
            Self::UnknownEnumTag {
                field,
                enum_name,
                offset,
                value,
            } => write!(
                f,
                "unknown {enum_name} tag {value:#04X} for `{field}` at offset {offset}"
            ),
            Self::NoTicketAreaMappings { offset } => {
                write!(f, "no ticket-area mappings (empty vector at offset {offset})")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_suspicious_tag() {
        let d = Diagnostic::SuspiciousTag {
            field: "flag",
            offset: 12,
            value: 0x02,
        };
        assert_eq!(
            d.to_string(),
            "suspicious tag 0x02 for `flag` at offset 12, read as true"
        );
        assert_eq!(d.offset(), 12);
    }

    #[test]
    fn display_unknown_enum_tag() {
        let d = Diagnostic::UnknownEnumTag {
            field: "event_status",
            enum_name: "EventStatus",
            offset: 300,
            value: 0x09,
        };
        assert_eq!(
            d.to_string(),
            "unknown EventStatus tag 0x09 for `event_status` at offset 300"
        );
    }
}
