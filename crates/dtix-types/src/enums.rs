use dtix_wire::{Cursor, Diagnostic, WireError};

/// A fieldless enum stored as a single Borsh variant byte.
pub trait WireEnum: Sized + Copy {
  /// Type name used in diagnostics.
  const NAME: &'static str;

  fn to_wire_byte(self) -> u8;

  /// `None` for bytes that name no known variant.
  fn from_wire_byte(value: u8) -> Option<Self>;
}

// ── Macro for wire-byte enum boilerplate ──────────────────────────────
//
// Borsh writes a unit enum as its variant index in one byte. Every enum
// here is a fixed list of variants in declaration order, so the macro
// only needs the index next to each name.

macro_rules! wire_enum {
  (
    $(#[$meta:meta])*
    pub enum $name:ident {
      $( $(#[$vmeta:meta])* $variant:ident = $wire:literal ),+ $(,)?
    }
  ) => {
    $(#[$meta])*
    pub enum $name {
      $( $(#[$vmeta])* $variant ),+
    }

    impl WireEnum for $name {
      const NAME: &'static str = stringify!($name);

      fn to_wire_byte(self) -> u8 {
        match self {
          $( Self::$variant => $wire ),+
        }
      }

      fn from_wire_byte(value: u8) -> Option<Self> {
        match value {
          $( $wire => Some(Self::$variant), )+
          _ => None,
        }
      }
    }
  };
}

wire_enum! {
  /// Lifecycle state of an event.
  ///
  /// ```text
  /// ┌──────┬───────────┐
  /// │ Wire │ Status    │
  /// ├──────┼───────────┤
  /// │ 0x00 │ Upcoming  │
  /// │ 0x01 │ OnSale    │
  /// │ 0x02 │ SoldOut   │
  /// │ 0x03 │ Cancelled │
  /// │ 0x04 │ Postponed │
  /// │ 0x05 │ Completed │
  /// └──────┴───────────┘
  /// ```
  #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
  pub enum EventStatus {
    #[default]
    Upcoming = 0x00,
    OnSale = 0x01,
    SoldOut = 0x02,
    Cancelled = 0x03,
    Postponed = 0x04,
    Completed = 0x05,
  }
}

wire_enum! {
  /// How ticket prices are set for an event.
  #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
  pub enum PricingStrategyType {
    #[default]
    FixedPrice = 0x00,
    DynamicPricing = 0x01,
  }
}

/// Consume a one-byte enum tag and check it against `E`.
///
/// The tag is always consumed. An unknown value does not abort the run;
/// it is recorded as [`Diagnostic::UnknownEnumTag`] and `None` is returned.
/// A single stray byte cannot shift the fields after it, so there is
/// nothing to gain by failing here.
///
/// # Errors
///
/// [`WireError::BufferUnderrun`] at end of input.
pub fn read_enum_tag<E: WireEnum>(
  cursor: &mut Cursor<'_>,
  field: &'static str,
  diagnostics: &mut Vec<Diagnostic>,
) -> Result<Option<E>, WireError> {
  let offset = cursor.position();
  let value = cursor.read_u8()?;
  let parsed = E::from_wire_byte(value);
  if parsed.is_none() {
    diagnostics.push(Diagnostic::UnknownEnumTag {
      field,
      enum_name: E::NAME,
      offset,
      value,
    });
  }
  Ok(parsed)
}
