///
/// NumberTag
///
/// Stable tag for the three `NumberValue` variants. Used to order values of
/// equal magnitude but different exactness, and in diagnostics; it has no
/// wire role of its own (the projector/emitter pick representation from the
/// declared XSD type, not from this tag).
///
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum NumberTag {
    Integer = 1,
    Rational = 2,
    Double = 3,
}

impl NumberTag {
    #[must_use]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Integer => "Integer",
            Self::Rational => "Rational",
            Self::Double => "Double",
        }
    }
}

impl std::fmt::Display for NumberTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
