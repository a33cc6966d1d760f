//! The XSD numeric types the typed projector recognizes.
use crate::error::NumericError;
use std::fmt;
use std::str::FromStr;

///
/// DeclaredType
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DeclaredType {
    Integer,
    Decimal,
    Double,
    Float,
}

impl DeclaredType {
    #[must_use]
    pub const fn as_xsd_str(self) -> &'static str {
        match self {
            Self::Integer => "xsd:integer",
            Self::Decimal => "xsd:decimal",
            Self::Double => "xsd:double",
            Self::Float => "xsd:float",
        }
    }

    /// True for the two declared types that route through `f64`.
    #[must_use]
    pub const fn is_floating(self) -> bool {
        matches!(self, Self::Double | Self::Float)
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_xsd_str())
    }
}

impl FromStr for DeclaredType {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "xsd:integer" | "http://www.w3.org/2001/XMLSchema#integer" => Ok(Self::Integer),
            "xsd:decimal" | "http://www.w3.org/2001/XMLSchema#decimal" => Ok(Self::Decimal),
            "xsd:double" | "http://www.w3.org/2001/XMLSchema#double" => Ok(Self::Double),
            "xsd:float" | "http://www.w3.org/2001/XMLSchema#float" => Ok(Self::Float),
            other => Err(NumericError::type_mismatch(
                "xsd:integer|xsd:decimal|xsd:double|xsd:float",
                other,
            )),
        }
    }
}
