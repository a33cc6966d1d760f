//! Emitter: writes a [`WireForm`] into a byte buffer as a JSON number token.
//!
//! This module is format-level only: a thin facade here, the actual byte
//! assembly in [`json`]. No database-layer policy, no size limits, callers
//! that need those pass them in explicitly.
mod json;

#[cfg(test)]
mod tests;

use crate::error::NumericResult;
use crate::project::WireForm;

/// Emit `wire` as a JSON number token into `out`.
///
/// The byte sequence is assembled digit-by-digit straight from the
/// `WireForm` payload for `Int`/`Dec`; only `Double` goes through a formatter,
/// and that formatter (`f64`'s `Display`) is the one place the contract
/// permits touching binary-floating representation, because the value is
/// already the float it claims to be.
pub fn emit(wire: &WireForm, out: &mut String) -> NumericResult<()> {
    json::write_number(wire, out)
}

/// Convenience wrapper returning a freshly allocated `String`.
pub fn emit_to_string(wire: &WireForm) -> NumericResult<String> {
    let mut out = String::new();
    emit(wire, &mut out)?;
    Ok(out)
}
