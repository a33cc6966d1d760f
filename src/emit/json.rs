use crate::error::NumericResult;
use crate::project::WireForm;

/// Assemble the JSON number token for `wire` directly into `out`.
pub(super) fn write_number(wire: &WireForm, out: &mut String) -> NumericResult<()> {
    match wire {
        WireForm::Int { negative, digits } => {
            if *negative {
                out.push('-');
            }
            out.push_str(digits);
        }
        WireForm::Dec {
            negative,
            int_part,
            frac_part,
        } => {
            if *negative {
                out.push('-');
            }
            out.push_str(int_part);
            if !frac_part.is_empty() {
                out.push('.');
                out.push_str(frac_part);
            }
        }
        WireForm::Double(d) => {
            // The only admissible float egress: `f64`'s own `Display` already
            // produces the shortest round-trip decimal (no re-parse, no
            // reformatting through a second number parser).
            use std::fmt::Write as _;
            write!(out, "{d}").expect("writing to a String cannot fail");
        }
    }
    Ok(())
}
