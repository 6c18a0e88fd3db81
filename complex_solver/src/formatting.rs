//! Number formatting for solver output.
//!
//! One rule is used for every rendered float so output is identical on all
//! targets and every finite value re-parses to itself:
//!
//! - `NaN`, `Inf`, `-Inf` for non-finite values
//! - whole numbers below 1e15 get a `.0` suffix (`1.0`, `-2.0`)
//! - everything else uses the shortest round-trip decimal, never exponent
//!   notation

/// Format a float with a `.0` suffix for whole numbers
#[inline]
pub fn format_float(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Inf" } else { "-Inf" }.to_string();
    }

    if x.fract() == 0.0 && x.abs() < 1e15 {
        format!("{}.0", x as i64)
    } else {
        x.to_string()
    }
}
