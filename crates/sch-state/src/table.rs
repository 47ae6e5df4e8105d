use std::fmt;

use crate::state::QuantumState;

const COLUMN_WIDTH: usize = 20;
const SIGNIFICANT_DIGITS: usize = 3;

/// Renders the state as a three-column table: coordinates, wavefunction,
/// probability. One row per enumerated coordinate tuple; samples missing
/// for a row print as an empty cell.
impl fmt::Display for QuantumState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>w$}{:>w$}{:>w$}",
            "Basis coordinates",
            "Wavefunction",
            "Probability",
            w = COLUMN_WIDTH
        )?;
        for (index, coords) in self.basis().coordinate_rows().enumerate() {
            let coords = coords
                .iter()
                .map(f64::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            let cell = |samples: &[f64]| {
                samples
                    .get(index)
                    .map(|&value| format_significant(value, SIGNIFICANT_DIGITS))
                    .unwrap_or_default()
            };
            writeln!(
                f,
                "{:>w$}{:>w$}{:>w$}",
                coords,
                cell(self.wavefunction()),
                cell(self.probability()),
                w = COLUMN_WIDTH
            )?;
        }
        Ok(())
    }
}

/// Formats `value` with `digits` significant digits, switching to
/// exponent notation for very small or large magnitudes.
///
/// Exponents carry a sign and at least two digits (`1.23e+03`, `1.23e-05`).
pub fn format_significant(value: f64, digits: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return value.to_string();
    }
    let digits = digits.max(1);
    let scientific = format!("{:.*e}", digits - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };
    if exponent < -4 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.unsigned_abs())
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{value:.decimals$}"))
    }
}

fn trim_fraction(raw: &str) -> String {
    if raw.contains('.') {
        raw.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        raw.to_string()
    }
}
