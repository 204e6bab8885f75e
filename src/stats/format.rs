use crate::domain::StatCode;
use crate::error::StatError;

/// One fractional digit, e.g. `25.5`
pub fn fixed1(stat: StatCode, value: f64) -> Result<String, StatError> {
    if !value.is_finite() {
        return Err(StatError::NonFiniteValue { stat });
    }
    Ok(format!("{:.1}", value))
}

/// Fraction in [0, 1] rendered as a percentage, e.g. `0.452` -> `45.2%`
pub fn percent1(stat: StatCode, fraction: f64) -> Result<String, StatError> {
    let pct = fraction * 100.0;
    if !pct.is_finite() {
        return Err(StatError::NonFiniteValue { stat });
    }
    Ok(format!("{:.1}%", pct))
}

/// Format an already per-game value according to the stat's kind.
pub fn display_value(stat: StatCode, value: f64) -> Result<String, StatError> {
    if stat.is_percentage() {
        percent1(stat, value)
    } else {
        fixed1(stat, value)
    }
}
