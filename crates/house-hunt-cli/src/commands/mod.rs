pub mod appreciation;
pub mod comparison;
pub mod listings;
pub mod mortgage;

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use house_hunt_core::types::with_metadata;

/// Wrap a bare computation result in the standard envelope.
pub(crate) fn envelope<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    elapsed_us: u64,
    result: T,
) -> Result<Value, Box<dyn std::error::Error>> {
    let output = with_metadata(methodology, assumptions, Vec::new(), elapsed_us, result);
    Ok(serde_json::to_value(output)?)
}

/// Keep every `step`-th entry of a monthly series (always keeping month 0).
pub(crate) fn sample_every<T: Clone>(values: &[T], step: usize) -> Vec<T> {
    values.iter().step_by(step.max(1)).cloned().collect()
}

/// Parse `ID=PCT` into a listing id and a percentage.
pub(crate) fn parse_down_pct(s: &str) -> Result<(String, Decimal), String> {
    let (id, pct) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected ID=PCT, got '{s}'"))?;
    let pct: Decimal = pct
        .trim()
        .trim_end_matches('%')
        .parse()
        .map_err(|e| format!("invalid percentage in '{s}': {e}"))?;
    Ok((id.trim().to_string(), pct))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_down_pct() {
        let (id, pct) = parse_down_pct("906 Bergen St 1A=0").unwrap();
        assert_eq!(id, "906 Bergen St 1A");
        assert_eq!(pct, dec!(0));
        let (_, pct) = parse_down_pct("A=12.5%").unwrap();
        assert_eq!(pct, dec!(12.5));
        assert!(parse_down_pct("no-separator").is_err());
        assert!(parse_down_pct("A=lots").is_err());
    }

    #[test]
    fn test_sample_every_keeps_first_and_yearly() {
        let months: Vec<u32> = (0..=24).collect();
        assert_eq!(sample_every(&months, 12), vec![0, 12, 24]);
    }
}
