//! Plain-text export of signals for the clipboard.
//!
//! One signal per line as `<time> - <asset> - <direction>`; a batch joins
//! lines with `\n` in sequence order, without a trailing newline.

use crate::domain::Signal;

/// Separator between the three fields of a line.
pub const FIELD_SEPARATOR: &str = " - ";

/// Format a single signal.
pub fn format_line(signal: &Signal) -> String {
    format!(
        "{}{sep}{}{sep}{}",
        signal.time(),
        signal.asset,
        signal.direction,
        sep = FIELD_SEPARATOR
    )
}

/// Format a whole batch. Empty input yields an empty string.
pub fn format_batch(signals: &[Signal]) -> String {
    signals
        .iter()
        .map(format_line)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Asset, Direction, GenerationRequest};
    use crate::generator::generate_with;
    use crate::rng::SeedPolicy;
    use chrono::NaiveDate;

    fn batch(count: usize) -> Vec<Signal> {
        let now = NaiveDate::from_ymd_opt(2024, 6, 3)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let mut rng = SeedPolicy::Fixed(11).build();
        generate_with(&mut rng, &GenerationRequest::new(count, Asset::UsdMxnOtc), now)
    }

    #[test]
    fn line_layout() {
        let signals = batch(1);
        let s = &signals[0];
        let expected = format!("08:05 - USD/MXN-OTC NEXTGEN - {}", s.direction);
        assert_eq!(format_line(s), expected);
        assert!(matches!(s.direction, Direction::Call | Direction::Put));
    }

    #[test]
    fn batch_joins_lines_in_order() {
        let signals = batch(3);
        let text = format_batch(&signals);
        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("08:05 - "));
        assert!(lines[1].starts_with("08:10 - "));
        assert!(lines[2].starts_with("08:15 - "));
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn empty_batch_is_empty_string() {
        assert_eq!(format_batch(&[]), "");
    }

    #[test]
    fn formatting_is_idempotent() {
        let signals = batch(12);
        assert_eq!(format_batch(&signals), format_batch(&signals));
    }
}
