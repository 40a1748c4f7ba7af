//! Label text codec.
//!
//! Users edit labels as a single line such as `work; vpn ; prod`. [`parse_labels`] turns that
//! into a label list and [`format_labels`] renders it back.
//!
//! The two are not exact inverses: `format_labels` neither escapes nor trims, so a label whose
//! text contains `;` or surrounding whitespace does not survive a round trip.

use crate::{
    account::Label,
    constants::{LABEL_DELIMITER, LABEL_SEPARATOR, MAX_LABEL_LEN},
};

/// Parses `;`-delimited label text.
///
/// Each piece is trimmed, empty pieces are skipped, and the rest are truncated to
/// [`MAX_LABEL_LEN`] characters. Never fails.
pub fn parse_labels(input: &str) -> Vec<Label> {
    input
        .split(LABEL_DELIMITER)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(|piece| Label::new(piece.chars().take(MAX_LABEL_LEN).collect::<String>()))
        .collect()
}

/// Joins label texts with `"; "`.
pub fn format_labels(labels: &[Label]) -> String {
    labels
        .iter()
        .map(|label| label.text.as_str())
        .collect::<Vec<_>>()
        .join(LABEL_SEPARATOR)
}
