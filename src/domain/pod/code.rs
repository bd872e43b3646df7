//! Pod code factory

use crate::domain::DomainResult;
use crate::shared::errors::DomainError;

/// Width of the zero-padded sequence part of a pod code.
pub const SEQUENCE_WIDTH: usize = 5;

/// Build a pod code from a type prefix, deck number and the pod's sequence on
/// that deck: `prefix + deck + sequence padded to five digits`.
///
/// ```
/// use nova_gate::domain::pod::make_pod_code;
/// assert_eq!(make_pod_code("S", 1, 1).unwrap(), "S100001");
/// ```
pub fn make_pod_code(prefix: &str, deck: u32, sequence: u32) -> DomainResult<String> {
    if prefix.is_empty() {
        return Err(DomainError::InvalidCodeInput(
            "the prefix for the pod code is missing".to_string(),
        ));
    }
    if deck == 0 {
        return Err(DomainError::InvalidCodeInput(
            "the deck for the pod code must be positive".to_string(),
        ));
    }
    if sequence == 0 {
        return Err(DomainError::InvalidCodeInput(
            "the sequence for the pod code must be positive".to_string(),
        ));
    }

    Ok(format_pod_code(prefix, deck, sequence))
}

/// Unchecked formatting behind [`make_pod_code`]. This is the layout
/// generator's entry point: its deck numbers and indexes start at 1.
pub(crate) fn format_pod_code(prefix: &str, deck: u32, sequence: u32) -> String {
    format!("{prefix}{deck}{sequence:0width$}", width = SEQUENCE_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_prefix_deck_and_padded_sequence() {
        assert_eq!(make_pod_code("S", 1, 1).unwrap(), "S100001");
        assert_eq!(make_pod_code("E", 4, 17).unwrap(), "E400017");
        assert_eq!(make_pod_code("P", 12, 10).unwrap(), "P1200010");
    }

    #[test]
    fn rejects_invalid_input() {
        assert!(matches!(
            make_pod_code("", 1, 1),
            Err(DomainError::InvalidCodeInput(_))
        ));
        assert!(matches!(
            make_pod_code("S", 0, 1),
            Err(DomainError::InvalidCodeInput(_))
        ));
        assert!(matches!(
            make_pod_code("S", 1, 0),
            Err(DomainError::InvalidCodeInput(_))
        ));
    }
}
