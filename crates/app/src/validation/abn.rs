//! Australian Business Number checks.

use crate::validation::FieldErrors;

const WEIGHTS: [i64; 11] = [10, 1, 3, 5, 7, 9, 11, 13, 15, 17, 19];
const MODULUS: i64 = 89;

fn digits(value: &str) -> Option<Vec<i64>> {
    let digits = value
        .chars()
        .filter(|ch| *ch != ' ')
        .map(|ch| ch.to_digit(10).map(i64::from))
        .collect::<Option<Vec<_>>>()?;

    (digits.len() == WEIGHTS.len()).then_some(digits)
}

/// Modulus 89 checksum over the eleven digits, with one subtracted from the first.
#[must_use]
pub fn is_valid_abn(value: &str) -> bool {
    let Some(digits) = digits(value) else {
        return false;
    };

    let sum: i64 = digits
        .iter()
        .zip(WEIGHTS)
        .enumerate()
        .map(|(position, (digit, weight))| {
            let digit = if position == 0 { digit - 1 } else { *digit };
            digit * weight
        })
        .sum();

    sum % MODULUS == 0
}

/// Canonical `XX XXX XXX XXX` grouping.
#[must_use]
pub fn format_abn(value: &str) -> Option<String> {
    digits(value)?;

    let compact: String = value.chars().filter(|ch| *ch != ' ').collect();
    let (head, rest) = compact.split_at(2);
    let (middle, tail) = rest.split_at(3);
    let (third, last) = tail.split_at(3);

    Some(format!("{head} {middle} {third} {last}"))
}

/// Validate the `abn` field, returning it in canonical form.
pub fn validate_abn(errors: &mut FieldErrors, value: Option<&str>) -> Option<String> {
    let Some(abn) = value.map(str::trim).filter(|abn| !abn.is_empty()) else {
        errors.push("abn", value, "ABN is required");
        return None;
    };

    if !is_valid_abn(abn) {
        errors.push("abn", value, "ABN is invalid");
        return None;
    }

    format_abn(abn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_good_abns() {
        assert!(is_valid_abn("60 579 663 101"));
        assert!(is_valid_abn("60579663101"));
        assert!(is_valid_abn("51 824 753 556"));
    }

    #[test]
    fn rejects_bad_checksums() {
        assert!(!is_valid_abn("60 579 663 102"));
        assert!(!is_valid_abn("12345678901"));
    }

    #[test]
    fn rejects_wrong_shapes() {
        assert!(!is_valid_abn(""));
        assert!(!is_valid_abn("6057966310"));
        assert!(!is_valid_abn("605796631011"));
        assert!(!is_valid_abn("60-579-663-101"));
        assert!(!is_valid_abn("6O579663101"));
    }

    #[test]
    fn formats_in_canonical_groups() {
        assert_eq!(
            format_abn("60579663101").as_deref(),
            Some("60 579 663 101")
        );
        assert_eq!(
            format_abn(" 60 5796 63101").as_deref(),
            Some("60 579 663 101")
        );
    }

    #[test]
    fn validate_reports_required_then_invalid() {
        let mut errors = FieldErrors::new();

        assert_eq!(validate_abn(&mut errors, None), None);
        assert_eq!(validate_abn(&mut errors, Some("11111111111")), None);
        assert_eq!(
            validate_abn(&mut errors, Some("60579663101")).as_deref(),
            Some("60 579 663 101")
        );

        let messages: Vec<_> = errors.iter().map(|error| error.msg.as_str()).collect();

        assert_eq!(messages, ["ABN is required", "ABN is invalid"]);
    }
}
