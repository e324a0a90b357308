use std::fmt::Debug;

/// Prints the `Validating:` diagnostic for `value` and reports whether a
/// value was provided at all. This is a presence check, not a truthiness
/// check: zero, `false`, and an empty sequence are all present.
pub fn validate_input<T: Debug + ?Sized>(value: Option<&T>) -> bool {
    println!("Validating: {}", render(value));
    value.is_some()
}

pub(crate) fn render<T: Debug + ?Sized>(value: Option<&T>) -> String {
    match value {
        Some(v) => format!("{:?}", v),
        None => "None".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_value_is_invalid() {
        assert!(!validate_input(Option::<&[i64]>::None));
    }

    #[test]
    fn test_present_values_are_valid_regardless_of_truthiness() {
        assert!(validate_input(Some(&0)));
        assert!(validate_input(Some(&false)));
        let empty: Vec<i64> = vec![];
        assert!(validate_input(Some(empty.as_slice())));
    }

    #[test]
    fn test_sequence_renders_like_a_plain_list() {
        let numbers = vec![1, 2, 3, -1, 0];
        assert_eq!(render(Some(numbers.as_slice())), "[1, 2, 3, -1, 0]");
    }

    #[test]
    fn test_absent_value_renders_as_none() {
        assert_eq!(render(Option::<&[i64]>::None), "None");
    }
}
