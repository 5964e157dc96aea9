//! Unit tests for the stage activation table
//!
//! Checks the mapper against hand-computed expectations at every length
//! boundary, with and without a dot.

use osi_journey::activation::{activate, ActivationRules, LengthUnit};
use osi_journey::models::{LayerId, StepId};

fn ids(input: &str) -> (Vec<u8>, Vec<u8>) {
    let activation = activate(input);
    (
        activation.steps().iter().map(|s| s.get()).collect(),
        activation.layers().iter().map(|l| l.get()).collect(),
    )
}

#[cfg(test)]
mod length_threshold_tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(ids(""), (vec![], vec![]));
        assert!(activate("").is_empty());
    }

    #[test]
    fn test_boundaries_without_dot() {
        let table: [(&str, Vec<u8>, Vec<u8>); 8] = [
            ("a", vec![1], vec![1]),
            ("ab", vec![1], vec![1]),
            ("abc", vec![1, 2], vec![1, 2]),
            ("abcd", vec![1, 2], vec![1, 2]),
            ("abcde", vec![1, 2, 3], vec![1, 2, 6, 7]),
            ("abcdef", vec![1, 2, 3], vec![1, 2, 6, 7]),
            ("abcdefg", vec![1, 2, 3, 4], vec![1, 2, 3, 4, 5, 6, 7]),
            ("abcdefghijklmnop", vec![1, 2, 3, 4], vec![1, 2, 3, 4, 5, 6, 7]),
        ];

        for (input, steps, layers) in table {
            assert_eq!(ids(input), (steps, layers), "input {:?}", input);
        }
    }

    #[test]
    fn test_whitespace_counts_toward_length() {
        assert_eq!(ids("   "), (vec![1, 2], vec![1, 2]));
    }
}

#[cfg(test)]
mod dot_tests {
    use super::*;

    #[test]
    fn test_lone_dot() {
        assert_eq!(ids("."), (vec![1, 5, 6, 7], vec![1]));
    }

    #[test]
    fn test_dot_adds_no_layers() {
        let (_, with_dot) = ids("ab.");
        let (_, without_dot) = ids("abc");
        assert_eq!(with_dot, without_dot);
    }

    #[test]
    fn test_full_domain() {
        assert_eq!(
            ids("example.com"),
            (vec![1, 2, 3, 4, 5, 6, 7], vec![1, 2, 3, 4, 5, 6, 7])
        );
    }

    #[test]
    fn test_dot_position_does_not_matter() {
        assert_eq!(ids(".abc"), ids("abc."));
        assert_eq!(ids("a.bc"), ids("abc."));
    }

    #[test]
    fn test_only_ascii_full_stop_counts() {
        // Ideographic and fullwidth full stops are plain characters here
        assert_eq!(ids("a。b"), (vec![1, 2], vec![1, 2]));
        assert_eq!(ids("a．b"), (vec![1, 2], vec![1, 2]));
    }
}

#[cfg(test)]
mod length_unit_tests {
    use super::*;

    #[test]
    fn test_measure() {
        assert_eq!(LengthUnit::Chars.measure("héllo"), 5);
        assert_eq!(LengthUnit::Utf16.measure("héllo"), 5);
        assert_eq!(LengthUnit::Chars.measure("𝄞"), 1);
        assert_eq!(LengthUnit::Utf16.measure("𝄞"), 2);
    }

    #[test]
    fn test_rules_differ_only_on_astral_input() {
        let chars = ActivationRules::new(LengthUnit::Chars);
        let utf16 = ActivationRules::new(LengthUnit::Utf16);

        assert_eq!(chars.activate("hello.world"), utf16.activate("hello.world"));

        let input = "𝄞𝄞𝄞";
        assert!(!chars.activate(input).is_step_active(StepId(3)));
        assert!(utf16.activate(input).is_step_active(StepId(3)));
        assert!(utf16.activate(input).is_layer_active(LayerId(7)));
    }

    #[test]
    fn test_default_rules_match_free_function() {
        let rules = ActivationRules::default();
        assert_eq!(rules.length_unit, LengthUnit::Chars);
        assert_eq!(rules.activate("abc.d"), activate("abc.d"));
    }
}
