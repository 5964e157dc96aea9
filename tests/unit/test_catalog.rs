//! Unit tests for the static catalogs

use osi_journey::catalog::{journey_step, journey_steps, osi_layer, osi_layers, sub_steps};
use osi_journey::models::{LayerColor, LayerId, StepIcon, StepId};
use std::collections::HashSet;

#[cfg(test)]
mod journey_step_tests {
    use super::*;

    #[test]
    fn test_categories_and_icons() {
        let expected = [
            ("Physical Input", StepIcon::Keyboard),
            ("Input Processing", StepIcon::Zap),
            ("OS & Browser", StepIcon::Server),
            ("DNS Resolution", StepIcon::Globe),
            ("Network Connection", StepIcon::Network),
            ("CDN & Security", StepIcon::Cloud),
            ("Origin Server", StepIcon::Database),
        ];

        assert_eq!(journey_steps().len(), expected.len());
        for (step, (category, icon)) in journey_steps().iter().zip(expected) {
            assert_eq!(step.category, category);
            assert_eq!(step.icon, icon);
        }
    }

    #[test]
    fn test_sub_step_counts() {
        let counts: Vec<usize> = journey_steps().iter().map(|s| s.sub_steps.len()).collect();
        assert_eq!(counts, vec![3, 3, 3, 5, 2, 4, 3]);
    }

    #[test]
    fn test_sub_step_ids_are_prefixed_by_step() {
        let mut seen = HashSet::new();
        for step in journey_steps() {
            for (index, sub_step) in step.sub_steps.iter().enumerate() {
                let letter = (b'a' + index as u8) as char;
                assert_eq!(sub_step.id, format!("{}{}", step.id, letter));
                assert!(!sub_step.name.is_empty());
                assert!(!sub_step.description.is_empty());
                assert!(seen.insert(sub_step.id), "duplicate {}", sub_step.id);
            }
        }
    }

    #[test]
    fn test_lookup() {
        let dns = journey_step(StepId(4)).unwrap();
        assert_eq!(dns.category, "DNS Resolution");
        assert_eq!(dns.sub_step("4c").map(|s| s.name), Some("Root NS Query"));
        assert!(dns.sub_step("5a").is_none());

        assert!(journey_step(StepId(0)).is_none());
        assert!(journey_step(StepId(8)).is_none());
    }

    #[test]
    fn test_sub_steps_of_unknown_step_are_empty() {
        assert!(sub_steps(StepId(0)).is_empty());
        assert!(sub_steps(StepId(99)).is_empty());
        assert_eq!(sub_steps(StepId(7)).len(), 3);
    }
}

#[cfg(test)]
mod osi_layer_tests {
    use super::*;

    #[test]
    fn test_layers_top_down() {
        let labels: Vec<String> = osi_layers().iter().map(|l| l.label()).collect();
        assert_eq!(
            labels,
            vec![
                "7. Application",
                "6. Presentation",
                "5. Session",
                "4. Transport",
                "3. Network",
                "2. Data Link",
                "1. Physical",
            ]
        );
    }

    #[test]
    fn test_layer_colors() {
        let colors: Vec<LayerColor> = osi_layers().iter().map(|l| l.color).collect();
        assert_eq!(colors, LayerColor::ALL.to_vec());
    }

    #[test]
    fn test_lookup() {
        assert_eq!(osi_layer(LayerId(4)).map(|l| l.name), Some("Transport"));
        assert!(osi_layer(LayerId(0)).is_none());
        assert!(osi_layer(LayerId(8)).is_none());
    }
}
