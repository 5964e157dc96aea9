//! Property-based tests for step expansion and the session

use osi_journey::catalog;
use osi_journey::expansion::{toggle, Expansion};
use osi_journey::models::StepId;
use osi_journey::{SessionEvent, VisualizerSession};
use proptest::prelude::*;

fn step_id() -> impl Strategy<Value = StepId> {
    (1u8..=7).prop_map(StepId)
}

fn event() -> impl Strategy<Value = SessionEvent> {
    prop_oneof![
        "[a-z.]{0,12}".prop_map(SessionEvent::InputChanged),
        step_id().prop_map(SessionEvent::StepClicked),
    ]
}

proptest! {
    #[test]
    fn test_toggle_twice_collapses(id in step_id()) {
        let mut expansion = Expansion::new();
        prop_assert_eq!(expansion.toggle(id), Some(id));
        prop_assert_eq!(expansion.toggle(id), None);
    }

    #[test]
    fn test_clicking_other_step_switches(a in step_id(), b in step_id()) {
        prop_assume!(a != b);
        prop_assert_eq!(toggle(toggle(None, a), b), Some(b));
    }

    #[test]
    fn test_expanded_sub_steps_match_catalog(id in any::<u8>().prop_map(StepId)) {
        let mut expansion = Expansion::new();
        expansion.toggle(id);
        prop_assert_eq!(expansion.sub_steps(), catalog::sub_steps(id));
    }

    #[test]
    fn test_session_activation_tracks_input(events in prop::collection::vec(event(), 0..30)) {
        let mut session = VisualizerSession::default();
        for event in events {
            session.handle(event);
            let expected = osi_journey::activate(session.input());
            prop_assert_eq!(session.activation(), &expected);
            if session.input().is_empty() && session.expanded().is_some() {
                // Only a click after clearing may leave something expanded
                prop_assert!(session.activation().is_empty());
            }
        }
    }

    #[test]
    fn test_clearing_always_collapses(
        input in "[a-z.]{1,12}",
        id in step_id(),
    ) {
        let mut session = VisualizerSession::default();
        session.handle(SessionEvent::InputChanged(input));
        session.handle(SessionEvent::StepClicked(id));
        session.handle(SessionEvent::InputChanged(String::new()));
        prop_assert_eq!(session.expanded(), None);
    }
}
