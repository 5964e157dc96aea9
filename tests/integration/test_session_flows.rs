//! Integration tests for the visualizer session
//!
//! Drive the session the way the GUI does, through `SessionEvent`s, and check
//! the highlights and expansion it exposes afterwards.

use osi_journey::catalog;
use osi_journey::models::{LayerId, StepId};
use osi_journey::{ActivationRules, LengthUnit, SessionEvent, VisualizerSession};

fn steps(session: &VisualizerSession) -> Vec<u8> {
    session.activation().steps().iter().map(|s| s.get()).collect()
}

fn layers(session: &VisualizerSession) -> Vec<u8> {
    session.activation().layers().iter().map(|l| l.get()).collect()
}

fn type_text(session: &mut VisualizerSession, text: &str) {
    let mut typed = String::new();
    for ch in text.chars() {
        typed.push(ch);
        session.handle(SessionEvent::InputChanged(typed.clone()));
    }
}

#[test]
fn test_typing_lights_up_progressively() {
    let mut session = VisualizerSession::default();
    let mut typed = String::new();
    let expected_step_counts = [1, 1, 2, 2, 3, 3, 4, 4];

    for (ch, expected) in "examplec".chars().zip(expected_step_counts) {
        typed.push(ch);
        session.handle(SessionEvent::InputChanged(typed.clone()));
        assert_eq!(
            session.activation().steps().len(),
            expected,
            "after typing {:?}",
            typed
        );
    }
    assert_eq!(layers(&session), vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn test_full_address_activates_everything() {
    let mut session = VisualizerSession::default();
    type_text(&mut session, "example.com");

    assert_eq!(steps(&session), vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(layers(&session), vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn test_short_address_with_dot() {
    let mut session = VisualizerSession::default();
    session.handle(SessionEvent::InputChanged("a.b".to_string()));

    assert_eq!(steps(&session), vec![1, 2, 5, 6, 7]);
    assert_eq!(layers(&session), vec![1, 2]);
}

#[test]
fn test_deleting_text_turns_highlights_off() {
    let mut session = VisualizerSession::default();
    type_text(&mut session, "example.com");

    session.handle(SessionEvent::InputChanged("exam".to_string()));
    assert_eq!(steps(&session), vec![1, 2]);
    assert_eq!(layers(&session), vec![1, 2]);
    assert!(!session.activation().is_layer_active(LayerId(7)));
}

#[test]
fn test_expand_and_collapse_a_step() {
    let mut session = VisualizerSession::default();
    type_text(&mut session, "example.com");

    session.handle(SessionEvent::StepClicked(StepId(4)));
    assert_eq!(session.expanded(), Some(StepId(4)));
    let ids: Vec<&str> = session.expanded_sub_steps().iter().map(|s| s.id).collect();
    assert_eq!(ids, vec!["4a", "4b", "4c", "4d", "4e"]);

    session.handle(SessionEvent::StepClicked(StepId(4)));
    assert_eq!(session.expanded(), None);
    assert!(session.expanded_sub_steps().is_empty());
}

#[test]
fn test_clicking_another_step_switches_expansion() {
    let mut session = VisualizerSession::default();
    session.handle(SessionEvent::InputChanged("example.com".to_string()));

    session.handle(SessionEvent::StepClicked(StepId(1)));
    session.handle(SessionEvent::StepClicked(StepId(6)));
    assert_eq!(session.expanded(), Some(StepId(6)));
    assert_eq!(session.expanded_sub_steps(), catalog::sub_steps(StepId(6)));
}

#[test]
fn test_clearing_input_collapses_expansion() {
    let mut session = VisualizerSession::default();
    session.handle(SessionEvent::InputChanged("example.com".to_string()));
    session.handle(SessionEvent::StepClicked(StepId(3)));

    session.handle(SessionEvent::InputChanged(String::new()));
    assert_eq!(session.expanded(), None);
    assert!(session.activation().is_empty());
}

#[test]
fn test_editing_keeps_expansion_while_non_empty() {
    let mut session = VisualizerSession::default();
    session.handle(SessionEvent::InputChanged("example.com".to_string()));
    session.handle(SessionEvent::StepClicked(StepId(7)));

    // Step 7 is no longer highlighted but stays expanded
    session.handle(SessionEvent::InputChanged("ex".to_string()));
    assert!(!session.activation().is_step_active(StepId(7)));
    assert_eq!(session.expanded(), Some(StepId(7)));
}

#[test]
fn test_inactive_step_can_be_expanded() {
    let mut session = VisualizerSession::default();
    session.handle(SessionEvent::StepClicked(StepId(5)));

    assert!(session.activation().is_empty());
    assert_eq!(session.expanded(), Some(StepId(5)));
    assert_eq!(session.expanded_sub_steps().len(), 2);
}

#[test]
fn test_unknown_step_expands_without_sub_steps() {
    let mut session = VisualizerSession::default();
    session.handle(SessionEvent::StepClicked(StepId(42)));

    assert_eq!(session.expanded(), Some(StepId(42)));
    assert!(session.expanded_sub_steps().is_empty());
}

#[test]
fn test_utf16_rules_count_astral_characters_twice() {
    let mut session = VisualizerSession::new(ActivationRules::new(LengthUnit::Utf16));
    session.handle(SessionEvent::InputChanged("🦀🦀".to_string()));
    assert_eq!(steps(&session), vec![1, 2]);

    session.set_rules(ActivationRules::new(LengthUnit::Chars));
    assert_eq!(steps(&session), vec![1]);
}
