use std::sync::Once;

use pretty_assertions::assert_eq;
use scormy_core::{update, ChatState, Effect, Message, Msg, ACKNOWLEDGEMENT};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(scormy_logging::initialize_for_tests);
}

fn type_and_send(state: ChatState, text: &str) -> (ChatState, Vec<Effect>) {
    let (state, _) = update(state, Msg::DraftChanged(text.to_string()));
    update(state, Msg::SendClicked)
}

#[test]
fn blank_drafts_are_not_sent() {
    init_logging();
    for draft in ["", "   ", "\t\n"] {
        let (mut state, _) = update(ChatState::new(), Msg::DraftChanged(draft.to_string()));
        state.consume_dirty();
        let before = state.clone();

        let (mut next, effects) = update(state, Msg::SendClicked);

        assert_eq!(next, before);
        assert_eq!(next.draft(), draft);
        assert!(effects.is_empty());
        assert!(!next.consume_dirty());
    }
}

#[test]
fn send_appends_user_message_then_acknowledgement() {
    init_logging();
    let initial = ChatState::new();
    let options_before = initial.options().to_vec();

    let (state, effects) = type_and_send(initial, "hello");

    assert!(effects.is_empty());
    assert_eq!(
        &state.transcript()[3..],
        &[Message::user("hello"), Message::bot(ACKNOWLEDGEMENT)]
    );
    assert_eq!(state.draft(), "");
    assert_eq!(state.options(), options_before.as_slice());
}

#[test]
fn send_keeps_raw_untrimmed_text() {
    init_logging();
    let (state, _) = type_and_send(ChatState::new(), "  hi there  ");

    assert_eq!(state.transcript()[3], Message::user("  hi there  "));
}

#[test]
fn draft_is_stored_verbatim() {
    init_logging();
    let long = "x".repeat(10_000);
    let (state, _) = update(ChatState::new(), Msg::DraftChanged(long.clone()));

    assert_eq!(state.draft(), long);
    assert!(state.view().can_send);
}

#[test]
fn send_is_available_after_browsing_ends_the_menu() {
    init_logging();
    let (state, _) = update(ChatState::new(), Msg::OptionSelected(2));
    assert!(state.options().is_empty());

    let (state, _) = type_and_send(state, "Any openings?");
    assert_eq!(state.transcript().len(), 6);
    assert!(state.options().is_empty());
}

#[test]
fn toggle_collapsed_is_its_own_inverse() {
    init_logging();
    let (state, _) = update(ChatState::new(), Msg::DraftChanged("draft".to_string()));
    let (state, _) = update(state, Msg::OptionSelected(0));

    let (collapsed, effects) = update(state.clone(), Msg::CollapseToggled);
    assert!(collapsed.is_collapsed());
    assert_eq!(effects, vec![Effect::CancelDeferred]);

    let (expanded, effects) = update(collapsed, Msg::CollapseToggled);
    assert!(!expanded.is_collapsed());
    assert!(effects.is_empty());
    assert_eq!(expanded.transcript(), state.transcript());
    assert_eq!(expanded.options(), state.options());
    assert_eq!(expanded.draft(), "draft");
}

#[test]
fn collapsed_widget_ignores_interaction() {
    init_logging();
    let (state, _) = update(ChatState::new(), Msg::DraftChanged("hello".to_string()));
    let (collapsed, _) = update(state, Msg::CollapseToggled);
    let before = collapsed.clone();

    let (collapsed, effects) = update(collapsed, Msg::SendClicked);
    assert!(effects.is_empty());
    let (collapsed, effects) = update(collapsed, Msg::OptionSelected(0));
    assert!(effects.is_empty());
    let (collapsed, _) = update(collapsed, Msg::DraftChanged("other".to_string()));

    assert_eq!(collapsed, before);
}
