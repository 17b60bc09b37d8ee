use scormy_logging::{chat_debug, chat_warn};

use crate::{Action, ChatState, Effect, Message, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ChatState, msg: Msg) -> (ChatState, Vec<Effect>) {
    let effects = match msg {
        Msg::OptionSelected(index) => {
            if state.is_collapsed() {
                chat_debug!("option #{} ignored while collapsed", index);
                return (state, Vec::new());
            }
            let Some(option) = state.options().get(index).cloned() else {
                chat_warn!(
                    "option #{} is not live in menu `{}` ({} options)",
                    index,
                    state.current_menu(),
                    state.options().len()
                );
                return (state, Vec::new());
            };
            chat_debug!(
                "option selected menu=`{}` label={:?}",
                state.current_menu(),
                option.label
            );
            dispatch(&mut state, &option.effects)
        }
        Msg::DraftChanged(text) => {
            if state.is_collapsed() {
                return (state, Vec::new());
            }
            state.set_draft(text);
            Vec::new()
        }
        Msg::SendClicked => {
            if state.is_collapsed() || state.draft().trim().is_empty() {
                chat_debug!("send ignored: empty draft or collapsed widget");
                return (state, Vec::new());
            }
            let text = state.take_draft();
            dispatch(&mut state, &[Action::Reply { text }])
        }
        Msg::CollapseToggled => {
            state.toggle_collapsed();
            chat_debug!("widget collapsed={}", state.is_collapsed());
            if state.is_collapsed() {
                vec![Effect::CancelDeferred]
            } else {
                Vec::new()
            }
        }
    };

    (state, effects)
}

/// Interprets actions in order against the state, collecting shell effects.
pub fn dispatch(state: &mut ChatState, actions: &[Action]) -> Vec<Effect> {
    let mut effects = Vec::new();
    for action in actions {
        match action {
            Action::AppendBotMessage { text, next } => {
                chat_debug!("bot says {:?}, next menu `{}`", text, next);
                state.append_bot_message(text.clone(), next.clone());
            }
            Action::NavigateExternal { url } => {
                effects.push(Effect::OpenExternal { url: url.clone() });
            }
            Action::ScrollToSection { section } => {
                effects.push(Effect::ScrollToSection {
                    section: section.clone(),
                    delay: state.script().scroll_delay(),
                });
            }
            Action::Reply { text } => {
                let acknowledgement = state.script().acknowledgement.clone();
                state.push_message(Message::user(text.clone()));
                state.push_message(Message::bot(acknowledgement));
            }
        }
    }
    effects
}
