use serde::{Deserialize, Serialize};

use crate::MenuId;

/// Side effect bound to an option or to a free-text send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Append a bot message and install the options of `next` in the same write.
    AppendBotMessage { text: String, next: MenuId },
    /// Open an external resource in a new browsing context.
    NavigateExternal { url: String },
    /// Scroll the page to a named section once the bot message had time to render.
    ScrollToSection { section: String },
    /// Record a user message, then answer with the canned acknowledgement.
    Reply { text: String },
}

impl Action {
    pub fn say(text: impl Into<String>, next: impl Into<MenuId>) -> Self {
        Action::AppendBotMessage {
            text: text.into(),
            next: next.into(),
        }
    }

    pub fn open(url: impl Into<String>) -> Self {
        Action::NavigateExternal { url: url.into() }
    }

    pub fn scroll_to(section: impl Into<String>) -> Self {
        Action::ScrollToSection {
            section: section.into(),
        }
    }
}

/// One selectable menu entry. Actions run in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatOption {
    pub label: String,
    pub effects: Vec<Action>,
}

impl ChatOption {
    pub fn new(label: impl Into<String>, effects: Vec<Action>) -> Self {
        Self {
            label: label.into(),
            effects,
        }
    }
}
