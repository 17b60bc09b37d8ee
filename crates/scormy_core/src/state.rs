use std::sync::Arc;

use crate::view_model::{ChatViewModel, MessageView, OptionView};
use crate::{ChatOption, MenuId, Message, Script};

/// Conversation state of one widget instance. Created on mount, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatState {
    script: Arc<Script>,
    transcript: Vec<Message>,
    menu: MenuId,
    options: Vec<ChatOption>,
    draft: String,
    collapsed: bool,
    dirty: bool,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatState {
    pub fn new() -> Self {
        Self::with_script(Arc::new(Script::portfolio()))
    }

    /// Seeds the transcript with the opening lines and installs the entry menu.
    pub fn with_script(script: Arc<Script>) -> Self {
        let transcript = script.opening.iter().map(Message::bot).collect();
        let menu = script.entry.clone();
        let options = script.options_for(&menu);
        Self {
            script,
            transcript,
            menu,
            options,
            draft: String::new(),
            collapsed: false,
            dirty: true,
        }
    }

    pub fn script(&self) -> &Script {
        &self.script
    }

    /// Shared handle to the script, for building a sibling state cheaply.
    pub fn script_arc(&self) -> Arc<Script> {
        Arc::clone(&self.script)
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn options(&self) -> &[ChatOption] {
        &self.options
    }

    pub fn current_menu(&self) -> &MenuId {
        &self.menu
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn view(&self) -> ChatViewModel {
        let messages = self
            .transcript
            .iter()
            .enumerate()
            .map(|(index, message)| MessageView {
                text: message.text().to_string(),
                origin: message.origin(),
                progressive_reveal: index == 0 && message.is_bot(),
            })
            .collect();
        let options = self
            .options
            .iter()
            .enumerate()
            .map(|(index, option)| OptionView {
                index,
                label: option.label.clone(),
            })
            .collect();

        ChatViewModel {
            collapsed: self.collapsed,
            messages,
            options,
            draft: self.draft.clone(),
            can_send: !self.draft.trim().is_empty(),
        }
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Appends a bot message and installs the options of `next` in one write.
    pub(crate) fn append_bot_message(&mut self, text: String, next: MenuId) {
        let options = self.script.options_for(&next);
        self.transcript.push(Message::bot(text));
        self.menu = next;
        self.options = options;
        self.dirty = true;
    }

    pub(crate) fn push_message(&mut self, message: Message) {
        self.transcript.push(message);
        self.dirty = true;
    }

    pub(crate) fn set_draft(&mut self, text: String) {
        if self.draft != text {
            self.draft = text;
            self.dirty = true;
        }
    }

    pub(crate) fn take_draft(&mut self) -> String {
        self.dirty = true;
        std::mem::take(&mut self.draft)
    }

    pub(crate) fn toggle_collapsed(&mut self) {
        self.collapsed = !self.collapsed;
        self.dirty = true;
    }
}
