use crate::Origin;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatViewModel {
    pub collapsed: bool,
    pub messages: Vec<MessageView>,
    pub options: Vec<OptionView>,
    pub draft: String,
    pub can_send: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageView {
    pub text: String,
    pub origin: Origin,
    /// Render character by character. Presentation only.
    pub progressive_reveal: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub index: usize,
    pub label: String,
}
