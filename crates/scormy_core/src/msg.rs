#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User clicked the option at this index of the live option set.
    OptionSelected(usize),
    /// User edited the chat input box.
    DraftChanged(String),
    /// User pressed Enter or clicked Send.
    SendClicked,
    /// User clicked the close button or the reopen affordance.
    CollapseToggled,
}
