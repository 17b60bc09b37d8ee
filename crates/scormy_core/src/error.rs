use thiserror::Error;

use crate::MenuId;

/// A script that cannot drive the conversation safely.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("entry menu `{0}` is not defined")]
    MissingEntryMenu(MenuId),
    #[error("option #{index} in menu `{menu}` has an empty label")]
    EmptyLabel { menu: MenuId, index: usize },
    #[error("option `{label}` in menu `{menu}` has no actions")]
    NoActions { menu: MenuId, label: String },
    #[error("option `{label}` in menu `{menu}` leads to unknown menu `{target}`")]
    UnknownMenu {
        menu: MenuId,
        label: String,
        target: MenuId,
    },
    #[error("option `{label}` in menu `{menu}` opens invalid url `{url}`: {reason}")]
    InvalidUrl {
        menu: MenuId,
        label: String,
        url: String,
        reason: String,
    },
    #[error("option `{label}` in menu `{menu}` scrolls to an empty section id")]
    EmptySection { menu: MenuId, label: String },
}
