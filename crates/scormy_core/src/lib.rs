//! SCORMy core: pure conversation state machine and view-model helpers.
mod action;
mod effect;
mod error;
mod menu;
mod message;
mod msg;
mod script;
mod state;
mod update;
mod view_model;

pub use action::{Action, ChatOption};
pub use effect::Effect;
pub use error::ScriptError;
pub use menu::MenuId;
pub use message::{Message, Origin};
pub use msg::Msg;
pub use script::{Script, ACKNOWLEDGEMENT, DEFAULT_SCROLL_DELAY_MS, LINKEDIN_URL, RESUME_URL};
pub use state::ChatState;
pub use update::{dispatch, update};
pub use view_model::{ChatViewModel, MessageView, OptionView};
