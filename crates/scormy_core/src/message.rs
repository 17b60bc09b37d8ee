#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    Bot,
    User,
}

/// One transcript entry. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    text: String,
    origin: Origin,
}

impl Message {
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            origin: Origin::Bot,
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            origin: Origin::User,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn is_bot(&self) -> bool {
        self.origin == Origin::Bot
    }
}
