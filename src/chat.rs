use crate::constants::{ASSISTANT_AVATAR, VISITOR_AVATAR};

/// Someone who can say things in the chatbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Speaker {
    pub name: &'static str,
    /// A CSS color name
    pub color: &'static str,
    pub avatar: Option<&'static str>,
}

pub const VISITOR: Speaker = Speaker {
    name: "You",
    color: "blue",
    avatar: Some(VISITOR_AVATAR),
};

pub const ASSISTANT: Speaker = Speaker {
    name: "Virtual Assistant",
    color: "red",
    avatar: Some(ASSISTANT_AVATAR),
};

/// Represents a chat message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: String,
}

impl ChatMessage {
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
        }
    }
}
