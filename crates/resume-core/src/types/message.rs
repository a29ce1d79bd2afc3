//! Message types for LLM interactions.

use serde::{Deserialize, Serialize};

/// Role of a message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    #[default]
    User,
    Assistant,
}

/// A message in a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    /// Create a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    /// Create a new assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }

    /// Create a new system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }
}

/// Split a conversation into its system instruction and the remaining turns.
///
/// Multiple system messages are joined with a blank line.
pub fn split_system(messages: &[Message]) -> (Option<String>, Vec<&Message>) {
    let system: Vec<&str> = messages
        .iter()
        .filter(|m| m.role == MessageRole::System)
        .map(|m| m.content.as_str())
        .collect();

    let turns = messages
        .iter()
        .filter(|m| m.role != MessageRole::System)
        .collect();

    let system = if system.is_empty() {
        None
    } else {
        Some(system.join("\n\n"))
    };

    (system, turns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_system() {
        let messages = vec![
            Message::system("extract"),
            Message::user("resume text"),
        ];
        let (system, turns) = split_system(&messages);
        assert_eq!(system.as_deref(), Some("extract"));
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].role, MessageRole::User);
    }

    #[test]
    fn test_split_system_absent() {
        let messages = vec![Message::user("hi"), Message::assistant("hello")];
        let (system, turns) = split_system(&messages);
        assert!(system.is_none());
        assert_eq!(turns.len(), 2);
    }
}
