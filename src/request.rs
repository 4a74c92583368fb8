//! Request and response types for the chat-completions call

use serde::{Deserialize, Serialize};

pub const PROBE_MODEL: &str = "llama3-70b-8192";
pub const PROBE_SYSTEM_PROMPT: &str
  = "You are a helpful file manager assistant.";
pub const PROBE_USER_PROMPT: &str
  = "How do I organize files efficiently?";
pub const PROBE_MAX_TOKENS: u32 = 200;
pub const PROBE_TEMPERATURE: f64 = 0.7;

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role
{   System
  , User
  , Assistant
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage
{   pub role: Role
  , pub content: String
}

impl ChatMessage
{   pub fn new(role: Role, content: impl Into<String>) -> Self
    {   ChatMessage
        {   role
          , content: content.into()
        }
    }
}

/// Body of the chat-completions POST
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest
{   pub model: String
  , pub messages: Vec<ChatMessage>
  , pub max_tokens: u32
  , pub temperature: f64
}

impl ChatRequest
{   /// The fixed request this program sends
    pub fn probe() -> Self
    {   ChatRequest
        {   model: PROBE_MODEL.to_string()
          , messages: vec![
              ChatMessage::new(Role::System, PROBE_SYSTEM_PROMPT)
            , ChatMessage::new(Role::User, PROBE_USER_PROMPT)
            ]
          , max_tokens: PROBE_MAX_TOKENS
          , temperature: PROBE_TEMPERATURE
        }
    }
}

/// Message inside a response choice. Only `content` is required.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResponseMessage
{   pub content: String
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Choice
{   pub message: ResponseMessage
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Usage
{   #[serde(default)]
    pub total_tokens: Option<u64>
}

/// Parsed 200 body
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatResponse
{   pub choices: Vec<Choice>
  , pub model: String
  , #[serde(default)]
    pub usage: Option<Usage>
}

impl ChatResponse
{   /// Text of the first choice
    pub fn first_content(&self)
      -> Result<&str, crate::error::Error>
    {   self.choices.first()
          .map(|c| c.message.content.as_str())
          .ok_or(crate::error::Error::NoChoicesInResponse)
    }

    pub fn total_tokens(&self) -> Option<u64>
    {   self.usage.as_ref().and_then(|u| u.total_tokens)
    }
}

/// Result of the single call
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome
{   /// Status 200 with a parsed body
    Success(ChatResponse)
  , /// Any other status, body kept verbatim
    Failure
    {   status: u16
      , body: String
    }
}
