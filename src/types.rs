use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn new(role: &str, content: &str) -> Self {
        Self {
            role: role.to_string(),
            content: content.to_string(),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl ChatRequest {
    pub fn new(model: &str, max_tokens: u32, temperature: f32) -> Self {
        Self {
            model: model.to_string(),
            messages: Vec::new(),
            max_tokens,
            temperature,
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
    pub model: String,
    pub usage: Option<Usage>,
}

impl ChatResponse {
    /// Content of the first choice, if the server returned one.
    pub fn reply_text(&self) -> Option<&str> {
        self.choices.first().map(|choice| choice.message.content.as_str())
    }

    pub fn total_tokens(&self) -> Option<u64> {
        self.usage.as_ref().map(|usage| usage.total_tokens)
    }
}

#[derive(Deserialize, Debug)]
pub struct Choice {
    pub message: AssistantMessage,
}

#[derive(Deserialize, Debug)]
pub struct AssistantMessage {
    pub content: String,
}

#[derive(Deserialize, Debug)]
pub struct Usage {
    pub total_tokens: u64,
}
