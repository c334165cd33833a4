//! Wire types for the chat-completion API.

use serde::{Deserialize, Serialize};

/// Model identifier sent with every request.
pub const MODEL: &str = "gpt-4";

/// One entry of the `messages` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for `POST /chat/completions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

/// Build the two-message request: the diff first, then the instruction.
///
/// The model reads the change before it is told what to do with it, so the
/// order is fixed regardless of mode.
pub fn build_request(diff: &str, instruction: &str) -> CompletionRequest {
    CompletionRequest {
        model: MODEL.to_string(),
        messages: vec![ChatMessage::user(diff), ChatMessage::user(instruction)],
    }
}

/// Response body; only the parts we read.
#[derive(Debug, Deserialize)]
pub(crate) struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Choice {
    pub message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponseMessage {
    pub content: Option<String>,
}

impl CompletionResponse {
    /// Content of the first choice, if the provider sent any.
    pub fn into_first_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_request_orders_diff_before_instruction() {
        let request = build_request("diff --git a/f b/f\n+x\n", "write a message");
        assert_eq!(request.model, MODEL);
        assert_eq!(
            request.messages,
            vec![
                ChatMessage::user("diff --git a/f b/f\n+x\n"),
                ChatMessage::user("write a message"),
            ]
        );
    }

    #[test]
    fn test_build_request_keeps_empty_instruction() {
        let request = build_request("+x\n", "");
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[1].content, "");
    }

    #[test]
    fn test_request_serializes_to_chat_shape() {
        let value = serde_json::to_value(build_request("D", "P")).unwrap();
        assert_eq!(
            value,
            json!({
                "model": "gpt-4",
                "messages": [
                    {"role": "user", "content": "D"},
                    {"role": "user", "content": "P"}
                ]
            })
        );
    }

    #[test]
    fn test_first_content_picks_first_choice() {
        let response: CompletionResponse = serde_json::from_value(json!({
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "feat: add x"}},
                {"index": 1, "message": {"role": "assistant", "content": "fix: other"}}
            ]
        }))
        .unwrap();
        assert_eq!(response.into_first_content().as_deref(), Some("feat: add x"));
    }

    #[test]
    fn test_first_content_absent_cases() {
        let no_choices: CompletionResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(no_choices.into_first_content(), None);

        let null_content: CompletionResponse = serde_json::from_value(json!({
            "choices": [{"message": {"role": "assistant", "content": null}}]
        }))
        .unwrap();
        assert_eq!(null_content.into_first_content(), None);

        let no_message: CompletionResponse =
            serde_json::from_value(json!({"choices": [{"finish_reason": "length"}]})).unwrap();
        assert_eq!(no_message.into_first_content(), None);
    }
}
