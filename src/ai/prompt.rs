//! Prompt construction for transcript summarization.

use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};

/// System instruction that pins the summary schema. The model must
/// answer with parseable JSON only, using "N/A" for anything it cannot
/// determine from the transcript.
const SUMMARY_SYSTEM_PROMPT: &str = r#"You are a helpful assistant that summarizes the conversation transcript and provides the following details in JSON format:
{
    "ai_summary": <string[max:1000]>,
    "requirements": <string[max:1500]>,
    "requirement_summary": <string[max:100]>,
    "notes": <string[max:1000]>,
    "suggestions": <string[max:1000]>,
    "client_name": <string[max:100]>,
    "client_email": <string[max:100]>,
    "client_phone": <string[max:100]>,
}
Fill N/A for any missing fields."#;

/// Build the system/user message pair for one serialized transcript.
#[must_use]
pub fn build_summary_prompt(transcript_json: &str) -> Vec<ChatCompletionMessage> {
    vec![
        ChatCompletionMessage {
            role: MessageRole::system,
            content: Content::Text(SUMMARY_SYSTEM_PROMPT.to_string()),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
        ChatCompletionMessage {
            role: MessageRole::user,
            content: Content::Text(format!(
                "Here is the conversation transcript:\n{transcript_json}\n\n\
                 Please summarize the conversation and provide the required details in JSON format. \
                 Make sure to provide valid, parseable JSON without any explanation text."
            )),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
    ]
}
