use axum::{body::Bytes, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::openai::{ChatCompletionRequest, ChatMessage, COMPLETION_MODEL};
use crate::state::AppState;

/// Instruction sent to the completion API; `${characters}` is replaced with
/// the caller's input before sending. The example format doubles as the
/// schema the reply is parsed against.
const PROMPT_TEMPLATE: &str = r#"For the Chinese characters "${characters}", provide:
1. The pinyin (with tone marks)
2. A detailed breakdown of definitions by part of speech (verb, noun, adjective, etc.)
Format the response as JSON only, no other text.
Example format:
{
    "pinyin": "nǐ hǎo",
    "definitions": [
        {
            "type": "greeting",
            "meanings": ["hello", "hi"]
        }
    ]
}"#;

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub characters: String,
}

/// One grammatical category and its glosses, e.g. "verb" → ["to love"].
#[derive(Debug, Serialize, Deserialize)]
pub struct Definition {
    pub r#type: String,
    pub meanings: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslationResponse {
    pub characters: String,
    pub pinyin: String,
    pub definitions: Vec<Definition>,
}

/// What the model is asked to produce: everything except `characters`,
/// which is always echoed from the request rather than trusted from the
/// model's output.
#[derive(Debug, Deserialize)]
struct CompletionPayload {
    pinyin: String,
    definitions: Vec<Definition>,
}

/// POST /translate
///
/// Straight-line sequence: parse the body, build the prompt, call the
/// completion API once, parse its text as JSON, respond. Each failure stage
/// has a single exit via [`ApiError`]; nothing is retried. Dropping the
/// inbound request drops the in-flight completion call with it.
pub async fn translate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TranslationResponse>, ApiError> {
    let request: TranslationRequest =
        serde_json::from_slice(&body).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    debug!("Translating characters: {}", request.characters);

    let completion_request = ChatCompletionRequest {
        model: COMPLETION_MODEL.to_string(),
        messages: vec![ChatMessage {
            role: "user".to_string(),
            content: build_prompt(&request.characters),
        }],
    };

    let completion = state
        .openai
        .chat_completion(completion_request)
        .await
        .map_err(|e| {
            warn!("Completion call failed: {e:#}");
            ApiError::Upstream(format!("{e:#}"))
        })?;

    let choice = completion
        .choices
        .first()
        .ok_or(ApiError::EmptyCompletion)?;

    let payload: CompletionPayload =
        serde_json::from_str(&choice.message.content).map_err(|e| {
            warn!("Completion content was not the expected JSON: {e}");
            ApiError::ParseFailure
        })?;

    Ok(Json(TranslationResponse {
        characters: request.characters,
        pinyin: payload.pinyin,
        definitions: payload.definitions,
    }))
}

/// Substitute the caller's characters into the prompt template (first
/// placeholder occurrence only).
fn build_prompt(characters: &str) -> String {
    PROMPT_TEMPLATE.replacen("${characters}", characters, 1)
}
