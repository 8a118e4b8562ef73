use business::domain::recipe::errors::RecipeError;
use business::domain::recipe::model::RecipeResult;

use crate::types::{ChatCompletion, UpstreamChatResponse};

/// Interprets an upstream answer.
///
/// Anything other than 200 is an upstream error carrying the raw body. A 200
/// whose body lacks `choices[0].message.content` is malformed. The recipe text
/// itself is not validated.
pub fn map_response(response: &UpstreamChatResponse) -> Result<RecipeResult, RecipeError> {
    if response.status_code != 200 {
        return Err(RecipeError::Upstream {
            status: response.status_code,
            body: response.body.clone(),
        });
    }

    let completion: ChatCompletion = serde_json::from_str(&response.body)
        .map_err(|e| RecipeError::MalformedResponse(format!("invalid JSON body: {}", e)))?;

    let content = completion
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| RecipeError::MalformedResponse("no choices returned".to_string()))?
        .message
        .content
        .ok_or_else(|| RecipeError::MalformedResponse("message has no content".to_string()))?;

    Ok(RecipeResult::from_content(&content))
}
