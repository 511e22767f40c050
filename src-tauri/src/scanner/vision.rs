//! Vision API call and reply parsing for product photos.

use std::time::Duration;

use tracing::{error, info};

use super::prompts::build_scan_prompt;
use super::types::ScanResult;

const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Analyze a prepared (base64 JPEG) product photo with the vision model.
///
/// Sends the photo with the fixed analysis instruction, extracts the first
/// top-level JSON object from the reply, and maps it to a [`ScanResult`].
///
/// # Errors
/// Returns descriptive errors for network timeouts (60s), non-2xx
/// responses, empty reply content, a reply with no JSON object, and
/// replies missing the product name. The command layer converts every
/// error into the placeholder result.
pub async fn analyze_product(
    image_base64: &str,
    model: &str,
    api_key: &str,
) -> Result<ScanResult, String> {
    let reply = call_vision_api(image_base64, model, api_key).await?;

    if reply.trim().is_empty() {
        let msg = "Empty content in vision API reply".to_string();
        error!("{}", msg);
        return Err(msg);
    }

    let span = extract_json_object(&reply).ok_or_else(|| {
        let msg = format!(
            "No JSON object in vision reply (first 200 chars): {}",
            &reply[..reply.len().min(200)]
        );
        error!("{}", msg);
        msg
    })?;

    let json: serde_json::Value = serde_json::from_str(span)
        .map_err(|e| format!("Failed to parse vision reply as JSON: {}", e))?;

    let result = map_reply_to_result(&json)?;
    info!("Identified product '{}' by '{}'", result.name, result.brand);
    Ok(result)
}

/// POST the photo and instruction to the vision endpoint and return the
/// reply text from `choices[0].message.content`.
async fn call_vision_api(
    image_base64: &str,
    model: &str,
    api_key: &str,
) -> Result<String, String> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(60))
        .build()
        .map_err(|e| format!("Failed to build HTTP client: {}", e))?;

    let body = serde_json::json!({
        "model": model,
        "max_tokens": 1000,
        "messages": [
            {
                "role": "user",
                "content": [
                    {"type": "text", "text": build_scan_prompt()},
                    {
                        "type": "image_url",
                        "image_url": {
                            "url": format!("data:image/jpeg;base64,{}", image_base64)
                        }
                    }
                ]
            }
        ]
    });

    let response = client
        .post(OPENAI_CHAT_URL)
        .header("Authorization", format!("Bearer {}", api_key))
        .header("content-type", "application/json")
        .json(&body)
        .send()
        .await
        .map_err(|e| {
            let msg = if e.is_timeout() {
                "Vision API timeout after 60s".to_string()
            } else {
                format!("Vision API request failed: {}", e)
            };
            error!("{}", msg);
            msg
        })?;

    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<failed to read body>".to_string());
        let truncated = if body.len() > 1024 {
            format!("{}...", &body[..1024])
        } else {
            body
        };
        let msg = format!("Vision API error: {} - {}", status, truncated);
        error!("{}", msg);
        return Err(msg);
    }

    let body_text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read vision API response body: {}", e))?;

    // Response wrapper: { "choices": [{"message": {"content": "..."}}] }
    let wrapper: serde_json::Value = serde_json::from_str(&body_text)
        .map_err(|e| format!("Failed to parse vision API response wrapper: {}", e))?;

    wrapper["choices"][0]["message"]["content"]
        .as_str()
        .map(|s| s.to_string())
        .ok_or_else(|| {
            let msg = "No content in vision API response".to_string();
            error!("{}", msg);
            msg
        })
}

/// Find the first top-level `{...}` span via brace matching.
///
/// Braces inside JSON strings are skipped (quote- and escape-aware), so
/// prose like `the {"type": "Serum{gel}"} above` resolves correctly.
/// Returns `None` when no balanced object exists.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth: usize = 0;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Map the vision reply JSON to a [`ScanResult`].
/// The name is required; every other field defaults when absent, matching
/// how loosely the model follows the instruction in practice.
fn map_reply_to_result(json: &serde_json::Value) -> Result<ScanResult, String> {
    let name = json["name"]
        .as_str()
        .filter(|s| !s.is_empty())
        .ok_or("Missing 'name' field in vision reply")?
        .to_string();

    Ok(ScanResult {
        name,
        brand: json["brand"].as_str().unwrap_or("").to_string(),
        product_type: json["type"].as_str().unwrap_or("").to_string(),
        description: json["description"].as_str().unwrap_or("").to_string(),
        usage_time: json["usageTime"].as_str().unwrap_or("").to_string(),
        ingredients: string_list(&json["ingredients"]),
        benefits: string_list(&json["benefits"]),
        identified: true,
    })
}

fn string_list(value: &serde_json::Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str().map(|s| s.to_string()))
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_json_object_plain() {
        let text = r#"{"name": "X"}"#;
        assert_eq!(extract_json_object(text), Some(text));
    }

    #[test]
    fn test_extract_json_object_embedded_in_prose() {
        let text = "Here is the analysis:\n{\"name\": \"X\", \"brand\": \"Y\"}\nHope that helps!";
        assert_eq!(
            extract_json_object(text),
            Some("{\"name\": \"X\", \"brand\": \"Y\"}")
        );
    }

    #[test]
    fn test_extract_json_object_takes_first_top_level_span() {
        let text = r#"{"a": 1} and later {"b": 2}"#;
        assert_eq!(extract_json_object(text), Some(r#"{"a": 1}"#));
    }

    #[test]
    fn test_extract_json_object_nested_braces() {
        let text = r#"reply: {"outer": {"inner": [1, 2]}} done"#;
        assert_eq!(
            extract_json_object(text),
            Some(r#"{"outer": {"inner": [1, 2]}}"#)
        );
    }

    #[test]
    fn test_extract_json_object_ignores_braces_in_strings() {
        let text = r#"{"description": "gel {water-based}", "name": "X"}"#;
        assert_eq!(extract_json_object(text), Some(text));
    }

    #[test]
    fn test_extract_json_object_handles_escaped_quotes() {
        let text = r#"{"name": "the \"best\" serum"} trailing"#;
        assert_eq!(
            extract_json_object(text),
            Some(r#"{"name": "the \"best\" serum"}"#)
        );
    }

    #[test]
    fn test_extract_json_object_none_for_plain_text() {
        assert_eq!(extract_json_object("no json here"), None);
    }

    #[test]
    fn test_extract_json_object_none_for_unbalanced() {
        assert_eq!(extract_json_object(r#"{"name": "X""#), None);
    }

    #[test]
    fn test_map_reply_full() {
        let json = serde_json::json!({
            "name": "X",
            "brand": "Y",
            "type": "Serum",
            "description": "d",
            "usageTime": "AM",
            "ingredients": ["a"],
            "benefits": ["b"]
        });

        let result = map_reply_to_result(&json).unwrap();
        assert_eq!(result.name, "X");
        assert_eq!(result.brand, "Y");
        assert_eq!(result.product_type, "Serum");
        assert_eq!(result.description, "d");
        assert_eq!(result.usage_time, "AM");
        assert_eq!(result.ingredients, vec!["a"]);
        assert_eq!(result.benefits, vec!["b"]);
        assert!(result.identified);
    }

    #[test]
    fn test_map_reply_defaults_missing_lists() {
        let json = serde_json::json!({
            "name": "X",
            "brand": "Y"
        });

        let result = map_reply_to_result(&json).unwrap();
        assert!(result.ingredients.is_empty());
        assert!(result.benefits.is_empty());
        assert_eq!(result.product_type, "");
    }

    #[test]
    fn test_map_reply_requires_name() {
        let json = serde_json::json!({"brand": "Y"});
        let err = map_reply_to_result(&json).unwrap_err();
        assert!(err.contains("name"));
    }

    #[test]
    fn test_string_list_skips_non_strings() {
        let value = serde_json::json!(["a", 1, "b", null]);
        assert_eq!(string_list(&value), vec!["a", "b"]);
    }
}
