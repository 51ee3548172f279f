//! Model reply post-processing.
//!
//! Models asked for "JSON only" still wrap the document in markdown fences
//! or surrounding prose often enough that the reply has to be cleaned before
//! parsing. This is pure domain logic, no I/O, just text handling.

use thiserror::Error;

use super::entities::FortuneText;

/// Errors produced while turning a raw model reply into a [`FortuneText`]
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("reply contains no JSON object")]
    NoJsonObject,

    #[error("reply JSON is not a fortune: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("reply JSON has a blank `{0}` field")]
    BlankField(&'static str),
}

/// Remove markdown code-fence markers (```json / ```) from a reply.
pub fn strip_code_fences(reply: &str) -> String {
    reply
        .lines()
        .filter(|line| !line.trim_start().starts_with("```"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Slice out the JSON object embedded in a reply: first `{` to last `}`.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text[start..].rfind('}')?;
    Some(&text[start..start + end + 1])
}

/// Parse a raw model reply into a [`FortuneText`].
///
/// Tolerates fenced and prose-wrapped replies; rejects replies without an
/// embedded JSON object or with blank fields.
pub fn parse_fortune_reply(reply: &str) -> Result<FortuneText, ParseError> {
    let cleaned = strip_code_fences(reply.trim());
    let json = extract_json_object(&cleaned).ok_or(ParseError::NoJsonObject)?;
    let text: FortuneText = serde_json::from_str(json)?;

    if text.fortune.trim().is_empty() {
        return Err(ParseError::BlankField("fortune"));
    }
    if text.tip.trim().is_empty() {
        return Err(ParseError::BlankField("tip"));
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_json() {
        let reply = r#"{"fortune": "Play aggressively.", "tip": "Count your outs."}"#;
        let text = parse_fortune_reply(reply).unwrap();
        assert_eq!(text.fortune, "Play aggressively.");
        assert_eq!(text.tip, "Count your outs.");
    }

    #[test]
    fn test_parse_fenced_json() {
        let reply = "```json\n{\"fortune\": \"Stay patient.\", \"tip\": \"Fold early.\"}\n```";
        let text = parse_fortune_reply(reply).unwrap();
        assert_eq!(text.fortune, "Stay patient.");
    }

    #[test]
    fn test_parse_prose_wrapped_json() {
        let reply = concat!(
            "Here is today's fortune:\n",
            "{\"fortune\": \"Trust your reads.\", \"tip\": \"Note the dora.\"}\n",
            "Good luck!"
        );
        let text = parse_fortune_reply(reply).unwrap();
        assert_eq!(text.tip, "Note the dora.");
    }

    #[test]
    fn test_reply_without_json_is_rejected() {
        let err = parse_fortune_reply("No structured data here.").unwrap_err();
        assert!(matches!(err, ParseError::NoJsonObject));
    }

    #[test]
    fn test_reply_with_broken_json_is_rejected() {
        let err = parse_fortune_reply("{\"fortune\": \"oops\"").unwrap_err();
        // Truncated object: the brace scan finds nothing to slice
        assert!(matches!(err, ParseError::NoJsonObject));

        let err = parse_fortune_reply("{\"fortune\": \"only half\"}").unwrap_err();
        assert!(matches!(err, ParseError::InvalidJson(_)));
    }

    #[test]
    fn test_blank_fields_are_rejected() {
        let err = parse_fortune_reply(r#"{"fortune": "  ", "tip": "x"}"#).unwrap_err();
        assert!(matches!(err, ParseError::BlankField("fortune")));

        let err = parse_fortune_reply(r#"{"fortune": "x", "tip": ""}"#).unwrap_err();
        assert!(matches!(err, ParseError::BlankField("tip")));
    }

    #[test]
    fn test_strip_code_fences_keeps_content_lines() {
        let stripped = strip_code_fences("```json\n{\"a\": 1}\n```");
        assert_eq!(stripped, "{\"a\": 1}");
    }

    #[test]
    fn test_extract_json_object_spans_nested_braces() {
        let text = "noise {\"outer\": {\"inner\": 2}} trailing";
        assert_eq!(
            extract_json_object(text),
            Some("{\"outer\": {\"inner\": 2}}")
        );
    }
}
