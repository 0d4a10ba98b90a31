use serde::de::DeserializeOwned;
use validator::Validate;

use crate::domain::{
    common::entities::app_errors::CoreError,
    completion::entities::{ReplyEnvelope, SegmentKind},
};

/// Upper bound, in characters, on the raw payload carried by
/// [`CoreError::MalformedModelOutput`].
pub const RAW_EXCERPT_LIMIT: usize = 300;

/// Returns the text payload of a reply envelope.
pub fn extract_payload(envelope: &ReplyEnvelope) -> String {
    match envelope {
        ReplyEnvelope::Aggregate(text) => text.clone(),
        ReplyEnvelope::Segments(segments) => segments
            .iter()
            .filter(|segment| segment.kind == SegmentKind::OutputText)
            .map(|segment| segment.text.as_str())
            .collect(),
    }
}

/// First [`RAW_EXCERPT_LIMIT`] characters of `payload`, verbatim.
pub fn raw_excerpt(payload: &str) -> String {
    payload.chars().take(RAW_EXCERPT_LIMIT).collect()
}

pub fn parse_json(payload: &str) -> Result<serde_json::Value, CoreError> {
    serde_json::from_str(payload).map_err(|e| {
        tracing::error!("Failed to parse LLM response: {}", e);
        CoreError::MalformedModelOutput {
            excerpt: raw_excerpt(payload),
        }
    })
}

/// Checks a parsed reply against `T`: required keys, element shapes and the
/// declared numeric bounds. The value is returned as parsed.
pub fn validate_reply<T>(value: serde_json::Value) -> Result<T, CoreError>
where
    T: DeserializeOwned + Validate,
{
    let reply: T = serde_json::from_value(value).map_err(|e| {
        tracing::error!("Invalid reply format: {}", e);
        CoreError::SchemaViolation(e.to_string())
    })?;

    reply.validate().map_err(|e| {
        tracing::error!("Reply out of bounds: {}", e);
        CoreError::SchemaViolation(e.to_string())
    })?;

    Ok(reply)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::{
        completion::entities::ReplySegment, recommendation::entities::RecommendationResponse,
    };

    fn valid_plan() -> serde_json::Value {
        json!({
            "breakfast": "oatmeal",
            "lunch": "salad",
            "dinner": "soup",
            "totalCalories": 1500,
            "nutrients": { "protein_g": 50, "carbs_g": 180, "fiber_g": 30 }
        })
    }

    #[test]
    fn test_segments_concatenate_only_output_text_in_order() {
        let envelope = ReplyEnvelope::Segments(vec![
            ReplySegment::output_text("{\"a\":"),
            ReplySegment::other(),
            ReplySegment {
                kind: SegmentKind::Other,
                text: "noise".to_string(),
            },
            ReplySegment::output_text("1}"),
        ]);
        assert_eq!(extract_payload(&envelope), "{\"a\":1}");
    }

    #[test]
    fn test_no_segments_yield_empty_payload() {
        assert_eq!(extract_payload(&ReplyEnvelope::Segments(vec![])), "");
    }

    #[test]
    fn test_malformed_payload_keeps_bounded_prefix() {
        let payload = format!("Sure! Here is your plan: {}", "x".repeat(1000));
        let err = parse_json(&payload).unwrap_err();
        match err {
            CoreError::MalformedModelOutput { excerpt } => {
                assert_eq!(excerpt.chars().count(), RAW_EXCERPT_LIMIT);
                assert!(payload.starts_with(&excerpt));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_excerpt_counts_characters_not_bytes() {
        let payload = "é".repeat(400);
        let excerpt = raw_excerpt(&payload);
        assert_eq!(excerpt.chars().count(), RAW_EXCERPT_LIMIT);
    }

    #[test]
    fn test_short_payload_is_kept_whole() {
        assert_eq!(raw_excerpt("not json"), "not json");
    }

    #[test]
    fn test_valid_reply_is_returned_unchanged() {
        let reply: RecommendationResponse = validate_reply(valid_plan()).unwrap();
        assert_eq!(serde_json::to_value(&reply).unwrap(), valid_plan());
    }

    #[test]
    fn test_missing_key_is_schema_violation() {
        let mut value = valid_plan();
        value.as_object_mut().unwrap().remove("dinner");
        let err = validate_reply::<RecommendationResponse>(value).unwrap_err();
        assert!(matches!(err, CoreError::SchemaViolation(msg) if msg.contains("dinner")));
    }

    #[test]
    fn test_out_of_bound_calories_is_schema_violation() {
        let mut value = valid_plan();
        value["totalCalories"] = json!(7000);
        let err = validate_reply::<RecommendationResponse>(value).unwrap_err();
        assert!(matches!(err, CoreError::SchemaViolation(_)));
    }

    #[test]
    fn test_nested_nutrient_bound_is_enforced() {
        let mut value = valid_plan();
        value["nutrients"]["fiber_g"] = json!(201);
        let err = validate_reply::<RecommendationResponse>(value).unwrap_err();
        assert!(matches!(err, CoreError::SchemaViolation(_)));
    }

    #[test]
    fn test_wrong_type_is_schema_violation() {
        let mut value = valid_plan();
        value["totalCalories"] = json!("a lot");
        let err = validate_reply::<RecommendationResponse>(value).unwrap_err();
        assert!(matches!(err, CoreError::SchemaViolation(_)));
    }
}
