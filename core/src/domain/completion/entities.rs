/// Per-request progress through the completion pipeline.
///
/// Failure from any non-terminal stage ends the request; there is no retry
/// edge and no partial result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionStage {
    Pending,
    ParsingJson,
    Validating,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    OutputText,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplySegment {
    pub kind: SegmentKind,
    pub text: String,
}

impl ReplySegment {
    pub fn output_text(text: impl Into<String>) -> Self {
        Self {
            kind: SegmentKind::OutputText,
            text: text.into(),
        }
    }

    pub fn other() -> Self {
        Self {
            kind: SegmentKind::Other,
            text: String::new(),
        }
    }
}

/// Text-bearing reply returned by the completion boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyEnvelope {
    /// The provider already joined the output text.
    Aggregate(String),
    /// Typed segments in reply order; only `OutputText` segments carry payload.
    Segments(Vec<ReplySegment>),
}

impl ReplyEnvelope {
    /// Prefers a non-empty aggregate and falls back to the segments.
    pub fn from_parts(aggregate: Option<String>, segments: Vec<ReplySegment>) -> Self {
        match aggregate {
            Some(text) if !text.is_empty() => ReplyEnvelope::Aggregate(text),
            _ => ReplyEnvelope::Segments(segments),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_aggregate_falls_back_to_segments() {
        let envelope =
            ReplyEnvelope::from_parts(Some(String::new()), vec![ReplySegment::output_text("{}")]);
        assert_eq!(
            envelope,
            ReplyEnvelope::Segments(vec![ReplySegment::output_text("{}")])
        );
    }

    #[test]
    fn test_aggregate_wins_over_segments() {
        let envelope = ReplyEnvelope::from_parts(
            Some("{\"a\":1}".to_string()),
            vec![ReplySegment::output_text("ignored")],
        );
        assert_eq!(envelope, ReplyEnvelope::Aggregate("{\"a\":1}".to_string()));
    }
}
