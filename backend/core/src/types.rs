use serde::{Deserialize, Serialize};

/// One recognized span of audio, with its candidate transcriptions in the
/// order the recognition service ranked them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognizedSegment {
    pub alternatives: Vec<String>,
}

impl RecognizedSegment {
    pub fn new(alternatives: Vec<String>) -> Self {
        Self { alternatives }
    }

    /// Top-ranked transcription for this segment, if any non-empty one exists.
    pub fn top_alternative(&self) -> Option<&str> {
        self.alternatives
            .first()
            .map(String::as_str)
            .filter(|t| !t.is_empty())
    }
}

/// Join the top alternative of each segment with newlines, preserving
/// service order. Segments without a usable alternative are dropped.
/// Returns `None` when nothing usable remains.
pub fn join_transcripts(segments: &[RecognizedSegment]) -> Option<String> {
    let joined: Vec<&str> = segments
        .iter()
        .filter_map(RecognizedSegment::top_alternative)
        .collect();

    if joined.is_empty() {
        None
    } else {
        Some(joined.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(alts: &[&str]) -> RecognizedSegment {
        RecognizedSegment::new(alts.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn joins_top_alternatives_in_order() {
        let segments = vec![seg(&["hello", "yellow"]), seg(&["world"])];
        assert_eq!(join_transcripts(&segments).as_deref(), Some("hello\nworld"));
    }

    #[test]
    fn filters_segments_without_alternatives() {
        let segments = vec![seg(&[]), seg(&["test"])];
        assert_eq!(join_transcripts(&segments).as_deref(), Some("test"));
    }

    #[test]
    fn filters_empty_string_alternatives() {
        let segments = vec![seg(&[""]), seg(&["still here"])];
        assert_eq!(join_transcripts(&segments).as_deref(), Some("still here"));
    }

    #[test]
    fn none_when_every_segment_is_empty() {
        let segments = vec![seg(&[]), seg(&[""])];
        assert_eq!(join_transcripts(&segments), None);
    }

    #[test]
    fn none_for_no_segments() {
        assert_eq!(join_transcripts(&[]), None);
    }

    #[test]
    fn only_first_alternative_is_used() {
        let segments = vec![seg(&["first", "second", "third"])];
        assert_eq!(join_transcripts(&segments).as_deref(), Some("first"));
    }
}
