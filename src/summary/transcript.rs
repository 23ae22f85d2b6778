//! Transcript location within a conversation's event log.

use crate::models::{ConversationEvent, TranscriptTurn};

/// Scan the ordered event log for the first transcript-bearing event
/// and apply the retention rule: the leading turn is always dropped,
/// and a transcript of one turn or fewer counts as absent.
///
/// Only the first carrier is consulted. Later transcript-bearing
/// events never contribute turns, whatever they contain.
#[must_use]
pub fn locate_transcript(events: &[ConversationEvent]) -> Option<Vec<TranscriptTurn>> {
    for event in events {
        let Some(turns) = event
            .properties
            .as_ref()
            .and_then(|properties| properties.transcript.as_ref())
        else {
            continue;
        };

        if turns.len() > 1 {
            return Some(turns[1..].to_vec());
        }
        return None;
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ConversationDetail;
    use serde_json::{Value, json};

    fn detail_from(value: Value) -> ConversationDetail {
        serde_json::from_value(value).unwrap()
    }

    fn turn_values(turns: &[TranscriptTurn]) -> Vec<Value> {
        turns.iter().map(|turn| turn.0.clone()).collect()
    }

    #[test]
    fn test_no_events_yields_nothing() {
        let detail = detail_from(json!({"conversation_id": "c1", "events": []}));
        assert!(locate_transcript(&detail.events).is_none());

        let detail = detail_from(json!({"conversation_id": "c1"}));
        assert!(locate_transcript(&detail.events).is_none());
    }

    #[test]
    fn test_events_without_transcript_yield_nothing() {
        let detail = detail_from(json!({
            "events": [
                {"event_type": "system.replica_joined"},
                {"event_type": "application.recording_ready", "properties": {"url": "s3://x"}}
            ]
        }));

        assert!(locate_transcript(&detail.events).is_none());
    }

    #[test]
    fn test_leading_turn_is_dropped() {
        let original = json!([
            {"role": "assistant", "content": "Hey there!"},
            {"role": "user", "content": "Hi, I need a website."},
            {"role": "assistant", "content": "Happy to help."}
        ]);
        let detail = detail_from(json!({
            "events": [{"properties": {"transcript": original}}]
        }));

        let turns = locate_transcript(&detail.events).unwrap();

        let expected: Vec<Value> = original.as_array().unwrap()[1..].to_vec();
        assert_eq!(turn_values(&turns), expected);
    }

    #[test]
    fn test_submitted_length_is_one_less_than_original() {
        for total in [2, 3, 7] {
            let original: Vec<Value> = (0..total)
                .map(|i| json!({"role": "user", "content": format!("turn {i}")}))
                .collect();
            let detail = detail_from(json!({
                "events": [{"properties": {"transcript": original}}]
            }));

            let turns = locate_transcript(&detail.events).unwrap();
            assert_eq!(turns.len(), total - 1);
        }
    }

    #[test]
    fn test_single_turn_transcript_counts_as_absent() {
        let detail = detail_from(json!({
            "events": [{"properties": {"transcript": [
                {"role": "assistant", "content": "Hey there!"}
            ]}}]
        }));

        assert!(locate_transcript(&detail.events).is_none());

        // turn shape does not matter, only the count
        let detail = detail_from(json!({
            "events": [{"properties": {"transcript": [{"turn": "greeting"}]}}]
        }));

        assert!(locate_transcript(&detail.events).is_none());
    }

    #[test]
    fn test_empty_transcript_counts_as_absent() {
        let detail = detail_from(json!({
            "events": [{"properties": {"transcript": []}}]
        }));

        assert!(locate_transcript(&detail.events).is_none());
    }

    #[test]
    fn test_first_carrier_decides_even_when_unusable() {
        // The first transcript-bearing event has a single turn; a later
        // event carries a full transcript. The scan must not fall
        // through to the later event.
        let detail = detail_from(json!({
            "events": [
                {"event_type": "application.transcription_ready",
                 "properties": {"transcript": [{"role": "assistant", "content": "Hey there!"}]}},
                {"event_type": "application.transcription_ready",
                 "properties": {"transcript": [
                     {"role": "assistant", "content": "Hey there!"},
                     {"role": "user", "content": "Hello"},
                     {"role": "assistant", "content": "Hi!"}
                 ]}}
            ]
        }));

        assert!(locate_transcript(&detail.events).is_none());
    }

    #[test]
    fn test_turns_survive_with_unknown_fields_intact() {
        let original = json!([
            {"role": "assistant", "content": "Hey there!"},
            {"role": "user", "content": "Hi", "timestamp": 1712000000, "confidence": 0.97}
        ]);
        let detail = detail_from(json!({
            "events": [{"properties": {"transcript": original}}]
        }));

        let turns = locate_transcript(&detail.events).unwrap();
        let serialized = serde_json::to_string(&turns).unwrap();
        let reparsed: Value = serde_json::from_str(&serialized).unwrap();

        assert_eq!(reparsed, json!([original.as_array().unwrap()[1]]));
    }
}
