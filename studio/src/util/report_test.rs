use super::*;
use crate::state::feedback::{FeedbackSubmission, Reaction};

#[test]
fn encode_prefixes_channel_and_serializes_camel_case() {
    let submission = FeedbackSubmission {
        message_id: 2,
        reaction: Reaction::Negative,
        tags: vec!["Unclear".to_owned()],
        comment: String::new(),
    };
    let line = encode(Channel::MessageFeedback, &submission).expect("encode");
    assert_eq!(line, r#"[message_feedback] {"messageId":2,"reaction":"negative","tags":["Unclear"]}"#);
}

#[test]
fn channel_names_are_distinct() {
    let names = [Channel::MessageFeedback, Channel::QuickReport, Channel::FeedbackForm, Channel::SceneEdit].map(Channel::name);
    let mut sorted = names.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), names.len());
}
