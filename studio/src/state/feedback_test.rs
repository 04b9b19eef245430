use super::*;
use crate::state::messages::Attachments;

fn store() -> MessageStore {
    MessageStore::seeded()
}

// =============================================================
// Reaction toggling
// =============================================================

#[test]
fn react_sets_reaction_and_opens_detail() {
    let store = store();
    let mut tracker = FeedbackTracker::default();
    assert!(tracker.react(&store, 2, Reaction::Positive));
    let entry = tracker.entry(2);
    assert_eq!(entry.reaction, Some(Reaction::Positive));
    assert!(entry.detail_visible());
}

#[test]
fn same_reaction_twice_clears_and_hides_detail() {
    let store = store();
    let mut tracker = FeedbackTracker::default();
    tracker.react(&store, 2, Reaction::Negative);
    tracker.react(&store, 2, Reaction::Negative);
    let entry = tracker.entry(2);
    assert_eq!(entry.reaction, None);
    assert!(!entry.detail_open);
    assert!(!entry.detail_visible());
}

#[test]
fn opposite_reaction_replaces_and_reshows_detail() {
    let store = store();
    let mut tracker = FeedbackTracker::default();
    tracker.react(&store, 2, Reaction::Positive);
    tracker.close_detail(2);
    assert!(!tracker.entry(2).detail_visible());
    tracker.react(&store, 2, Reaction::Negative);
    let entry = tracker.entry(2);
    assert_eq!(entry.reaction, Some(Reaction::Negative));
    assert!(entry.detail_visible());
}

// =============================================================
// Eligibility
// =============================================================

#[test]
fn only_last_assistant_message_is_eligible() {
    let mut store = store();
    let mut tracker = FeedbackTracker::default();
    assert!(!tracker.react(&store, 1, Reaction::Positive));
    let newer = store.push_assistant("done", Attachments::default(), None);
    assert!(!tracker.react(&store, 2, Reaction::Positive));
    assert!(tracker.react(&store, newer, Reaction::Positive));
    assert_eq!(tracker.entry(2).reaction, None);
}

#[test]
fn feedback_is_kept_after_message_loses_eligibility() {
    let mut store = store();
    let mut tracker = FeedbackTracker::default();
    tracker.react(&store, 2, Reaction::Positive);
    store.push_assistant("next", Attachments::default(), None);
    assert_eq!(tracker.entry(2).reaction, Some(Reaction::Positive));
    assert!(!tracker.toggle_tag(&store, 2, "Fast"));
}

// =============================================================
// Tags and submission
// =============================================================

#[test]
fn toggle_tag_adds_and_removes_in_order() {
    let store = store();
    let mut tracker = FeedbackTracker::default();
    tracker.react(&store, 2, Reaction::Positive);
    tracker.toggle_tag(&store, 2, "Clear");
    tracker.toggle_tag(&store, 2, "Accurate");
    tracker.toggle_tag(&store, 2, "Fast");
    tracker.toggle_tag(&store, 2, "Accurate");
    assert_eq!(tracker.entry(2).tags, vec!["Clear", "Fast"]);
    assert!(tracker.entry(2).has_tag("Fast"));
}

#[test]
fn tags_persist_across_reaction_toggles() {
    let store = store();
    let mut tracker = FeedbackTracker::default();
    tracker.react(&store, 2, Reaction::Positive);
    tracker.toggle_tag(&store, 2, "Helpful");
    tracker.react(&store, 2, Reaction::Positive);
    tracker.react(&store, 2, Reaction::Positive);
    assert_eq!(tracker.entry(2).tags, vec!["Helpful"]);
}

#[test]
fn submit_returns_record_and_closes_detail() {
    let store = store();
    let mut tracker = FeedbackTracker::default();
    tracker.react(&store, 2, Reaction::Negative);
    tracker.toggle_tag(&store, 2, "Too slow");
    tracker.set_comment(&store, 2, "  took a minute ".to_owned());
    let submission = tracker.submit(&store, 2).expect("submission");
    assert_eq!(submission.message_id, 2);
    assert_eq!(submission.reaction, Reaction::Negative);
    assert_eq!(submission.tags, vec!["Too slow"]);
    assert_eq!(submission.comment, "took a minute");
    let entry = tracker.entry(2);
    assert!(!entry.detail_open);
    assert_eq!(entry.reaction, Some(Reaction::Negative));
}

#[test]
fn submit_without_reaction_returns_none() {
    let store = store();
    let mut tracker = FeedbackTracker::default();
    assert!(tracker.submit(&store, 2).is_none());
}

#[test]
fn submission_serializes_camel_case_and_skips_empty_comment() {
    let submission = FeedbackSubmission {
        message_id: 7,
        reaction: Reaction::Positive,
        tags: vec!["Clear".to_owned()],
        comment: String::new(),
    };
    let value = serde_json::to_value(&submission).expect("serialize");
    assert_eq!(value["messageId"], 7);
    assert_eq!(value["reaction"], "positive");
    assert!(value.get("comment").is_none());
}

#[test]
fn quick_tags_depend_on_reaction() {
    assert_eq!(Reaction::Positive.quick_tags(), &POSITIVE_TAGS);
    assert_eq!(Reaction::Negative.quick_tags(), &NEGATIVE_TAGS);
}
