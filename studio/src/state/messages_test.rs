use super::*;

// =============================================================
// Seeding
// =============================================================

#[test]
fn seeded_store_has_user_then_assistant() {
    let store = MessageStore::seeded();
    assert_eq!(store.len(), 2);
    assert_eq!(store.messages()[0].role, Role::User);
    assert_eq!(store.messages()[1].role, Role::Assistant);
    assert_eq!(store.messages()[0].id, 1);
    assert_eq!(store.messages()[1].id, 2);
}

#[test]
fn default_store_is_empty() {
    let store = MessageStore::default();
    assert!(store.is_empty());
    assert_eq!(store.last_assistant_id(), None);
}

// =============================================================
// Sending
// =============================================================

#[test]
fn send_hello_after_seed_appends_user_message_three() {
    let mut store = MessageStore::seeded();
    let id = store.send("hello");
    assert_eq!(id, Some(3));
    assert_eq!(store.len(), 3);
    let msg = store.get(3).expect("message 3");
    assert_eq!(msg.role, Role::User);
    assert_eq!(msg.content, "hello");
}

#[test]
fn send_ignores_whitespace_only_input() {
    let mut store = MessageStore::seeded();
    assert_eq!(store.send("  \n\t"), None);
    assert_eq!(store.len(), 2);
}

#[test]
fn send_keeps_content_verbatim() {
    let mut store = MessageStore::default();
    store.send("  two\nlines ");
    assert_eq!(store.messages()[0].content, "  two\nlines ");
}

#[test]
fn appends_never_touch_existing_messages() {
    let mut store = MessageStore::seeded();
    let before = store.messages().to_vec();
    store.send("one");
    store.push_assistant("two", Attachments::video("https://example.com/v.jpg"), None);
    store.send("three");
    assert_eq!(&store.messages()[..before.len()], before.as_slice());
    let ids: Vec<u64> = store.messages().iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

// =============================================================
// Lookups
// =============================================================

#[test]
fn last_assistant_id_tracks_newest_assistant() {
    let mut store = MessageStore::seeded();
    assert_eq!(store.last_assistant_id(), Some(2));
    store.send("more");
    assert_eq!(store.last_assistant_id(), Some(2));
    let id = store.push_assistant("done", Attachments::default(), None);
    assert_eq!(store.last_assistant_id(), Some(id));
}

#[test]
fn with_payloads_skips_plain_messages() {
    let mut store = MessageStore::seeded();
    let plan = plans::Payload::TaskPlanning(plans::TaskPlan { title: "Plan".to_owned(), steps: Vec::new() });
    let id = store.push_assistant("plan ready", Attachments::default(), Some(plan));
    let found: Vec<u64> = store.with_payloads().map(|(id, _)| id).collect();
    assert_eq!(found, vec![id]);
}

#[test]
fn history_titles_lists_user_first_lines_newest_first() {
    let mut store = MessageStore::seeded();
    store.send("\n  Storyboard for a cafe\nwith details");
    store.send("Logo ideas");
    let titles = store.history_titles(10);
    assert_eq!(titles, vec!["Logo ideas", "Storyboard for a cafe", "Create a business card for me"]);
    assert_eq!(store.history_titles(1), vec!["Logo ideas"]);
}

#[test]
fn attachments_empty_and_video_helpers() {
    assert!(Attachments::default().is_empty());
    let a = Attachments::video("u");
    assert!(!a.is_empty());
    assert_eq!(a.video.as_deref(), Some("u"));
}
