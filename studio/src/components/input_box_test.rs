use super::*;

#[test]
fn enter_sends() {
    assert!(should_send("Enter", false, false));
}

#[test]
fn shift_enter_inserts_newline() {
    assert!(!should_send("Enter", true, false));
}

#[test]
fn enter_while_composing_commits_candidate_only() {
    assert!(!should_send("Enter", false, true));
    assert!(!should_send("Enter", true, true));
}

#[test]
fn other_keys_never_send() {
    assert!(!should_send("a", false, false));
    assert!(!should_send("Tab", false, false));
}
