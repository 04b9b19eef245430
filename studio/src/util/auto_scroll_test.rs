use super::*;

fn bottom_metrics(scroll_top: f64) -> ScrollMetrics {
    ScrollMetrics { scroll_top, scroll_height: 1000.0, client_height: 400.0, latest_top: None }
}

fn settled(anchor: Anchor, len: usize) -> AutoScroll {
    let mut scroll = AutoScroll::new(anchor);
    let cmd = scroll.on_len_change(len).expect("initial scroll");
    assert_eq!(scroll.finish(cmd.seq), None);
    scroll
}

// =============================================================
// Growth
// =============================================================

#[test]
fn growth_while_idle_emits_command_and_enters_guard() {
    let mut scroll = AutoScroll::new(Anchor::Bottom);
    let cmd = scroll.on_len_change(2).expect("command");
    assert_eq!(cmd.anchor, Anchor::Bottom);
    assert_eq!(scroll.phase(), ScrollPhase::AutoScrolling { seq: cmd.seq });
}

#[test]
fn shrink_or_same_length_only_resyncs() {
    let mut scroll = settled(Anchor::Bottom, 3);
    assert_eq!(scroll.on_len_change(3), None);
    assert_eq!(scroll.on_len_change(1), None);
    assert_eq!(scroll.phase(), ScrollPhase::Idle);
    assert!(scroll.on_len_change(2).is_some());
}

#[test]
fn growth_during_guard_is_deferred_until_finish() {
    let mut scroll = AutoScroll::new(Anchor::Bottom);
    let first = scroll.on_len_change(2).expect("command");
    assert_eq!(scroll.on_len_change(3), None);
    assert_eq!(scroll.on_len_change(4), None);
    let follow_up = scroll.finish(first.seq).expect("catch-up");
    assert_ne!(follow_up.seq, first.seq);
    assert_eq!(scroll.phase(), ScrollPhase::AutoScrolling { seq: follow_up.seq });
    assert_eq!(scroll.finish(follow_up.seq), None);
    assert_eq!(scroll.phase(), ScrollPhase::Idle);
}

#[test]
fn growth_while_user_controlled_emits_nothing() {
    let mut scroll = settled(Anchor::Bottom, 2);
    scroll.on_scroll(&bottom_metrics(100.0));
    assert_eq!(scroll.on_len_change(3), None);
    assert_eq!(scroll.phase(), ScrollPhase::UserControlled);
}

// =============================================================
// Guard completion
// =============================================================

#[test]
fn stale_finish_is_ignored() {
    let mut scroll = AutoScroll::new(Anchor::Bottom);
    let first = scroll.on_len_change(2).expect("command");
    assert_eq!(scroll.finish(first.seq + 7), None);
    assert_eq!(scroll.phase(), ScrollPhase::AutoScrolling { seq: first.seq });
}

#[test]
fn second_finish_for_same_scroll_is_noop() {
    let mut scroll = AutoScroll::new(Anchor::Bottom);
    let cmd = scroll.on_len_change(2).expect("command");
    scroll.finish(cmd.seq);
    scroll.on_scroll(&bottom_metrics(100.0));
    assert_eq!(scroll.finish(cmd.seq), None);
    assert_eq!(scroll.phase(), ScrollPhase::UserControlled);
}

#[test]
fn scroll_events_are_ignored_during_guard() {
    let mut scroll = AutoScroll::new(Anchor::Bottom);
    let cmd = scroll.on_len_change(2).expect("command");
    scroll.on_scroll(&bottom_metrics(0.0));
    assert_eq!(scroll.phase(), ScrollPhase::AutoScrolling { seq: cmd.seq });
}

// =============================================================
// Tolerance
// =============================================================

#[test]
fn within_tolerance_stays_enabled() {
    let mut scroll = settled(Anchor::Bottom, 2);
    scroll.on_scroll(&bottom_metrics(550.0));
    assert_eq!(scroll.phase(), ScrollPhase::Idle);
}

#[test]
fn beyond_tolerance_disables_until_back() {
    let mut scroll = settled(Anchor::Bottom, 2);
    scroll.on_scroll(&bottom_metrics(549.0));
    assert_eq!(scroll.phase(), ScrollPhase::UserControlled);
    scroll.on_scroll(&bottom_metrics(580.0));
    assert_eq!(scroll.phase(), ScrollPhase::Idle);
    assert!(scroll.on_len_change(3).is_some());
}

#[test]
fn latest_top_anchor_uses_measured_card_offset() {
    let mut scroll = settled(Anchor::LatestTop, 1);
    let near = ScrollMetrics { scroll_top: 830.0, latest_top: Some(800.0), ..ScrollMetrics::default() };
    scroll.on_scroll(&near);
    assert_eq!(scroll.phase(), ScrollPhase::Idle);
    let far = ScrollMetrics { scroll_top: 200.0, latest_top: Some(800.0), ..ScrollMetrics::default() };
    scroll.on_scroll(&far);
    assert_eq!(scroll.phase(), ScrollPhase::UserControlled);
}

#[test]
fn unmeasured_layout_is_skipped() {
    let mut scroll = settled(Anchor::LatestTop, 1);
    scroll.on_scroll(&ScrollMetrics { scroll_top: 5000.0, ..ScrollMetrics::default() });
    assert_eq!(scroll.phase(), ScrollPhase::Idle);
    let cmd = ScrollCommand { seq: 1, anchor: Anchor::LatestTop };
    assert_eq!(cmd.target(&ScrollMetrics::default()), None);
}

// =============================================================
// Geometry
// =============================================================

#[test]
fn pinned_offset_for_bottom_clamps_short_content() {
    let short = ScrollMetrics { scroll_top: 0.0, scroll_height: 300.0, client_height: 400.0, latest_top: None };
    assert_eq!(pinned_offset(Anchor::Bottom, &short), Some(0.0));
    assert_eq!(pinned_offset(Anchor::Bottom, &bottom_metrics(0.0)), Some(600.0));
}

#[test]
fn trailing_spacer_never_negative() {
    assert!((trailing_spacer(800.0, 300.0, 48.0) - 452.0).abs() < f64::EPSILON);
    assert!(trailing_spacer(400.0, 600.0, 48.0).abs() < f64::EPSILON);
}
