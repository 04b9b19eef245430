use super::*;

#[test]
fn renders_emphasis_and_lists() {
    let out = render_markdown_html("**bold**\n\n- one\n- two");
    assert!(out.contains("<strong>bold</strong>"));
    assert!(out.contains("<li>one</li>"));
}

#[test]
fn drops_raw_html() {
    let out = render_markdown_html("hi <script>alert(1)</script>\n\n<div>block</div>");
    assert!(!out.contains("<script>"));
    assert!(!out.contains("<div>"));
    assert!(out.contains("hi"));
}

#[test]
fn plain_text_is_wrapped_in_paragraph() {
    assert_eq!(render_markdown_html("Sure!"), "<p>Sure!</p>\n");
}
