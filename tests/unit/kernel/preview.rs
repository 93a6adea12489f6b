use super::*;

#[test]
fn paragraphs_split_on_block_tags() {
    let doc = PreviewDoc::parse("<p>one</p><p>two</p><div>three</div>");
    let texts: Vec<_> = doc.lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, ["one", "two", "three"]);
    assert!(doc.lines.iter().all(|l| l.kind == BlockKind::Paragraph));
}

#[test]
fn headings_carry_their_level() {
    let doc = PreviewDoc::parse("<h1>Top</h1><h3>Deep</h3>");
    assert_eq!(doc.lines[0].kind, BlockKind::Heading(1));
    assert_eq!(doc.lines[0].text, "Top");
    assert_eq!(doc.lines[1].kind, BlockKind::Heading(3));
}

#[test]
fn inline_tags_are_stripped() {
    let doc = PreviewDoc::parse("<p>a <b>bold</b> and <a href=\"x\">linked</a> word</p>");
    assert_eq!(doc.lines[0].text, "a bold and linked word");
}

#[test]
fn script_and_style_content_is_dropped() {
    let doc = PreviewDoc::parse(
        "<style>p { color: red }</style><p>kept</p><script>let x = '<p>no</p>';</script>",
    );
    let texts: Vec<_> = doc.lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, ["kept"]);
}

#[test]
fn comments_are_dropped() {
    let doc = PreviewDoc::parse("<p>a</p><!-- <p>hidden</p> --><p>b</p>");
    let texts: Vec<_> = doc.lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, ["a", "b"]);
}

#[test]
fn title_is_captured_not_rendered() {
    let doc = PreviewDoc::parse("<head><title>Quarterly  Report</title></head><p>body</p>");
    assert_eq!(doc.title.as_deref(), Some("Quarterly Report"));
    let texts: Vec<_> = doc.lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, ["body"]);
}

#[test]
fn entities_are_decoded() {
    let doc = PreviewDoc::parse("<p>1 &lt; 2 &amp;&amp; 3 &gt; 2 &#65;&#x42;</p>");
    assert_eq!(doc.lines[0].text, "1 < 2 && 3 > 2 AB");
}

#[test]
fn unknown_entities_pass_through() {
    let doc = PreviewDoc::parse("<p>&bogus; stays</p>");
    assert_eq!(doc.lines[0].text, "&bogus; stays");
}

#[test]
fn list_items_get_bullets_and_nesting_indent() {
    let doc = PreviewDoc::parse("<ul><li>one</li><ul><li>nested</li></ul><li>two</li></ul>");
    let texts: Vec<_> = doc.lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, ["• one", "  • nested", "• two"]);
    assert!(doc.lines.iter().all(|l| l.kind == BlockKind::ListItem));
}

#[test]
fn pre_preserves_whitespace_and_line_breaks() {
    let doc = PreviewDoc::parse("<pre>fn main() {\n    body\n}</pre>");
    let texts: Vec<_> = doc.lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, ["fn main() {", "    body", "}"]);
    assert!(doc.lines.iter().all(|l| l.kind == BlockKind::Pre));
}

#[test]
fn whitespace_collapses_outside_pre() {
    let doc = PreviewDoc::parse("<p>  spaced \n\t out  </p>");
    assert_eq!(doc.lines[0].text, "spaced out");
}

#[test]
fn br_and_hr_break_lines() {
    let doc = PreviewDoc::parse("<p>one<br>two</p><hr>");
    let texts: Vec<_> = doc.lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, ["one", "two", ""]);
    assert_eq!(doc.lines[2].kind, BlockKind::Rule);
}

#[test]
fn empty_and_markupless_input() {
    assert_eq!(PreviewDoc::parse("").line_count(), 0);

    let doc = PreviewDoc::parse("just plain text");
    assert_eq!(doc.lines[0].text, "just plain text");
    assert!(doc.title.is_none());
}

#[test]
fn unterminated_tag_drops_remainder() {
    let doc = PreviewDoc::parse("<p>ok</p><div class=");
    let texts: Vec<_> = doc.lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, ["ok"]);
}
