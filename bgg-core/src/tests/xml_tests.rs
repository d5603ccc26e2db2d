use super::*;

const HOT_SAMPLE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<items termsofuse="https://boardgamegeek.com/xmlapi/termsofuse">
    <item id="224517" rank="1">
        <thumbnail value="https://cf.geekdo-images.com/thumb.jpg"/>
        <name value="Brass: Birmingham"/>
        <yearpublished value="2018"/>
    </item>
    <item id="13" rank="2">
        <name value="CATAN"/>
    </item>
</items>"#;

#[test]
fn parse_builds_tree_with_attributes() {
    let doc = Document::parse(HOT_SAMPLE).unwrap();
    let root = doc.root();
    assert_eq!(root.name(), "items");
    assert_eq!(root.children_named("item").count(), 2);

    let first = root.child("item").unwrap();
    assert_eq!(first.attr("id"), Some("224517"));
    assert_eq!(first.attr("missing"), None);
    assert_eq!(
        first.path(&["name"]).and_then(|n| n.attr("value")),
        Some("Brass: Birmingham")
    );
}

#[test]
fn text_and_entities_are_unescaped() {
    let doc = Document::parse(
        "<item><description>Trade &amp; build&#10;railways</description></item>",
    )
    .unwrap();
    assert_eq!(
        doc.root().child("description").unwrap().text(),
        "Trade & build\nrailways"
    );
}

#[test]
fn cdata_is_kept_as_text() {
    let doc = Document::parse("<item><comment><![CDATA[<great> game]]></comment></item>").unwrap();
    assert_eq!(doc.root().child("comment").unwrap().text(), "<great> game");
}

#[test]
fn descendants_include_root_for_documents() {
    let doc = Document::parse("<items><item id=\"1\"><item id=\"2\"/></item></items>").unwrap();
    assert_eq!(doc.descendants("items").len(), 1);
    let ids: Vec<_> = doc
        .descendants("item")
        .iter()
        .filter_map(|e| e.attr("id"))
        .collect();
    assert_eq!(ids, vec!["1", "2"]);
    assert!(doc.root().descendants("items").is_empty());
}

#[test]
fn path_stops_at_missing_link() {
    let doc = Document::parse("<item><stats><rating value=\"7\"/></stats></item>").unwrap();
    assert!(doc.root().path(&["stats", "rating"]).is_some());
    assert!(doc.root().path(&["stats", "rating", "average"]).is_none());
    assert!(doc.root().path(&["status", "own"]).is_none());
}

#[test]
fn utf8_bytes_with_bom_are_decoded() {
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice("<user><avatarlink value=\"Zoë.png\"/></user>".as_bytes());
    let doc = Document::from_utf8_bytes(&bytes).unwrap();
    assert_eq!(
        doc.root().child("avatarlink").and_then(|a| a.attr("value")),
        Some("Zoë.png")
    );
}

#[test]
fn mismatched_tags_are_rejected() {
    assert!(Document::parse("<items><item></items>").is_err());
}

#[test]
fn unclosed_root_is_rejected() {
    assert!(Document::parse("<items><item/>").is_err());
}

#[test]
fn empty_input_is_rejected() {
    assert!(Document::parse("").is_err());
    assert!(Document::parse("not xml at all").is_err());
}

#[test]
fn second_root_is_rejected() {
    assert!(Document::parse("<a/><b/>").is_err());
}
