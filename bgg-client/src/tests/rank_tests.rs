use super::*;
use bgg_core::Document;

fn ranks(xml: &str) -> Document {
    Document::parse(xml).unwrap()
}

#[test]
fn numeric_overall_rank_is_parsed() {
    let doc = ranks(
        r#"<ranks>
            <rank type="family" id="5497" name="strategygames" value="3"/>
            <rank type="subtype" id="1" name="boardgame" value="37"/>
        </ranks>"#,
    );
    assert_eq!(overall_rank(Some(doc.root())), 37);
}

#[test]
fn not_ranked_in_any_case_is_unknown() {
    for value in ["Not Ranked", "not ranked", "  NOT RANKED  "] {
        let doc = ranks(&format!(r#"<ranks><rank id="1" value="{value}"/></ranks>"#));
        assert_eq!(overall_rank(Some(doc.root())), UNKNOWN, "value {value:?}");
    }
}

#[test]
fn missing_overall_entry_is_unknown() {
    let doc = ranks(r#"<ranks><rank id="5497" value="3"/></ranks>"#);
    assert_eq!(overall_rank(Some(doc.root())), UNKNOWN);
    assert_eq!(overall_rank(None), UNKNOWN);
}

#[test]
fn unparsable_or_missing_value_is_unknown() {
    let doc = ranks(r#"<ranks><rank id="1" value="12th"/></ranks>"#);
    assert_eq!(overall_rank(Some(doc.root())), UNKNOWN);

    let doc = ranks(r#"<ranks><rank id="1"/></ranks>"#);
    assert_eq!(overall_rank(Some(doc.root())), UNKNOWN);
}

#[test]
fn first_overall_entry_wins() {
    let doc = ranks(r#"<ranks><rank id="1" value="8"/><rank id="1" value="9"/></ranks>"#);
    assert_eq!(overall_rank(Some(doc.root())), 8);
}
