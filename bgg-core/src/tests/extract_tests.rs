use super::*;
use crate::xml::Document;

fn doc(xml: &str) -> Document {
    Document::parse(xml).unwrap()
}

#[test]
fn absent_node_yields_default() {
    assert_eq!(string_value(None, Some("value"), "fallback"), "fallback");
    assert_eq!(int_value(None, None, -1), -1);
    assert!(!bool_value(None, Some("own"), false));
    assert_eq!(decimal_value(None, Some("value"), -1.0), -1.0);
}

#[test]
fn absent_attribute_yields_default() {
    let d = doc(r#"<status own="1"/>"#);
    let status = Some(d.root());
    assert_eq!(string_value(status, Some("want"), ""), "");
    assert_eq!(int_value(status, Some("want"), 7), 7);
    assert!(bool_value(status, Some("want"), true));
    assert_eq!(decimal_value(status, Some("want"), 2.5), 2.5);
}

#[test]
fn missing_attribute_never_panics_on_text_reads() {
    let d = doc("<name sortindex=\"1\">Azul</name>");
    assert_eq!(string_value(Some(d.root()), None, ""), "Azul");
    assert_eq!(string_value(Some(d.root()), Some("value"), "?"), "?");
}

#[test]
fn bool_only_literal_one_is_true() {
    let d = doc(r#"<status own="1" want="0" trade="" wish="yes" prev="2"/>"#);
    let status = Some(d.root());
    assert!(bool_value(status, Some("own"), false));
    assert!(!bool_value(status, Some("want"), false));
    assert!(!bool_value(status, Some("trade"), false));
    assert!(!bool_value(status, Some("wish"), false));
    assert!(!bool_value(status, Some("prev"), false));
    assert!(!bool_value(status, Some("absent"), false));
}

#[test]
fn non_numeric_text_falls_back() {
    let d = doc(r#"<rating value="N/A"><average value="7.25"/></rating>"#);
    let rating = Some(d.root());
    assert_eq!(decimal_value(rating, Some("value"), -1.0), -1.0);
    assert_eq!(int_value(rating, Some("value"), -1), -1);
    assert_eq!(
        decimal_value(descend(rating, &["average"]), Some("value"), -1.0),
        7.25
    );
}

#[test]
fn element_text_is_parsed_when_no_attribute() {
    let d = doc("<item><numplays> 12 </numplays><yearpublished>n/a</yearpublished></item>");
    assert_eq!(int_value(d.root().child("numplays"), None, -1), 12);
    assert_eq!(int_value(d.root().child("yearpublished"), None, -1), -1);
}

#[test]
fn non_finite_decimals_are_rejected() {
    assert_eq!(parse_decimal("NaN"), None);
    assert_eq!(parse_decimal("inf"), None);
    assert_eq!(parse_decimal("8.1"), Some(8.1));
}

#[test]
fn strict_date_parsing() {
    assert_eq!(
        date_value("2020-02-29"),
        NaiveDate::from_ymd_opt(2020, 2, 29).unwrap()
    );
    assert_eq!(date_value("not-a-date"), NaiveDate::MIN);
    assert_eq!(date_value("2020-13-40"), NaiveDate::MIN);
    assert_eq!(date_value("2021-02-29"), NaiveDate::MIN);
    assert_eq!(date_value("2020-2-9"), NaiveDate::MIN);
    assert_eq!(date_value(""), NaiveDate::MIN);
}

#[test]
fn strict_readers_report_what_is_missing() {
    let d = doc(r#"<item id="x"><minplayers value="2"/></item>"#);
    let item = d.root();
    assert_eq!(require_child_int(item, "minplayers"), Ok(2));
    assert_eq!(
        require_child(item, "maxplayers").unwrap_err(),
        MapError::missing_element("maxplayers")
    );
    assert_eq!(
        require_attr(item, "rank").unwrap_err(),
        MapError::missing_attribute("item", "rank")
    );
    assert!(matches!(
        require_int(item, "id"),
        Err(MapError::InvalidValue { kind: "integer", .. })
    ));
}
