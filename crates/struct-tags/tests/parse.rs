//! Behavioural tests for annotation parsing through the public API.

use rstest::rstest;
use struct_tags::{StructTag, Tag, TagOption, lookup, parse};

fn parse_all(input: &str) -> Vec<Tag> {
    let Ok(tags) = parse(input);
    tags
}

fn only_tag(input: &str) -> Tag {
    let mut tags = parse_all(input);
    assert_eq!(tags.len(), 1, "expected exactly one tag in {input:?}");
    tags.remove(0)
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("plain text")]
#[case("json:id")]
#[case(r#":"orphan""#)]
fn inputs_without_segments_yield_nothing(#[case] input: &str) {
    assert!(parse_all(input).is_empty());
}

#[rstest]
#[case(r#"json:"id,omitempty""#, "json", "id,omitempty")]
#[case(
    r#"gorm:"embedded;embeddedPrefix:author_""#,
    "gorm",
    "embedded;embeddedPrefix:author_"
)]
#[case(
    r#"gorm:"constraint:OnUpdate:CASCADE,OnDelete:SET NULL;""#,
    "gorm",
    "constraint:OnUpdate:CASCADE,OnDelete:SET NULL;"
)]
fn keeps_raw_key_and_value(#[case] input: &str, #[case] key: &str, #[case] value: &str) {
    let tag = only_tag(input);
    assert_eq!(tag.raw(), input);
    assert_eq!(tag.key(), key);
    assert_eq!(tag.value(), value);
}

#[rstest]
#[case(r#"json:"id""#, "id", vec![])]
#[case(r#"json:"id,omitempty""#, "id", vec![TagOption::flag("omitempty")])]
#[case(r#"json:",omitempty""#, "", vec![TagOption::flag("omitempty")])]
#[case(
    r#"json:"id,omitempty,default""#,
    "id",
    vec![TagOption::flag("omitempty"), TagOption::flag("default")]
)]
#[case(
    r#"gorm:"embedded;embeddedPrefix:author_""#,
    "embedded",
    vec![TagOption::with_value("embeddedPrefix", "author_")]
)]
#[case(
    r#"gorm:"constraint:OnUpdate:CASCADE,OnDelete:SET NULL;""#,
    "",
    vec![TagOption::with_value("constraint", "OnUpdate:CASCADE,OnDelete:SET NULL;")]
)]
#[case(r#"test:"key:value""#, "", vec![TagOption::with_value("key", "value")])]
#[case(
    r#"test:"key1:value1,key2:value2""#,
    "",
    vec![TagOption::with_value("key1", "value1"), TagOption::with_value("key2", "value2")]
)]
#[case(r#"csv:"array,split:;""#, "array", vec![TagOption::with_value("split", ";")])]
#[case(r#"json:"-""#, "", vec![TagOption::flag("-")])]
fn decomposes_name_and_options(
    #[case] input: &str,
    #[case] name: &str,
    #[case] options: Vec<TagOption>,
) {
    let tag = only_tag(input);
    assert_eq!(tag.name(), name);
    assert_eq!(tag.options(), options.as_slice());
}

#[test]
fn parses_composite_annotations_in_order() {
    let tags = parse_all(
        r#"json:"id,omitempty,default" gorm:"constraint:OnUpdate:CASCADE,OnDelete:SET NULL;""#,
    );
    let keys: Vec<_> = tags.iter().map(Tag::key).collect();
    assert_eq!(keys, ["json", "gorm"]);

    let summary: Vec<_> = tags
        .iter()
        .map(|tag| (tag.name(), tag.options().len()))
        .collect();
    assert_eq!(summary, [("id", 2), ("", 1)]);
}

#[test]
fn same_value_under_two_keys_parses_independently() {
    let tags = parse_all(r#"json:"id" xml:"id""#);
    assert_eq!(tags.len(), 2);
    let (Some(first), Some(second)) = (tags.first(), tags.get(1)) else {
        panic!("expected two tags");
    };
    assert_eq!((first.key(), first.name()), ("json", "id"));
    assert_eq!((second.key(), second.name()), ("xml", "id"));
}

fn structure(tag: &Tag) -> (&str, &str, &str, &[TagOption]) {
    (tag.key(), tag.value(), tag.name(), tag.options())
}

#[rstest]
#[case(r#"json:"id,omitempty""#)]
#[case(r#"gorm:"embedded;embeddedPrefix:author_""#)]
#[case(r#"gorm:"constraint:OnUpdate:CASCADE,OnDelete:SET NULL;""#)]
#[case(r#"excel:"column:age" xml:"age" json:",omitempty""#)]
#[case(r#"db:"""#)]
#[case(r#"gorm:"  name ,x""#)]
#[case(r#"json :"id" xml  :" name ""#)]
fn reparsing_a_rebuilt_segment_keeps_its_structure(#[case] input: &str) {
    for tag in parse_all(input) {
        let rebuilt = only_tag(&tag.to_segment_string());
        assert_eq!(structure(&rebuilt), structure(&tag));
    }
}

#[rstest]
#[case(r#"json:"id,omitempty""#)]
#[case(r#"gorm:"constraint:OnUpdate:CASCADE,OnDelete:SET NULL;""#)]
#[case(r#"excel:"column:age" xml:"age" json:",omitempty""#)]
#[case(r#"db:"""#)]
fn unpadded_segments_rebuild_to_an_equal_tag(#[case] input: &str) {
    for tag in parse_all(input) {
        assert_eq!(only_tag(&tag.to_segment_string()), tag);
    }
}

#[rstest]
#[case(r#"gorm:"  name ,x""#, r#"gorm:"name ,x""#)]
#[case(r#"json :"id""#, r#"json:"id""#)]
fn padded_segments_rebuild_without_padding(#[case] input: &str, #[case] expected: &str) {
    let tag = only_tag(input);
    assert_eq!(tag.raw(), input);
    assert_eq!(tag.to_segment_string(), expected);
    assert_ne!(only_tag(expected).raw(), tag.raw());
}

#[rstest]
#[case(r#"json :"id,omitempty""#, &[("json", "id,omitempty")])]
#[case(r#"json:"id" xml :"name""#, &[("json", "id"), ("xml", "name")])]
#[case("json\t:\"id\"\nxml  :\"\"", &[("json", "id"), ("xml", "")])]
fn keys_may_be_padded_before_the_colon(#[case] input: &str, #[case] expected: &[(&str, &str)]) {
    let tags = parse_all(input);
    let pairs: Vec<_> = tags.iter().map(|tag| (tag.key(), tag.value())).collect();
    assert_eq!(pairs, expected);
}

#[test]
fn lookup_keeps_a_provider_key_with_spaces() {
    let source = std::collections::HashMap::from([(
        String::from("my key"),
        String::from("id,omitempty"),
    )]);
    let tag = lookup(&source, "my key");
    assert_eq!(tag.as_ref().map(Tag::key), Some("my key"));
    assert_eq!(tag.as_ref().map(Tag::name), Some("id"));
    assert!(tag.is_some_and(|tag| tag.has_option("omitempty")));
}

#[test]
fn option_queries_are_consistent() {
    let tag = only_tag(r#"gorm:"index;index:idx_name,unique;not null""#);
    for key in ["index", "unique", "not null", "idx_name", "missing"] {
        assert_eq!(tag.get_option(key), tag.get_option(key));
        assert_eq!(tag.has_option(key), tag.get_option(key).is_some(), "{key}");
    }
    assert_eq!(tag.get_option("index"), Some(&TagOption::with_value("index", "idx_name")));
}

/// Tags as they would be attached to the fields of an `Employee` record.
const EMPLOYEE_FIELDS: [(&str, &str); 3] = [
    ("id", r#"json:"id" xml:"id" excel:"id""#),
    ("name", r#"json:"name,string" xml:"name" excel:"name""#),
    ("age", r#"json:"age,omitempty" xml:"age" excel:"column:age""#),
];

#[test]
fn every_field_annotation_parses() {
    for (field, raw) in EMPLOYEE_FIELDS {
        let tags = parse_all(raw);
        let keys: Vec<_> = tags.iter().map(Tag::key).collect();
        assert_eq!(keys, ["json", "xml", "excel"], "field {field}");
    }
}

#[rstest]
#[case(0, "json", Some("id"))]
#[case(1, "json", Some("name"))]
#[case(1, "xml", Some("name"))]
#[case(2, "excel", Some(""))]
#[case(2, "yaml", None)]
fn looks_up_field_annotations(#[case] index: usize, #[case] key: &str, #[case] name: Option<&str>) {
    let Some((_, raw)) = EMPLOYEE_FIELDS.get(index) else {
        panic!("no field at index {index}");
    };
    let tag = lookup(&StructTag::new(raw), key);
    assert_eq!(tag.as_ref().map(Tag::name), name);
    assert!(tag.is_none_or(|tag| tag.key() == key));
}

#[test]
fn parsed_tags_cross_threads() {
    let handles: Vec<_> = EMPLOYEE_FIELDS
        .iter()
        .map(|&(_, raw)| std::thread::spawn(move || parse_all(raw)))
        .collect();
    for (handle, (_, raw)) in handles.into_iter().zip(EMPLOYEE_FIELDS) {
        let Ok(tags) = handle.join() else {
            panic!("parser thread panicked");
        };
        assert_eq!(tags, parse_all(raw));
    }
}
