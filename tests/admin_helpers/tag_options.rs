//! Field tag options as read from resource definitions

use std::collections::HashMap;

use adminkit::{parse_tag_options, TagOptions};

#[test]
fn test_field_tag() {
    let options = parse_tag_options("type:varchar(100);UNIQUE; default : n/a");
    assert_eq!(options.get("TYPE"), Some("varchar(100)"));
    assert!(options.contains("UNIQUE"));
    assert_eq!(options.get("DEFAULT"), Some(" n/a"));
    assert_eq!(options.len(), 3);
}

#[test]
fn test_into_hash_map() {
    let map: HashMap<String, String> = parse_tag_options("SIZE:10; REQUIRED").into();
    let expected: HashMap<String, String> = [("SIZE", "10"), ("REQUIRED", "REQUIRED")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    assert_eq!(map, expected);
}

#[test]
fn test_parse_twice_is_equal() {
    let spec = "a:1;b;;c:x:y";
    let first: TagOptions = spec.parse().unwrap();
    let second: TagOptions = spec.parse().unwrap();
    assert_eq!(first, second);
    assert_eq!(first.get("C"), Some("x:y"));
    assert_eq!(first.get(""), Some(""));
}
