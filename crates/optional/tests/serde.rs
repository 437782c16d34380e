#![cfg(feature = "serde")]

use optional::{empty, Optional};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Profile {
    name: String,
    nickname: Optional<String>,
}

#[test]
fn present_serializes_as_plain_value() {
    assert_eq!(serde_json::to_string(&Optional::present(5)).unwrap(), "5");
    assert_eq!(serde_json::to_string(&empty::<u8>()).unwrap(), "null");
}

#[test]
fn null_deserializes_to_empty() {
    let p: Profile = serde_json::from_str(r#"{"name":"ann","nickname":null}"#).unwrap();
    assert_eq!(p.nickname, empty());
    let p: Profile = serde_json::from_str(r#"{"name":"bo","nickname":"b"}"#).unwrap();
    assert_eq!(p.nickname, Optional::present("b".to_string()));
}

#[test]
fn struct_field_survives_json() {
    let p = Profile { name: "cy".into(), nickname: Optional::present("c".into()) };
    let json = serde_json::to_string(&p).unwrap();
    assert_eq!(json, r#"{"name":"cy","nickname":"c"}"#);
    assert_eq!(serde_json::from_str::<Profile>(&json).unwrap(), p);
}
