//! Album request body decoding
//!
//! Bodies are decoded field by field against a fixed schema so that a
//! rejected body always names the offending field and the JSON kind found.
//! Fields are checked in wire order: id, title, artist, price.
//!
//! Keys match case-insensitively, an exact match taking precedence. A
//! missing or `null` field decodes to its zero value (`0`, `""`, `0.0`);
//! only a present value of the wrong kind is rejected.

use serde_json::{Map, Value};

use crate::types::{Album, AlbumId};
use crate::{Error, Result};

/// Decode a raw request body into an [`Album`]
pub fn decode_album(body: &[u8]) -> Result<Album> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| Error::invalid_body(format!("malformed JSON: {}", e)))?;

    let fields = match value {
        Value::Object(fields) => fields,
        other => {
            return Err(Error::invalid_body(format!(
                "expected object, got {}",
                kind_of(&other)
            )))
        }
    };

    Ok(Album {
        id: integer_field(&fields, "id")?,
        title: string_field(&fields, "title")?,
        artist: string_field(&fields, "artist")?,
        price: float_field(&fields, "price")?,
    })
}

fn field<'a>(fields: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    fields
        .get(name)
        .or_else(|| {
            fields
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| value)
        })
        .filter(|value| !value.is_null())
}

fn integer_field(fields: &Map<String, Value>, name: &str) -> Result<AlbumId> {
    match field(fields, name) {
        Some(value) => value
            .as_i64()
            .ok_or_else(|| type_mismatch(name, "integer", value)),
        None => Ok(0),
    }
}

fn string_field(fields: &Map<String, Value>, name: &str) -> Result<String> {
    match field(fields, name) {
        Some(value) => value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| type_mismatch(name, "string", value)),
        None => Ok(String::new()),
    }
}

fn float_field(fields: &Map<String, Value>, name: &str) -> Result<f64> {
    match field(fields, name) {
        Some(value) => value
            .as_f64()
            .ok_or_else(|| type_mismatch(name, "float", value)),
        None => Ok(0.0),
    }
}

fn type_mismatch(name: &str, expected: &str, found: &Value) -> Error {
    Error::invalid_body(format!(
        "field \"{}\" must be {}, got {}",
        name,
        expected,
        kind_of(found)
    ))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(n) if n.as_i64().is_none() => "out-of-range integer",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid_album() {
        let body = br#"{"id":4,"title":"Blue Train","artist":"John Coltrane","price":56.99}"#;
        let album = decode_album(body).unwrap();
        assert_eq!(album, Album::new(4, "Blue Train", "John Coltrane", 56.99));
    }

    #[test]
    fn test_integer_price_is_accepted() {
        let body = br#"{"id":4,"title":"T","artist":"A","price":20}"#;
        let album = decode_album(body).unwrap();
        assert_eq!(album.price, 20.0);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let body = br#"{"id":4,"title":"T","artist":"A","price":1.5,"label":"Blue Note"}"#;
        assert!(decode_album(body).is_ok());
    }

    #[test]
    fn test_price_as_string_names_the_field() {
        let body = br#"{"id":4,"title":"Blue Train","artist":"John Coltrane","price":"56.99"}"#;
        let err = decode_album(body).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"invalid album body: field "price" must be float, got string"#
        );
    }

    #[test]
    fn test_fractional_id_is_rejected() {
        let body = br#"{"id":4.5,"title":"T","artist":"A","price":1.0}"#;
        let err = decode_album(body).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"invalid album body: field "id" must be integer, got float"#
        );
    }

    #[test]
    fn test_first_bad_field_in_wire_order_is_reported() {
        let body = br#"{"id":1,"title":7,"artist":null,"price":"x"}"#;
        let err = decode_album(body).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"invalid album body: field "title" must be string, got integer"#
        );
    }

    #[test]
    fn test_missing_fields_decode_to_zero_values() {
        let album = decode_album(br#"{"id":5}"#).unwrap();
        assert_eq!(album, Album::new(5, "", "", 0.0));

        let album = decode_album(b"{}").unwrap();
        assert_eq!(album, Album::new(0, "", "", 0.0));
    }

    #[test]
    fn test_null_fields_decode_to_zero_values() {
        let body = br#"{"id":null,"title":null,"artist":"A","price":null}"#;
        let album = decode_album(body).unwrap();
        assert_eq!(album, Album::new(0, "", "A", 0.0));
    }

    #[test]
    fn test_keys_match_case_insensitively() {
        let body = br#"{"ID":5,"Title":"T","ARTIST":"A","Price":2.5}"#;
        let album = decode_album(body).unwrap();
        assert_eq!(album, Album::new(5, "T", "A", 2.5));
    }

    #[test]
    fn test_exact_key_wins_over_case_variant() {
        let body = br#"{"Id":1,"id":2,"title":"T","artist":"A","price":1.0}"#;
        assert_eq!(decode_album(body).unwrap().id, 2);
    }

    #[test]
    fn test_case_variant_of_wrong_kind_is_rejected() {
        let body = br#"{"id":1,"title":"T","artist":"A","PRICE":"cheap"}"#;
        let err = decode_album(body).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"invalid album body: field "price" must be float, got string"#
        );
    }

    #[test]
    fn test_non_object_body() {
        let err = decode_album(b"[1,2,3]").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid album body: expected object, got array"
        );
    }

    #[test]
    fn test_malformed_json() {
        let err = decode_album(b"{\"id\":").unwrap_err();
        assert!(err.is_bad_input());
        assert!(err
            .to_string()
            .starts_with("invalid album body: malformed JSON:"));
    }
}
