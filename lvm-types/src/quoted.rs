// SPDX-License-Identifier: GPL-3.0-only

//! Integers that the LVM tools transmit as JSON strings.
//!
//! `lvm --reportformat json` quotes every numeric column (`"pv_size":"1024"`),
//! and older `losetup --json` releases do the same for their flag columns.
//! Newer `losetup` emits typed numbers and booleans instead, so decoding
//! accepts all three forms. Serialization always writes the quoted form.
//!
//! Use with `#[serde(with = "crate::quoted")]` on an `i64` field.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};

pub fn serialize<S>(value: &i64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(value)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(QuotedIntVisitor)
}

struct QuotedIntVisitor;

impl<'de> Visitor<'de> for QuotedIntVisitor {
    type Value = i64;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an integer, optionally quoted")
    }

    fn visit_str<E>(self, value: &str) -> Result<i64, E>
    where
        E: de::Error,
    {
        // Unset numeric columns come back as "".
        if value.is_empty() {
            return Ok(0);
        }
        value
            .parse()
            .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
    }

    fn visit_i64<E>(self, value: i64) -> Result<i64, E>
    where
        E: de::Error,
    {
        Ok(value)
    }

    fn visit_u64<E>(self, value: u64) -> Result<i64, E>
    where
        E: de::Error,
    {
        i64::try_from(value).map_err(|_| E::invalid_value(de::Unexpected::Unsigned(value), &self))
    }

    fn visit_bool<E>(self, value: bool) -> Result<i64, E>
    where
        E: de::Error,
    {
        Ok(i64::from(value))
    }

    fn visit_unit<E>(self) -> Result<i64, E>
    where
        E: de::Error,
    {
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Row {
        #[serde(with = "crate::quoted")]
        value: i64,
    }

    fn decode(json: &str) -> i64 {
        serde_json::from_str::<Row>(json).expect("decode row").value
    }

    #[test]
    fn decodes_quoted_integers() {
        assert_eq!(decode(r#"{"value":"1"}"#), 1);
        assert_eq!(decode(r#"{"value":"10737418240"}"#), 10_737_418_240);
        assert_eq!(decode(r#"{"value":"-1"}"#), -1);
    }

    #[test]
    fn accepts_typed_values_and_blank_columns() {
        assert_eq!(decode(r#"{"value":42}"#), 42);
        assert_eq!(decode(r#"{"value":true}"#), 1);
        assert_eq!(decode(r#"{"value":false}"#), 0);
        assert_eq!(decode(r#"{"value":""}"#), 0);
        assert_eq!(decode(r#"{"value":null}"#), 0);
    }

    #[test]
    fn rejects_non_numeric_strings() {
        let err = serde_json::from_str::<Row>(r#"{"value":"auto"}"#).unwrap_err();
        assert!(err.to_string().contains("auto"));
    }

    #[test]
    fn serializes_as_string() {
        let json = serde_json::to_string(&Row { value: 512 }).expect("serialize row");
        assert_eq!(json, r#"{"value":"512"}"#);
    }
}
