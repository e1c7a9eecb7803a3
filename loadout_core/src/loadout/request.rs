//! LoadoutRequest - Lenient decoding of loadouts received from the server

use super::{lenient_flag, Loadout};
use crate::types::RoleCategory;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A loadout as requested by the session layer
///
/// Flags are `true` only when the incoming value is literally `true`;
/// missing, null, numeric or string values read as `false`. A known
/// `role_category` overrides the individual flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadoutRequest {
    #[serde(default, deserialize_with = "lenient_flag")]
    pub arrows: bool,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub longsword: bool,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub shield: bool,
    #[serde(
        default,
        rename = "miniSword",
        alias = "mini_sword",
        deserialize_with = "lenient_flag"
    )]
    pub mini_sword: bool,
    #[serde(
        default,
        alias = "roleCategory",
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_role"
    )]
    pub role_category: Option<RoleCategory>,
}

fn lenient_role<'de, D>(deserializer: D) -> Result<Option<RoleCategory>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s.parse().ok(),
        _ => None,
    })
}

impl LoadoutRequest {
    /// Parse a request from JSON text
    ///
    /// Only malformed JSON is an error; well-formed input decodes the same
    /// way as [`LoadoutRequest::from_value`].
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(&value))
    }

    /// Decode a request from an already-parsed JSON value
    ///
    /// Anything that is not an object decodes as an empty request.
    pub fn from_value(value: &Value) -> Self {
        if !value.is_object() {
            return LoadoutRequest::default();
        }
        serde_json::from_value(value.clone()).unwrap_or_default()
    }

    /// The loadout to hand to the normalizer
    pub fn resolve(&self) -> Loadout {
        match self.role_category {
            Some(role) => role.loadout(),
            None => Loadout {
                arrows: self.arrows,
                longsword: self.longsword,
                shield: self.shield,
                mini_sword: self.mini_sword,
            },
        }
    }
}

impl From<Loadout> for LoadoutRequest {
    fn from(loadout: Loadout) -> Self {
        LoadoutRequest {
            arrows: loadout.arrows,
            longsword: loadout.longsword,
            shield: loadout.shield,
            mini_sword: loadout.mini_sword,
            role_category: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_boolean_flags_read_false() {
        let request = LoadoutRequest::from_value(&json!({
            "arrows": 1,
            "longsword": "yes",
            "shield": null,
            "miniSword": true
        }));
        assert!(!request.arrows);
        assert!(!request.longsword);
        assert!(!request.shield);
        assert!(request.mini_sword);
    }

    #[test]
    fn test_role_category_overrides_flags() {
        let request = LoadoutRequest::from_json(
            r#"{"role_category": " Shield+Sword ", "arrows": true, "miniSword": true}"#,
        )
        .unwrap();
        assert_eq!(request.role_category, Some(RoleCategory::ShieldSword));
        assert_eq!(request.resolve(), Loadout::axe_and_shield());
    }

    #[test]
    fn test_unknown_role_falls_back_to_flags() {
        let request = LoadoutRequest::from_value(&json!({
            "role_category": "paladin",
            "longsword": true
        }));
        assert_eq!(request.role_category, None);
        assert_eq!(request.resolve(), Loadout::axe());

        let numeric_role = LoadoutRequest::from_value(&json!({ "role_category": 3 }));
        assert_eq!(numeric_role.role_category, None);
    }

    #[test]
    fn test_non_object_is_empty_request() {
        assert_eq!(LoadoutRequest::from_value(&json!(null)), LoadoutRequest::default());
        assert_eq!(LoadoutRequest::from_value(&json!([true])), LoadoutRequest::default());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(LoadoutRequest::from_json("{arrows").is_err());
    }

    #[test]
    fn test_json_text_matches_value_decoding() {
        for text in ["null", "[true]", "42", r#""archer""#] {
            let value: Value = serde_json::from_str(text).unwrap();
            assert_eq!(
                LoadoutRequest::from_json(text).unwrap(),
                LoadoutRequest::from_value(&value)
            );
        }
        assert_eq!(LoadoutRequest::from_json("null").unwrap(), LoadoutRequest::default());
    }

    #[test]
    fn test_snake_case_dagger_alias() {
        let request = LoadoutRequest::from_value(&json!({ "mini_sword": true }));
        assert!(request.mini_sword);
    }
}
