use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Untrusted authored fields of one block, everything except `_type` / `_key`.
pub type Fields = Map<String, Value>;

/// One authored block exactly as the content store returned it.
///
/// Never rendered directly: it has to go through the normalizer first.
/// Anything that is not a JSON object becomes a block with an empty tag,
/// which no registry resolves, so it is skipped like any unknown type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawBlock {
    pub type_tag: String,
    pub key: Option<String>,
    pub fields: Fields,
}

impl RawBlock {
    pub fn new(type_tag: impl Into<String>) -> Self {
        Self {
            type_tag: type_tag.into(),
            key: None,
            fields: Fields::new(),
        }
    }

    /// Builder-style field setter, mostly for tests and re-emitting configs
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn from_value(value: Value) -> Self {
        let Value::Object(mut fields) = value else {
            return Self::default();
        };
        let type_tag = match fields.remove("_type") {
            Some(Value::String(s)) => s,
            _ => String::new(),
        };
        let key = match fields.remove("_key") {
            Some(Value::String(s)) => Some(s),
            _ => None,
        };
        Self {
            type_tag,
            key,
            fields,
        }
    }

    pub fn to_value(&self) -> Value {
        let mut obj = self.fields.clone();
        obj.insert("_type".into(), Value::String(self.type_tag.clone()));
        if let Some(key) = &self.key {
            obj.insert("_key".into(), Value::String(key.clone()));
        }
        Value::Object(obj)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

impl Serialize for RawBlock {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RawBlock {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(RawBlock::from_value)
    }
}

/// `null` or a missing list both mean "no blocks".
pub fn deserialize_block_list<'de, D>(deserializer: D) -> Result<Vec<RawBlock>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<Value>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(RawBlock::from_value)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_splits_system_fields() {
        let block = RawBlock::from_value(json!({
            "_type": "jitterPlot",
            "_key": "abc",
            "width": "900"
        }));
        assert_eq!(block.type_tag, "jitterPlot");
        assert_eq!(block.key.as_deref(), Some("abc"));
        assert_eq!(block.get("width"), Some(&json!("900")));
        assert!(block.get("_type").is_none());
    }

    #[test]
    fn test_non_object_and_bad_tag() {
        assert_eq!(RawBlock::from_value(json!("text")), RawBlock::default());
        let block = RawBlock::from_value(json!({ "_type": 7 }));
        assert_eq!(block.type_tag, "");
    }
}
