//! history.json / solution.json 中的单条记录
//!
//! 只解释 `index` 与 `expiration`，其余字段原样保留，写回时不丢失。

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RoundRecord {
    pub fn new(index: usize, expiration: impl Into<String>) -> Self {
        Self {
            index: Some(index),
            expiration: Some(expiration.into()),
            extra: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_index_and_extra_fields() {
        let records: Vec<RoundRecord> = serde_json::from_str(
            r#"[{"index": 3, "expiration": "2024-01-02 GMT+1"}, {"note": "manual"}, {"index": null}]"#,
        )
        .unwrap();
        assert_eq!(records[0].index, Some(3));
        assert_eq!(records[1].index, None);
        assert_eq!(records[1].extra.get("note"), Some(&Value::from("manual")));
        assert_eq!(records[2].index, None);

        let out = serde_json::to_string(&records[1]).unwrap();
        assert_eq!(out, r#"{"note":"manual"}"#);
    }

    #[test]
    fn test_serialize_field_order() {
        let out = serde_json::to_string(&RoundRecord::new(5, "2024-03-04 GMT+1")).unwrap();
        assert_eq!(out, r#"{"index":5,"expiration":"2024-03-04 GMT+1"}"#);
    }
}
