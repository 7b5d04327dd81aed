use std::io::Read;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::{InsightError, Result};
use crate::models::k8s::ObjectList;

/// Read `source` (a path, or `-` for stdin) into a string.
pub fn read_source(source: &str) -> Result<String> {
    let read_err = |e: std::io::Error| InsightError::Read {
        source_name: source.to_string(),
        source: e,
    };
    if source == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map_err(read_err)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(source).map_err(read_err)
    }
}

/// Decode JSON or YAML holding one object, a `*List` document or a bare array.
///
/// The document shape is settled before the objects are decoded, so a bad
/// list item is reported instead of being read as some other shape.
pub fn decode_items<T: DeserializeOwned>(source_name: &str, data: &str) -> Result<Vec<T>> {
    let decode_err = |message: String| InsightError::Decode {
        source_name: source_name.to_string(),
        message,
    };

    let trimmed = data.trim_start();
    let document: Value = if trimmed.starts_with('{') || trimmed.starts_with('[') {
        debug!("decoding {} as JSON", source_name);
        serde_json::from_str(data).map_err(|e| decode_err(e.to_string()))?
    } else {
        debug!("decoding {} as YAML", source_name);
        serde_yaml::from_str(data).map_err(|e| decode_err(e.to_string()))?
    };

    if document.is_array() {
        return serde_json::from_value(document).map_err(|e| decode_err(e.to_string()));
    }
    if document.get("items").is_some() {
        let list: ObjectList<T> =
            serde_json::from_value(document).map_err(|e| decode_err(e.to_string()))?;
        debug!(
            "{}: {} with {} items",
            source_name,
            list.type_meta.kind,
            list.items.len()
        );
        return Ok(list.items);
    }
    serde_json::from_value(document)
        .map(|item| vec![item])
        .map_err(|e| decode_err(e.to_string()))
}

pub fn load_items<T: DeserializeOwned>(source: &str) -> Result<Vec<T>> {
    let data = read_source(source)?;
    decode_items(source, &data)
}
