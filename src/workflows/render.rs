use anyhow::Result;
use serde_json::Value;

use crate::domain::models::Series;

/// Renders a plain value the way a console logs an object:
/// `{ name: Breaking Bad, seasons: 5 }`.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Object(map) if map.is_empty() => "{}".to_string(),
        Value::Object(map) => {
            let fields = map
                .iter()
                .map(|(key, value)| format!("{key}: {}", render_value(value)))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{{ {fields} }}")
        }
        Value::Array(items) => {
            let items = items.iter().map(render_value).collect::<Vec<_>>().join(", ");
            format!("[{items}]")
        }
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn render_record(series: &Series) -> Result<String> {
    Ok(render_value(&serde_json::to_value(series)?))
}
