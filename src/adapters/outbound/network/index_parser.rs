use crate::shared::Result;
use crate::verification::domain::ChartIndex;
use anyhow::{bail, Context};
use serde_yaml_ng::Value;

/// Parses the text of a Helm repository `index.yaml`
///
/// Only the keys of `entries` are used, and only their shape is checked
/// here. `serde_yaml_ng` keeps mapping keys in document order, which
/// becomes the verification order.
pub fn parse_index(content: &str) -> Result<ChartIndex> {
    let document: Value =
        serde_yaml_ng::from_str(content).context("Response body is not valid YAML")?;

    let Value::Mapping(root) = &document else {
        bail!("Expected a YAML mapping at the top level, found {}", describe(&document));
    };

    let entries = match root.get("entries") {
        None => bail!("Missing top-level 'entries' key"),
        // `entries:` with nothing under it is an empty repository
        Some(Value::Null) => return Ok(index_with_metadata(root, Vec::new())),
        Some(Value::Mapping(entries)) => entries,
        Some(other) => bail!("'entries' must be a mapping, found {}", describe(other)),
    };

    let charts = entries
        .keys()
        .map(chart_key)
        .collect::<Result<Vec<_>>>()?;

    Ok(index_with_metadata(root, charts))
}

fn index_with_metadata(root: &serde_yaml_ng::Mapping, charts: Vec<String>) -> ChartIndex {
    ChartIndex::new(charts)
        .with_api_version(scalar_string(root.get("apiVersion")))
        .with_generated(scalar_string(root.get("generated")))
}

fn chart_key(key: &Value) -> Result<String> {
    match scalar_string(Some(key)) {
        Some(name) => Ok(name),
        None => bail!("Chart names must be scalars, found {}", describe(key)),
    }
}

fn scalar_string(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
