// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
use std::borrow::Cow;

/// A node in a parsed key-value document.
///
/// The resolver only needs to walk mappings by key and to read scalars as text, so any
/// YAML/TOML/JSON-like tree can be adapted.
pub trait ConfigNode {
    /// The value under `key`, if this node is a mapping that has it.
    fn child(&self, key: &str) -> Option<&Self>;

    /// The textual form of this node if it is a non-null scalar.
    fn scalar(&self) -> Option<Cow<'_, str>>;

    /// String keys of this node, if it is a mapping.
    fn keys(&self) -> Vec<Cow<'_, str>>;
}

impl ConfigNode for serde_yaml::Value {
    fn child(&self, key: &str) -> Option<&Self> {
        self.as_mapping()?.get(key)
    }

    fn scalar(&self) -> Option<Cow<'_, str>> {
        match self {
            serde_yaml::Value::Bool(b) => Some(Cow::Owned(b.to_string())),
            serde_yaml::Value::Number(n) => Some(Cow::Owned(n.to_string())),
            serde_yaml::Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            _ => None,
        }
    }

    fn keys(&self) -> Vec<Cow<'_, str>> {
        match self.as_mapping() {
            Some(mapping) => mapping
                .keys()
                .filter_map(|k| k.as_str().map(Cow::Borrowed))
                .collect(),
            None => Vec::new(),
        }
    }
}
