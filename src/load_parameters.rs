// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Texture load parameters and their resolution from configuration documents.
//!
//! An asset description may carry a block like
//!
//! ```yaml
//! sample:
//!   filter: false
//!   wrap: mirrored_repeat
//! ```
//!
//! Every level is optional.  Each leaf is resolved on its own: anything missing, null, or of
//! the wrong shape takes the value from [`TextureLoadParameters::DEFAULT`].  Only a scalar that
//! is outside the recognized vocabulary is an error.
//!
//! ```
//! use texture_manager::{TextureLoadParameters, TextureWrapMode};
//!
//! let params = TextureLoadParameters::from_yaml_str("sample: {wrap: none}").unwrap();
//! assert!(params.sample_parameters.filter);
//! assert_eq!(params.sample_parameters.wrap_mode, TextureWrapMode::None);
//! ```
//!
//! Resolution touches no GPU state and may run on any thread.

mod config_node;

pub use config_node::ConfigNode;

use crate::Error;

/// How texture coordinates outside `0..=1` are sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureWrapMode {
    /// No wrapping; coordinates are clamped.
    None,
    Repeat,
    MirroredRepeat,
    ClampToEdge,
}

impl TextureWrapMode {
    /// Parses a configuration token (`none`, `repeat`, `mirrored_repeat`, `clamp_to_edge`).
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "none" => Some(TextureWrapMode::None),
            "repeat" => Some(TextureWrapMode::Repeat),
            "mirrored_repeat" => Some(TextureWrapMode::MirroredRepeat),
            "clamp_to_edge" => Some(TextureWrapMode::ClampToEdge),
            _ => None,
        }
    }
}

/// Sampling configuration for a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SampleParameters {
    /// Linear filtering when `true`, nearest-neighbour when `false`.
    pub filter: bool,
    pub wrap_mode: TextureWrapMode,
}

impl SampleParameters {
    pub const DEFAULT: SampleParameters = SampleParameters {
        filter: true,
        wrap_mode: TextureWrapMode::Repeat,
    };

    /// Nearest-neighbour, repeating.  Pixel art and UI atlases usually want this.
    pub const NEAREST: SampleParameters = SampleParameters {
        filter: false,
        wrap_mode: TextureWrapMode::Repeat,
    };
}

impl Default for SampleParameters {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Everything that controls how a texture is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureLoadParameters {
    pub sample_parameters: SampleParameters,
}

impl TextureLoadParameters {
    pub const DEFAULT: TextureLoadParameters = TextureLoadParameters {
        sample_parameters: SampleParameters::DEFAULT,
    };

    pub const NEAREST: TextureLoadParameters = TextureLoadParameters {
        sample_parameters: SampleParameters::NEAREST,
    };

    /**
    Resolves parameters from an optional configuration tree.

    # Errors
    [`Error::InvalidConfiguration`] when `sample.filter` or `sample.wrap` holds a scalar that is
    not recognized.  Absence is never an error.
    */
    pub fn from_config<N: ConfigNode>(node: Option<&N>) -> Result<Self, Error> {
        if let Some(node) = node {
            trace_unknown_keys(node, "", &["sample"]);
        }
        let sample = node.and_then(|n| n.child("sample"));
        if let Some(sample) = sample {
            trace_unknown_keys(sample, "sample.", &["filter", "wrap"]);
        }
        let defaults = Self::DEFAULT.sample_parameters;

        let filter = get_or_default(sample, "filter", "sample.filter", defaults.filter, parse_bool)?;
        let wrap_mode = get_or_default(
            sample,
            "wrap",
            "sample.wrap",
            defaults.wrap_mode,
            TextureWrapMode::from_token,
        )?;

        Ok(TextureLoadParameters {
            sample_parameters: SampleParameters { filter, wrap_mode },
        })
    }

    /// Parses a YAML document and resolves it with [`Self::from_config`].
    pub fn from_yaml_str(document: &str) -> Result<Self, Error> {
        if document.trim().is_empty() {
            return Self::from_config::<serde_yaml::Value>(None);
        }
        let value: serde_yaml::Value =
            serde_yaml::from_str(document).map_err(|e| Error::InvalidConfiguration {
                path: "<document>".to_string(),
                reason: e.to_string(),
            })?;
        Self::from_config(Some(&value))
    }
}

impl Default for TextureLoadParameters {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn parse_bool(token: &str) -> Option<bool> {
    match token {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Looks up one leaf: absent or non-scalar yields `default`, an unknown scalar is an error.
fn get_or_default<N: ConfigNode, T>(
    parent: Option<&N>,
    key: &str,
    path: &str,
    default: T,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T, Error> {
    let Some(scalar) = parent.and_then(|p| p.child(key)).and_then(|v| v.scalar()) else {
        return Ok(default);
    };
    parse(scalar.as_ref()).ok_or_else(|| Error::InvalidConfiguration {
        path: path.to_string(),
        reason: format!("unrecognized value `{scalar}`"),
    })
}

fn trace_unknown_keys<N: ConfigNode>(node: &N, prefix: &str, known: &[&str]) {
    for key in node.keys() {
        if !known.contains(&key.as_ref()) {
            logwise::trace_sync!(
                "ignoring texture parameter {key}",
                key = logwise::privacy::LogIt(&format!("{prefix}{key}"))
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(document: &str) -> SampleParameters {
        TextureLoadParameters::from_yaml_str(document)
            .unwrap()
            .sample_parameters
    }

    #[test]
    fn absent_tree_is_default() {
        let p = TextureLoadParameters::from_config::<serde_yaml::Value>(None).unwrap();
        assert_eq!(p, TextureLoadParameters::DEFAULT);
        assert_eq!(TextureLoadParameters::default(), TextureLoadParameters::DEFAULT);
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(resolve(""), SampleParameters::DEFAULT);
        assert_eq!(resolve("{}"), SampleParameters::DEFAULT);
        assert_eq!(resolve("sample: {}"), SampleParameters::DEFAULT);
    }

    #[test]
    fn fields_resolve_independently() {
        assert_eq!(
            resolve("sample: {filter: false}"),
            SampleParameters {
                filter: false,
                wrap_mode: TextureWrapMode::Repeat
            }
        );
        assert_eq!(
            resolve("sample: {wrap: clamp_to_edge}"),
            SampleParameters {
                filter: true,
                wrap_mode: TextureWrapMode::ClampToEdge
            }
        );
    }

    #[test]
    fn wrong_shapes_fall_back() {
        assert_eq!(resolve("sample: 3"), SampleParameters::DEFAULT);
        assert_eq!(resolve("sample: {filter: ~, wrap: [repeat]}"), SampleParameters::DEFAULT);
        assert_eq!(resolve("- sample"), SampleParameters::DEFAULT);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        assert_eq!(
            resolve("srgb: true\nsample: {filter: false, anisotropy: 16}"),
            SampleParameters {
                filter: false,
                wrap_mode: TextureWrapMode::Repeat
            }
        );
    }

    #[test]
    fn unknown_tokens_are_invalid() {
        let err = TextureLoadParameters::from_yaml_str("sample: {wrap: spiral}").unwrap_err();
        match err {
            Error::InvalidConfiguration { path, reason } => {
                assert_eq!(path, "sample.wrap");
                assert!(reason.contains("spiral"));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(
            TextureLoadParameters::from_yaml_str("sample: {filter: 2}"),
            Err(Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn malformed_document_is_invalid() {
        assert!(matches!(
            TextureLoadParameters::from_yaml_str("sample: {filter: [}"),
            Err(Error::InvalidConfiguration { .. })
        ));
    }
}
