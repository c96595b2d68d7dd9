//! Collection Configuration

use serde::{Deserialize, Serialize};

/// Elements whose content is not rendered as page text
pub const NON_RENDERED_ELEMENTS: &[&str] = &["script", "style", "noscript"];

/// Text collection options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectOptions {
    /// Local names of elements whose subtrees are skipped (ASCII
    /// case-insensitive). Never applies to the root itself.
    pub skip_elements: Vec<String>,

    /// Release spare buffer capacity before returning
    pub shrink_to_fit: bool,
}

impl CollectOptions {
    /// Skip script, style and noscript content
    pub fn rendered() -> Self {
        Self {
            skip_elements: NON_RENDERED_ELEMENTS.iter().map(|s| s.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Add an element name to the skip list
    pub fn skip(mut self, local_name: impl Into<String>) -> Self {
        self.skip_elements.push(local_name.into());
        self
    }
}

/// Whether `local_name` appears in `skip`
pub(crate) fn is_skipped(skip: &[String], local_name: &str) -> bool {
    skip.iter().any(|s| s.eq_ignore_ascii_case(local_name))
}
