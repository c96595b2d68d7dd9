//! Parser Configuration

use html5ever::ParseOpts;
use html5ever::tree_builder::TreeBuilderOpts;
use serde::{Deserialize, Serialize};

/// Parser configuration options.
///
/// Passed explicitly to [`crate::HtmlParser::new`]; there is no shared
/// global default instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Document URL recorded on the resulting `Document`
    pub url: String,

    /// Parse as if scripting were enabled (`<noscript>` becomes raw text)
    pub scripting_enabled: bool,

    /// Report exact parse errors (slower)
    pub exact_errors: bool,

    /// Omit the DOCTYPE node from the tree
    pub drop_doctype: bool,

    /// Treat the input as an `<iframe srcdoc>` document
    pub iframe_srcdoc: bool,
}

impl ParseOptions {
    /// Default options with a different document URL
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Translate into html5ever's option set
    pub(crate) fn to_html5ever(&self) -> ParseOpts {
        ParseOpts {
            tree_builder: TreeBuilderOpts {
                exact_errors: self.exact_errors,
                scripting_enabled: self.scripting_enabled,
                iframe_srcdoc: self.iframe_srcdoc,
                drop_doctype: self.drop_doctype,
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            url: "about:blank".to_string(),
            scripting_enabled: true,
            exact_errors: false,
            drop_doctype: false,
            iframe_srcdoc: false,
        }
    }
}
