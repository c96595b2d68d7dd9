//! Text Collector
//!
//! Assembles the fragments from [`TextNodes`] into one owned `String`.
//! Growth goes through `try_reserve`, so running out of memory surfaces as
//! [`TextError::AllocationFailure`] and the partial buffer is dropped.

use textcontent_dom::{DomTree, NodeId};

use crate::{CollectOptions, TextError, TextNodes};

/// Collects the text content of a subtree
#[derive(Debug, Clone, Default)]
pub struct TextCollector {
    options: CollectOptions,
}

impl TextCollector {
    /// Create a collector with explicit options
    pub fn new(options: CollectOptions) -> Self {
        Self { options }
    }

    /// Options this collector was built with
    pub fn options(&self) -> &CollectOptions {
        &self.options
    }

    /// Concatenate every text node under `root` in document order
    pub fn collect(&self, tree: &DomTree, root: NodeId) -> Result<String, TextError> {
        let fragments = TextNodes::with_skipped(tree, root, &self.options.skip_elements)?;

        let mut text = String::new();
        let mut count = 0usize;
        for fragment in fragments {
            reserve(&mut text, fragment.len())?;
            text.push_str(fragment);
            count += 1;
        }

        if self.options.shrink_to_fit {
            text.shrink_to_fit();
        }

        tracing::debug!(
            root = %root,
            fragments = count,
            bytes = text.len(),
            "collected text content"
        );
        Ok(text)
    }
}

/// Amortized (geometric) growth that reports failure instead of aborting
fn reserve(buf: &mut String, additional: usize) -> Result<(), TextError> {
    buf.try_reserve(additional)
        .map_err(|_| TextError::AllocationFailure {
            requested: buf.len().saturating_add(additional),
        })
}
