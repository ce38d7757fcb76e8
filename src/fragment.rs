//! Positioned text fragments — the input model.
//!
//! A document source (a PDF text extractor, typically) yields one `Vec` of
//! fragments per page, in roughly reading order. Only the two positional
//! components of the source's transform are carried; font and color metadata
//! are irrelevant to banded column routing.

use serde::{Deserialize, Serialize};

/// One positioned piece of text extracted from a document page.
///
/// Fragments are immutable once produced by the source. Their order within a
/// page matters: the reconstructor assumes approximately left-to-right,
/// top-to-bottom emission per visual line, with lines not pre-grouped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    /// The text content of this fragment.
    pub text: String,
    /// Horizontal placement, in the source's coordinate units.
    pub x: f32,
    /// Vertical placement, in the source's coordinate units.
    pub y: f32,
}

impl Fragment {
    /// Create a new fragment.
    ///
    /// # Examples
    ///
    /// ```
    /// use schedule_oxide::fragment::Fragment;
    ///
    /// let frag = Fragment::new("A100", 10.0, 650.0);
    /// assert_eq!(frag.text, "A100");
    /// ```
    pub fn new(text: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
        }
    }
}

/// An ordered sequence of fragments from one document page.
pub type Page = Vec<Fragment>;
