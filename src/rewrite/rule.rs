//! Tag-rewrite rule: `<img src="*.jpg|*.png">` -> `<img src="*.webp">`.
//!
//! The rule is a single case-insensitive regex with four capture groups:
//!
//! ```text
//! <img class="hero" src='photos/cat.JPG' alt="x">
//! └───── prefix ──────┘└─ stem ────┘└ext┘└ suffix ┘
//! ```
//!
//! Only `ext` is replaced. Everything else, including quote style and the
//! casing of the tag and attribute names, is copied through unchanged.
//! Remote URLs are not special-cased.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Extension written in place of the matched one.
pub const TARGET_EXT: &str = "webp";

static IMG_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(<img\s+[^>]*src=["'])([^"']+\.)(jpg|png)(["'][^>]*>)"#).unwrap()
});

/// One matched `<img>` tag, split around its source extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImgRef<'a> {
    /// `<img` through `src=` and the opening quote.
    pub prefix: &'a str,
    /// Source path up to and including the final `.`.
    pub stem: &'a str,
    /// Original extension, `jpg` or `png` in any casing.
    pub ext: &'a str,
    /// Closing quote through the end of the tag.
    pub suffix: &'a str,
}

impl<'a> ImgRef<'a> {
    fn from_captures(caps: &Captures<'a>) -> Self {
        // All four groups are mandatory in the pattern
        let group = |i| caps.get(i).map_or("", |m| m.as_str());
        Self {
            prefix: group(1),
            stem: group(2),
            ext: group(3),
            suffix: group(4),
        }
    }

    /// Reassemble the tag with the webp extension.
    pub fn to_webp(&self) -> String {
        let mut out = String::with_capacity(
            self.prefix.len() + self.stem.len() + TARGET_EXT.len() + self.suffix.len(),
        );
        out.push_str(self.prefix);
        out.push_str(self.stem);
        out.push_str(TARGET_EXT);
        out.push_str(self.suffix);
        out
    }
}

/// Replacement callback for [`Regex::replace_all`].
fn to_webp(caps: &Captures<'_>) -> String {
    ImgRef::from_captures(caps).to_webp()
}

/// Rewrite every qualifying `<img>` source in `html`.
///
/// Returns `Cow::Borrowed` when nothing matched.
pub fn rewrite_img_sources(html: &str) -> Cow<'_, str> {
    IMG_TAG.replace_all(html, to_webp)
}

/// Collect all qualifying `<img>` references in `html`, in document order.
pub fn find_img_refs(html: &str) -> Vec<ImgRef<'_>> {
    IMG_TAG
        .captures_iter(html)
        .map(|caps| ImgRef::from_captures(&caps))
        .collect()
}
