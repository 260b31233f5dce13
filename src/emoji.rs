//! Emoji-cluster segmentation for free-form tweet text.

use unicode_segmentation::UnicodeSegmentation;

/// Iterate the emoji clusters of `text` in order of appearance.
///
/// Segmentation is grapheme-based so that multi-codepoint emoji (flags,
/// skin-tone modifiers, ZWJ sequences) stay one indivisible unit; a
/// cluster counts as an emoji when it appears in the Unicode emoji table.
pub fn emoji_clusters(text: &str) -> impl Iterator<Item = &str> {
    text.graphemes(true).filter(|g| emojis::get(g).is_some())
}
