// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text to fragment-id normalization.

use alloc::string::String;

/// Longest slug produced by [`slugify`], in characters.
pub const MAX_SLUG_LEN: usize = 80;

/// Id used when a heading's text has no sluggable characters.
pub const FALLBACK_SLUG: &str = "heading";

/// Derive a candidate fragment id from heading text.
///
/// The text is trimmed and lower-cased, every character outside ASCII word
/// characters (`[A-Za-z0-9_]`), whitespace, and `-` is dropped, each run of
/// whitespace becomes a single `-`, and the result is cut to
/// [`MAX_SLUG_LEN`] characters. An empty result yields [`FALLBACK_SLUG`].
///
/// ```
/// use waymark_outline::slugify;
///
/// assert_eq!(slugify("What's New in 2.0?"), "whats-new-in-20");
/// assert_eq!(slugify("  Pricing   &  Plans "), "pricing-plans");
/// assert_eq!(slugify("Hello !"), "hello-");
/// assert_eq!(slugify("¿¡!"), "heading");
/// ```
pub fn slugify(text: &str) -> String {
    let mut out = String::with_capacity(text.len().min(MAX_SLUG_LEN));
    let mut pending_space = false;
    for ch in text.trim().chars().flat_map(char::to_lowercase) {
        if ch.is_whitespace() {
            pending_space = true;
            continue;
        }
        if !(ch.is_ascii_alphanumeric() || ch == '_' || ch == '-') {
            continue;
        }
        if pending_space {
            out.push('-');
            pending_space = false;
        }
        out.push(ch);
    }
    // Stripping runs before collapsing, so whitespace that only precedes
    // dropped characters still leaves its hyphen.
    if pending_space {
        out.push('-');
    }
    // Only ASCII survives the filter, so byte and char lengths agree.
    out.truncate(MAX_SLUG_LEN);
    if out.is_empty() {
        out.push_str(FALLBACK_SLUG);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn lowercases_and_hyphenates() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("Multiple\t\n spaces"), "multiple-spaces");
    }

    #[test]
    fn keeps_word_chars_and_hyphens() {
        assert_eq!(slugify("snake_case and-kebab"), "snake_case-and-kebab");
        assert_eq!(slugify("a - b"), "a---b");
    }

    #[test]
    fn strips_punctuation_and_non_ascii() {
        assert_eq!(slugify("Café & Crème!"), "caf-crme");
        assert_eq!(slugify("100% (guaranteed)"), "100-guaranteed");
    }

    // Whitespace left behind by stripped characters still collapses to one hyphen.
    #[test]
    fn stripped_chars_between_spaces_collapse() {
        assert_eq!(slugify("Terms & Conditions"), "terms-conditions");
    }

    #[test]
    fn truncates_to_limit() {
        let long = "word ".repeat(40);
        let slug = slugify(&long);
        assert_eq!(slug.len(), MAX_SLUG_LEN);
        assert!(slug.starts_with("word-word-"));
    }

    #[test]
    fn empty_or_symbol_only_text_falls_back() {
        assert_eq!(slugify(""), FALLBACK_SLUG);
        assert_eq!(slugify("   "), FALLBACK_SLUG);
        assert_eq!(slugify("!!!???"), FALLBACK_SLUG.to_string());
    }

    #[test]
    fn whitespace_before_stripped_chars_keeps_its_hyphen() {
        assert_eq!(slugify("Hello !"), "hello-");
        assert_eq!(slugify("! Hello"), "-hello");
        assert_eq!(slugify("Ready? Set ?!"), "ready-set-");
        assert_eq!(slugify("!!! ???"), "-");
    }
}
