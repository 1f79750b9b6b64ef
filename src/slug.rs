//! Organization slug derivation.
//!
//! The provider treats slugs as identifiers, so this transformation must stay
//! byte-for-byte stable across releases: a renamed implementation that slugs
//! `"A & B"` differently would orphan existing organizations.

#[cfg(test)]
#[path = "slug_test.rs"]
mod slug_test;

/// Fallback returned when a name reduces to nothing slug-worthy.
const EMPTY_SLUG_FALLBACK: &str = "org";

/// Derive a URL-safe slug from a human-readable organization name.
///
/// Lowercases, drops possessive `’s` (the smart-punctuation apostrophe mobile
/// keyboards insert; a straight `'` is removed by the alphanumeric filter
/// instead, keeping its trailing `s`), spells out `&`, hyphenates spaces,
/// strips everything else non-alphanumeric, collapses hyphen runs, and trims
/// one leading/trailing hyphen. Returns `"org"` when nothing survives.
#[must_use]
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    let replaced = lowered
        .replace("\u{2019}s", "")
        .replace('&', "and")
        .replace(' ', "-");

    let mut slug: String = replaced
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect();

    while slug.contains("--") {
        slug = slug.replace("--", "-");
    }

    let slug = slug.strip_prefix('-').unwrap_or(&slug);
    let slug = slug.strip_suffix('-').unwrap_or(slug);

    if slug.is_empty() {
        EMPTY_SLUG_FALLBACK.to_owned()
    } else {
        slug.to_owned()
    }
}
