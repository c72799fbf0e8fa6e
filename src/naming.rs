//! Slug and filename derivation.
//!
//! Post filenames follow the Jekyll convention `YYYY-MM-DD-<slug>.md`. The
//! slug is derived from the validated title:
//!
//! - `"Hello World"` → `hello-world`
//! - `"Café Été"` → `cafe-ete` (Latin accents folded to ASCII)
//! - `"Rust 2024, annotated"` → `rust-2024-annotated`
//!
//! Runs of anything that does not fold to an ASCII letter or digit collapse
//! to a single hyphen. Slugs are capped at 50 characters and never start or
//! end with a hyphen. A title made entirely of non-foldable symbols yields
//! an empty slug, which is reported as [`EmptySlugError`] so the user can
//! pick a different title.

use chrono::NaiveDate;
use thiserror::Error;

const MAX_SLUG_CHARS: usize = 50;

#[derive(Error, Debug)]
#[error("title produces an empty slug, please use a different title")]
pub struct EmptySlugError;

/// Compose the post filename from the title and resolved date.
pub fn derive_filename(title: &str, date: NaiveDate) -> Result<String, EmptySlugError> {
    let slug = slugify(title);
    if slug.is_empty() {
        return Err(EmptySlugError);
    }
    Ok(format!("{}-{}.md", date.format("%Y-%m-%d"), slug))
}

/// Derive a URL-safe slug: ASCII-folded, lowercase, hyphen-separated.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if let Some(folded) = fold_latin(ch) {
            slug.push_str(folded);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    // The slug is pure ASCII at this point, so byte truncation is char-safe.
    slug.truncate(MAX_SLUG_CHARS);
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Fold common Latin accented characters to their ASCII equivalents.
///
/// Characters outside this table (CJK, emoji, punctuation) act as word
/// separators instead.
fn fold_latin(ch: char) -> Option<&'static str> {
    let folded = match ch {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => "a",
        'æ' | 'Æ' => "ae",
        'ç' | 'Ç' => "c",
        'è' | 'é' | 'ê' | 'ë' | 'È' | 'É' | 'Ê' | 'Ë' => "e",
        'ì' | 'í' | 'î' | 'ï' | 'Ì' | 'Í' | 'Î' | 'Ï' => "i",
        'ñ' | 'Ñ' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => "o",
        'ù' | 'ú' | 'û' | 'ü' | 'Ù' | 'Ú' | 'Û' | 'Ü' => "u",
        'ý' | 'ÿ' | 'Ý' => "y",
        'ß' => "ss",
        'đ' | 'Đ' => "d",
        'ł' | 'Ł' => "l",
        'œ' | 'Œ' => "oe",
        'š' | 'Š' => "s",
        'ž' | 'Ž' => "z",
        _ => return None,
    };
    Some(folded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 12, 25).unwrap()
    }

    #[test]
    fn simple_title() {
        assert_eq!(slugify("Hello World"), "hello-world");
    }

    #[test]
    fn punctuation_collapses_to_single_hyphens() {
        assert_eq!(slugify("Rust   Tips & Tricks!"), "rust-tips-tricks");
        assert_eq!(slugify("a...b"), "a-b");
    }

    #[test]
    fn leading_and_trailing_separators_are_stripped() {
        assert_eq!(slugify("  (Hello)  "), "hello");
        assert_eq!(slugify("!wow!"), "wow");
    }

    #[test]
    fn latin_accents_fold_to_ascii() {
        assert_eq!(slugify("Café Été"), "cafe-ete");
        assert_eq!(slugify("Straße"), "strasse");
        assert_eq!(slugify("Señor Øre"), "senor-ore");
    }

    #[test]
    fn non_foldable_characters_separate_words() {
        assert_eq!(slugify("日本 travel"), "travel");
        assert_eq!(slugify("a→b"), "a-b");
    }

    #[test]
    fn truncated_to_fifty_chars() {
        let slug = slugify(&"a".repeat(80));
        assert_eq!(slug.len(), 50);
    }

    #[test]
    fn truncation_never_leaves_a_trailing_hyphen() {
        // 49 letters, then a word break exactly at the truncation point
        let title = format!("{} bb", "a".repeat(49));
        let slug = slugify(&title);
        assert_eq!(slug, "a".repeat(49));
        assert!(!slug.ends_with('-'));
    }

    #[test]
    fn filename_matches_jekyll_pattern() {
        let filename = derive_filename("Hello World", date()).unwrap();
        assert_eq!(filename, "2023-12-25-hello-world.md");

        let stem = filename.strip_suffix(".md").unwrap();
        let slug = &stem["2023-12-25-".len()..];
        assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
    }

    #[test]
    fn derivation_is_deterministic() {
        let a = derive_filename("Some Post Title", date()).unwrap();
        let b = derive_filename("Some Post Title", date()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn symbol_only_title_is_an_empty_slug() {
        assert_eq!(slugify("!!!"), "");
        assert!(derive_filename("!!!", date()).is_err());
        assert!(derive_filename("你好", date()).is_err());
    }
}
