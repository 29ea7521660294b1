//! Speaker-label canonicalization and word counting

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximal runs of Unicode word characters.
static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("valid word pattern"));

/// Canonicalize a raw speaker label.
///
/// Drops everything from the first comma onward (role qualifiers such as
/// "Nora, hustru"), collapses whitespace, strips trailing punctuation and
/// title-cases the result. Returns `None` when nothing is left.
///
/// The function is total and idempotent: feeding a canonical name back in
/// returns it unchanged.
pub fn normalize_name(raw: Option<&str>) -> Option<String> {
    let raw = raw?;
    let head = raw.split(',').next().unwrap_or_default();
    let collapsed = head.split_whitespace().collect::<Vec<_>>().join(" ");
    let stripped = collapsed.trim_end_matches(|c: char| c.is_whitespace() || is_punctuation(c));
    if stripped.is_empty() {
        return None;
    }
    Some(title_case(stripped))
}

/// Count maximal runs of word characters in `text`.
pub fn count_words(text: &str) -> usize {
    WORD_RE.find_iter(text).count()
}

/// Iterate the word tokens of `text` in order.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    WORD_RE.find_iter(text).map(|m| m.as_str())
}

fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
        || matches!(c, '…' | '–' | '—' | '«' | '»' | '·' | '¿' | '¡')
}

/// Uppercase the first letter of every alphabetic run, lowercase the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                // Only the first char of a multi-char uppercase stays upper: ß -> Ss.
                let mut upper = c.to_uppercase();
                if let Some(first) = upper.next() {
                    out.push(first);
                }
                out.extend(upper.flat_map(char::to_lowercase));
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_role_qualifier_and_title_cases() {
        assert_eq!(
            normalize_name(Some("ØRNULF, Sorenskriver")).as_deref(),
            Some("Ørnulf")
        );
        assert_eq!(normalize_name(Some("Nora, hustru")).as_deref(), Some("Nora"));
    }

    #[test]
    fn strips_trailing_punctuation_and_whitespace() {
        assert_eq!(normalize_name(Some("HELMER.  ")).as_deref(), Some("Helmer"));
        assert_eq!(normalize_name(Some("Doktor Rank:")).as_deref(), Some("Doktor Rank"));
        assert_eq!(normalize_name(Some("fru   linde . .")).as_deref(), Some("Fru Linde"));
    }

    #[test]
    fn collapses_internal_whitespace() {
        assert_eq!(
            normalize_name(Some("  den \t gamle\nmann ")).as_deref(),
            Some("Den Gamle Mann")
        );
    }

    #[test]
    fn empty_inputs_have_no_name() {
        assert_eq!(normalize_name(None), None);
        assert_eq!(normalize_name(Some("")), None);
        assert_eq!(normalize_name(Some("   ")), None);
        assert_eq!(normalize_name(Some(", some role")), None);
        assert_eq!(normalize_name(Some("...")), None);
    }

    #[test]
    fn normalization_is_idempotent() {
        let names = [
            "ØRNULF, Sorenskriver",
            "fru linde.",
            "O'NEIL",
            "Anne-MARIE",
            "Mrs. Alving",
            "ßigrid",
            "ﬁnn",
            "STRAßE",
        ];
        for raw in names {
            let once = normalize_name(Some(raw)).unwrap();
            let twice = normalize_name(Some(&once)).unwrap();
            assert_eq!(once, twice, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn expanding_uppercase_keeps_one_capital() {
        assert_eq!(normalize_name(Some("ßigrid")).as_deref(), Some("Ssigrid"));
        assert_eq!(normalize_name(Some("ﬁnn")).as_deref(), Some("Finn"));
        assert_eq!(normalize_name(Some("STRAßE")).as_deref(), Some("Straße"));
    }

    #[test]
    fn title_case_restarts_after_non_letters() {
        assert_eq!(normalize_name(Some("anne-marie")).as_deref(), Some("Anne-Marie"));
        assert_eq!(normalize_name(Some("o'neil")).as_deref(), Some("O'Neil"));
    }

    #[test]
    fn counts_unicode_word_runs() {
        assert_eq!(count_words("Hello there"), 2);
        assert_eq!(count_words("Å, nei -- ikke nå!"), 4);
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("  ...  "), 0);
    }

    #[test]
    fn words_yields_tokens_in_order() {
        let tokens: Vec<_> = words("Look at her!").collect();
        assert_eq!(tokens, vec!["Look", "at", "her"]);
    }
}
