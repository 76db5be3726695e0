//! Shared name-normalization utilities.
//!
//! One place for the lowercase/strip/slug rules used by routing, the
//! bulk-import duplicate check, and display-name matching. Vendor data
//! and hand-authored content disagree on case, punctuation, and which
//! dash a year range uses; these helpers make the comparisons uniform.

/// Fold common Latin diacritics to their ASCII base letter.
///
/// Covers the characters that actually occur in brand/model names
/// (Škoda, Citroën, swedish å/ä/ö). Anything else passes through.
fn fold_diacritic(c: char) -> char {
    match c {
        'å' | 'ä' | 'à' | 'á' | 'â' | 'ã' => 'a',
        'ë' | 'è' | 'é' | 'ê' => 'e',
        'ï' | 'ì' | 'í' | 'î' => 'i',
        'ö' | 'ò' | 'ó' | 'ô' | 'õ' | 'ø' => 'o',
        'ü' | 'ù' | 'ú' | 'û' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        'š' => 's',
        'ž' => 'z',
        other => other,
    }
}

/// Normalize a display name for equality comparison: lowercase, fold
/// diacritics, drop everything non-alphanumeric.
///
/// "Golf GTI" and "golf-gti" normalize to the same key; so do "Škoda"
/// and "skoda".
pub fn normalize_name(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .map(fold_diacritic)
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Normalize a year-range label for equality comparison.
///
/// Collapses the separator variants vendors use (`→`, `–`, `—`, `/`,
/// `...`, `…`, plain `-`, with or without spaces) to a single hyphen,
/// then lowercases and drops any remaining non-alphanumerics.
/// `"2018-2021"`, `"2018 - 2021"` and `"2018→2021"` all normalize to
/// `"2018-2021"`.
pub fn normalize_year_range(s: &str) -> String {
    let unified: String = s
        .replace("...", "-")
        .chars()
        .map(|c| match c {
            '→' | '–' | '—' | '/' | '…' | '-' => '-',
            other => other,
        })
        .collect();

    let mut out = String::with_capacity(unified.len());
    let mut last_was_hyphen = false;
    for c in unified.to_lowercase().chars().map(fold_diacritic) {
        if c == '-' {
            if !last_was_hyphen && !out.is_empty() {
                out.push('-');
                last_was_hyphen = true;
            }
        } else if c.is_ascii_alphanumeric() {
            out.push(c);
            last_was_hyphen = false;
        }
        // Spaces and punctuation drop out entirely, so "2018 - 2021"
        // collapses to "2018-2021" rather than "2018--2021".
    }
    out.trim_end_matches('-').to_string()
}

/// Build a URL slug from a display name: lowercase, fold diacritics,
/// non-alphanumeric runs become single hyphens.
pub fn slugify(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending_hyphen = false;
    for c in s.to_lowercase().chars().map(fold_diacritic) {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(c);
        } else {
            pending_hyphen = true;
        }
    }
    out
}
