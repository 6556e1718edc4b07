//! Fallback display-label derivation.
//!
//! When a scenario carries no explicit `labels.label`, a display name is
//! derived from its description. The heuristic is intentionally lossy: it
//! exists to make the taxonomy readable, not to be a general-purpose
//! title-caser, and its quirks are part of the output contract.

/// Derives a display label from a scenario description.
///
/// The description is lower-cased and a single leading `detect ` prefix
/// is stripped. Words of up to three characters are fully upper-cased
/// (preserving acronyms like `SSH`); longer words are title-cased. After
/// casing, any literal `cve` substring left in a word is rewritten to
/// `CVE`.
#[must_use]
pub fn derive_label(description: &str) -> String {
    let lowered = description.to_lowercase();
    let stripped = lowered.strip_prefix("detect ").unwrap_or(&lowered);

    let words: Vec<String> = stripped.split(' ').map(case_word).collect();
    words.join(" ")
}

/// Cases one word of the derived label.
fn case_word(word: &str) -> String {
    let cased = if word.chars().count() <= 3 {
        word.to_uppercase()
    } else {
        title_case(word)
    };

    if cased.contains("cve") {
        cased.replace("cve", "CVE")
    } else {
        cased
    }
}

/// Upper-cases the first character and lower-cases the rest.
fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
    })
}

// ============================================================================
// Tests
// ============================================================================
