// crates/bdgeo-core/src/text.rs

/// Convert a string into a folded key suitable for comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Cumillā` -> `Cumilla`)
/// 2\) Normalize to lowercase
/// 3\) Trim surrounding whitespace
///
/// # Examples
///
/// ```rust
/// use bdgeo_core::text::fold_key;
///
/// assert_eq!(fold_key("  Dhanmondi "), "dhanmondi");
/// assert_eq!(fold_key("Bāgerhāt"), "bagerhat");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s.trim()).to_lowercase()
}

/// Compares two strings for equality after folding with [`fold_key`].
///
/// ```rust
/// use bdgeo_core::text::equals_folded;
///
/// assert!(equals_folded("GAZIPUR", "gazipur"));
/// assert!(!equals_folded("Gazipur", "Gazipur Sadar"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// Lowercases without transliteration.
///
/// Used for Bangla names: folding Bangla to ASCII would make a Bangla query
/// match unrelated Latin names.
pub fn lower_native(s: &str) -> String {
    s.trim().to_lowercase()
}

/// `true` when `s` holds at least one Latin letter, accented ones included.
pub fn has_latin(s: &str) -> bool {
    s.chars()
        .any(|c| c.is_ascii_alphabetic() || ('\u{00C0}'..='\u{024F}').contains(&c))
}

/// A query prepared once and matched against many names.
///
/// Only queries with Latin letters get a folded form. A Bangla query is
/// matched against Bangla names alone.
#[derive(Debug, Clone)]
pub struct FoldedQuery {
    folded: String,
    native: String,
}

impl FoldedQuery {
    pub fn new(query: &str) -> Self {
        let folded = if has_latin(query) {
            fold_key(query)
        } else {
            String::new()
        };
        Self {
            folded,
            native: lower_native(query),
        }
    }

    /// `true` when there is nothing left to match after trimming.
    pub fn is_empty(&self) -> bool {
        self.native.is_empty()
    }

    pub fn folded(&self) -> &str {
        &self.folded
    }

    pub fn native(&self) -> &str {
        &self.native
    }

    /// Substring match against a Latin name.
    ///
    /// A query without a folded form never matches, otherwise it would be a
    /// substring of every name.
    pub fn in_latin(&self, name: &str) -> bool {
        !self.folded.is_empty() && fold_key(name).contains(&self.folded)
    }

    /// Folded equality with a Latin name.
    pub fn eq_latin(&self, name: &str) -> bool {
        !self.folded.is_empty() && fold_key(name) == self.folded
    }

    /// Folded prefix match against a Latin name.
    pub fn starts_latin(&self, name: &str) -> bool {
        !self.folded.is_empty() && fold_key(name).starts_with(&self.folded)
    }

    /// Substring match against a native-script name.
    pub fn in_native(&self, name: &str) -> bool {
        !self.native.is_empty() && lower_native(name).contains(&self.native)
    }
}
