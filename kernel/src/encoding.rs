//! Conversion of text into comparable symbol codes.
//!
//! Every distinct token (after normalization) gets its own [`Symbol`] code, so the
//! engine only ever compares integers. The table is owned by the caller and
//! must be shared by both inputs of one diff.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"\s+") {
    Ok(re) => re,
    Err(e) => panic!("regex pattern should be valid at compile time: {e}"),
});

/// How a text is cut into tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// One token per line. Carriage returns are dropped and the text is split
    /// on `'\n'`, so a trailing newline yields a trailing empty line.
    #[default]
    Lines,
    /// One token per Unicode scalar value.
    Chars,
}

/// Normalizations applied to each token before it is looked up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EncodeOptions {
    /// Strip leading and trailing whitespace.
    pub trim_space: bool,
    /// Collapse every run of whitespace into a single space.
    pub ignore_space: bool,
    /// Compare case-insensitively.
    pub ignore_case: bool,
}

/// Tokenization plus normalization settings for a text diff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextOptions {
    /// Token boundaries.
    pub granularity: Granularity,
    /// Token normalization.
    pub encode: EncodeOptions,
}

/// Splits `text` into tokens at the given granularity.
#[must_use]
pub fn tokenize(text: &str, granularity: Granularity) -> Vec<String> {
    match granularity {
        Granularity::Lines => text.replace('\r', "").split('\n').map(str::to_owned).collect(),
        Granularity::Chars => text.chars().map(String::from).collect(),
    }
}

/// Integer code standing for one distinct normalized token.
///
/// `usize` so that every token a table can hold gets a code of its own.
pub type Symbol = usize;

/// Mapping from normalized token to symbol code.
///
/// Codes start at 1 and are handed out in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    codes: HashMap<String, Symbol>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct tokens seen so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True if no token has been encoded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Code of `token`, assigning the next free one if it is new.
    ///
    /// `token` must already be normalized.
    pub fn code_for(&mut self, token: &str) -> Symbol {
        if let Some(&code) = self.codes.get(token) {
            return code;
        }
        let code = self.codes.len() + 1;
        self.codes.insert(token.to_owned(), code);
        code
    }

    /// Encodes each token of `text` after normalizing it.
    pub fn encode(&mut self, text: &str, options: &TextOptions) -> Vec<Symbol> {
        tokenize(text, options.granularity)
            .iter()
            .map(|token| {
                let normalized = normalize(token, &options.encode);
                self.code_for(&normalized)
            })
            .collect()
    }
}

/// Applies the enabled normalizations: trim, then collapse whitespace, then
/// lowercase.
#[must_use]
pub fn normalize(token: &str, options: &EncodeOptions) -> String {
    let mut s = if options.trim_space {
        token.trim().to_owned()
    } else {
        token.to_owned()
    };
    if options.ignore_space {
        s = WHITESPACE_RUN.replace_all(&s, " ").into_owned();
    }
    if options.ignore_case {
        s = s.to_lowercase();
    }
    s
}
