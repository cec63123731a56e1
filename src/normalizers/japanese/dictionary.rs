use std::collections::HashMap;
use std::path::Path;

use super::scanner::normalize_width;

#[derive(thiserror::Error, Debug)]
pub enum DictionaryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid dictionary JSON: {0}")]
    Json(String),
    #[error("Invalid dictionary entry on line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// Caller-supplied overrides: literal text → forced kana reading.
///
/// Keys are stored width-normalized, so `１０００万` and `1000万` are the same
/// entry. Keys without an Arabic digit are ignored: the normalizer only ever
/// rewrites numeral spans. Once built, a dictionary is only read.
#[derive(Debug, Clone, Default)]
pub struct UserDictionary {
    entries: HashMap<String, String>,
    max_key_chars: usize,
}

impl UserDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(literal, reading)` pairs. The first entry for a key wins.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut dictionary = Self::new();
        for (literal, reading) in entries {
            dictionary.insert(literal.as_ref(), reading);
        }
        dictionary
    }

    /// Load a dictionary file. `.json` files are read as a JSON object,
    /// anything else as two-column text.
    pub fn load(path: &Path) -> Result<Self, DictionaryError> {
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        let content = std::fs::read_to_string(path)?;
        let dictionary = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_table_str(&content)?
        };
        log::info!(
            "Loaded {} dictionary entries from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Parse a JSON object mapping literal strings to readings.
    pub fn from_json_str(content: &str) -> Result<Self, DictionaryError> {
        let json: serde_json::Value = serde_json::from_str(content)
            .map_err(|e| DictionaryError::Json(format!("Failed to parse JSON: {e}")))?;

        let object = json
            .as_object()
            .ok_or_else(|| DictionaryError::Json("top level must be an object".to_string()))?;

        let mut dictionary = Self::new();
        for (literal, reading) in object {
            let reading = reading.as_str().ok_or_else(|| {
                DictionaryError::Json(format!("Non-string reading for key {literal:?}"))
            })?;
            dictionary.insert(literal, reading);
        }
        Ok(dictionary)
    }

    /// Parse `literal<TAB>reading` (or `literal,reading`) lines.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    pub fn from_table_str(content: &str) -> Result<Self, DictionaryError> {
        let mut dictionary = Self::new();
        for (idx, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let separator = if line.contains('\t') { '\t' } else { ',' };
            let mut fields = line.split(separator).map(str::trim);
            let (Some(literal), Some(reading), None) = (fields.next(), fields.next(), fields.next())
            else {
                return Err(DictionaryError::Parse {
                    line: idx + 1,
                    message: format!("expected two columns, got {line:?}"),
                });
            };
            if literal.is_empty() {
                return Err(DictionaryError::Parse {
                    line: idx + 1,
                    message: "empty literal".to_string(),
                });
            }
            dictionary.insert(literal, reading);
        }
        Ok(dictionary)
    }

    /// Add an entry. Returns `false` if it was ignored.
    pub fn insert(&mut self, literal: &str, reading: impl Into<String>) -> bool {
        let key: String = literal.chars().map(normalize_width).collect();
        let reading = reading.into();

        if !key.chars().any(|c| c.is_ascii_digit()) {
            log::warn!("Ignoring dictionary entry {literal:?}: no Arabic digits");
            return false;
        }
        if reading.is_empty() {
            log::warn!("Ignoring dictionary entry {literal:?}: empty reading");
            return false;
        }
        if self.entries.contains_key(&key) {
            log::warn!("Duplicate dictionary entry {literal:?}, keeping the first reading");
            return false;
        }

        self.max_key_chars = self.max_key_chars.max(key.chars().count());
        self.entries.insert(key, reading);
        true
    }

    pub fn get(&self, literal: &str) -> Option<&str> {
        let key: String = literal.chars().map(normalize_width).collect();
        self.entries.get(&key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Longest entry that is a prefix of `chars` (already width-normalized)
    /// and whose length in chars passes `accept`.
    ///
    /// Returns the match length in chars and the reading.
    pub fn longest_match<I, F>(&self, chars: I, mut accept: F) -> Option<(usize, &str)>
    where
        I: IntoIterator<Item = char>,
        F: FnMut(usize) -> bool,
    {
        if self.entries.is_empty() {
            return None;
        }

        let mut prefix = String::new();
        let mut ends = Vec::with_capacity(self.max_key_chars);
        for ch in chars.into_iter().take(self.max_key_chars) {
            prefix.push(ch);
            ends.push(prefix.len());
        }

        ends.iter().enumerate().rev().find_map(|(n, &end)| {
            self.entries
                .get(&prefix[..end])
                .filter(|_| accept(n + 1))
                .map(|reading| (n + 1, reading.as_str()))
        })
    }
}
