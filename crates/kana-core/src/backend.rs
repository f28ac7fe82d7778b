//! Optional morphological reading backend.
//!
//! The deterministic mapping in [`crate::translit`] cannot read kanji; a
//! `ReadingBackend` can. It is dependency-injected by the host form and may
//! be entirely absent — every caller must have a non-backend path.

use std::collections::HashMap;

use thiserror::Error;

use crate::translit::KanaMode;
use crate::unicode::{hiragana_to_katakana, is_syllabary, katakana_to_hiragana};

#[derive(Debug, Error)]
pub enum InitError {
    #[error("reading backend unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("backend not initialized")]
    NotInitialized,
    #[error("no reading for {0:?}")]
    NoReading(String),
    #[error("conversion failed: {0}")]
    Failed(String),
}

/// Asynchronous-by-contract reading service. `initialize` runs once before
/// the first `convert`; both may fail, and callers absorb both failure modes
/// (degrade to the deterministic mapping, or leave the field unchanged).
///
/// `Send` because the host runs the backend on a worker thread.
pub trait ReadingBackend: Send {
    fn initialize(&mut self) -> Result<(), InitError>;
    fn convert(&self, text: &str, mode: KanaMode) -> Result<String, ConvertError>;
}

/// Dictionary-backed reading backend: greedy longest-match segmentation over
/// surface→reading entries, syllabary characters passing through. Suitable
/// for name dictionaries and as the backend in tests.
pub struct LexiconBackend {
    entries: HashMap<String, String>,
    max_surface_chars: usize,
    ready: bool,
}

impl LexiconBackend {
    /// Build from (surface, hiragana reading) pairs.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        let entries: HashMap<String, String> = entries.into_iter().collect();
        let max_surface_chars = entries.keys().map(|k| k.chars().count()).max().unwrap_or(0);
        Self {
            entries,
            max_surface_chars,
            ready: false,
        }
    }
}

impl ReadingBackend for LexiconBackend {
    fn initialize(&mut self) -> Result<(), InitError> {
        if self.entries.is_empty() {
            return Err(InitError::Unavailable("empty lexicon".into()));
        }
        self.ready = true;
        Ok(())
    }

    fn convert(&self, text: &str, mode: KanaMode) -> Result<String, ConvertError> {
        if !self.ready {
            return Err(ConvertError::NotInitialized);
        }

        let chars: Vec<char> = text.chars().collect();
        let mut reading = String::new();
        let mut i = 0;
        while i < chars.len() {
            // Longest dictionary match starting at i
            let limit = self.max_surface_chars.min(chars.len() - i);
            let matched = (1..=limit).rev().find_map(|len| {
                let surface: String = chars[i..i + len].iter().collect();
                self.entries.get(&surface).map(|r| (len, r))
            });
            match matched {
                Some((len, r)) => {
                    reading.push_str(r);
                    i += len;
                }
                None if is_syllabary(chars[i]) => {
                    reading.push(chars[i]);
                    i += 1;
                }
                None => {
                    tracing::debug!(ch = %chars[i], "no lexicon entry covers character");
                    return Err(ConvertError::NoReading(chars[i].to_string()));
                }
            }
        }

        Ok(match mode {
            KanaMode::Katakana => hiragana_to_katakana(&reading),
            KanaMode::Hiragana => katakana_to_hiragana(&reading),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name_lexicon() -> LexiconBackend {
        let mut b = LexiconBackend::from_entries([
            ("大川".to_string(), "おおかわ".to_string()),
            ("山".to_string(), "やま".to_string()),
            ("山田".to_string(), "やまだ".to_string()),
            ("田".to_string(), "た".to_string()),
        ]);
        b.initialize().unwrap();
        b
    }

    #[test]
    fn converts_known_surface() {
        let b = name_lexicon();
        assert_eq!(b.convert("大川", KanaMode::Katakana).unwrap(), "オオカワ");
        assert_eq!(b.convert("大川", KanaMode::Hiragana).unwrap(), "おおかわ");
    }

    #[test]
    fn longest_match_wins() {
        let b = name_lexicon();
        // 山田 as one entry (やまだ), not 山+田 (やまた)
        assert_eq!(b.convert("山田", KanaMode::Katakana).unwrap(), "ヤマダ");
    }

    #[test]
    fn syllabary_passes_through() {
        let b = name_lexicon();
        assert_eq!(
            b.convert("大川さん", KanaMode::Katakana).unwrap(),
            "オオカワサン"
        );
    }

    #[test]
    fn unknown_kanji_errors() {
        let b = name_lexicon();
        assert!(matches!(
            b.convert("鈴木", KanaMode::Katakana),
            Err(ConvertError::NoReading(_))
        ));
    }

    #[test]
    fn convert_before_init_errors() {
        let b = LexiconBackend::from_entries([("山".to_string(), "やま".to_string())]);
        assert!(matches!(
            b.convert("山", KanaMode::Katakana),
            Err(ConvertError::NotInitialized)
        ));
    }

    #[test]
    fn empty_lexicon_fails_init() {
        let mut b = LexiconBackend::from_entries([]);
        assert!(b.initialize().is_err());
    }
}
