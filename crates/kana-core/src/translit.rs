//! Deterministic script conversion — the zero-latency, zero-dependency
//! strategy. Pure and total: kanji and ASCII pass through unchanged, so this
//! strategy alone can never produce a reading for ideographs.

use serde::Deserialize;

use crate::unicode::{hiragana_to_katakana, katakana_to_hiragana};

/// Target script for the kana field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KanaMode {
    Katakana,
    Hiragana,
}

impl KanaMode {
    /// Character-wise conversion into this mode's script. Characters
    /// already in the target script (or outside kana entirely) are
    /// unchanged, so re-applying is a no-op.
    pub fn transliterate(&self, text: &str) -> String {
        match self {
            Self::Katakana => hiragana_to_katakana(text),
            Self::Hiragana => katakana_to_hiragana(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn katakana_mode() {
        assert_eq!(KanaMode::Katakana.transliterate("やまだ"), "ヤマダ");
        assert_eq!(KanaMode::Katakana.transliterate("ヤマダ"), "ヤマダ");
        assert_eq!(KanaMode::Katakana.transliterate("山田"), "山田");
    }

    #[test]
    fn hiragana_mode() {
        assert_eq!(KanaMode::Hiragana.transliterate("ヤマダ"), "やまだ");
        assert_eq!(KanaMode::Hiragana.transliterate("おおかわ"), "おおかわ");
    }

    #[test]
    fn reapplying_is_noop() {
        for mode in [KanaMode::Katakana, KanaMode::Hiragana] {
            let once = mode.transliterate("やまだヤマダ山田ーabc");
            assert_eq!(mode.transliterate(&once), once);
        }
    }
}
