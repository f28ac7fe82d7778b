//! Sync policy for the non-composition paths: plain input on either field
//! and the manual convert trigger.

use kana_core::unicode::contains_kanji;

use super::types::{ConvertRequest, SyncResponse};
use super::KanaBinding;

impl KanaBinding {
    /// Plain value-changed signal on the name field (paste, IME-less
    /// typing). While a composition is active these reflect the IME's
    /// transient buffer rendering, not user intent — suppress them. A value
    /// containing kanji has no character-level reading; propagating it
    /// would fill the kana field with ideographs, so it is held back too.
    pub fn handle_source_input(&mut self, value: &str) -> SyncResponse {
        if self.is_composing() {
            return SyncResponse::unchanged();
        }
        if contains_kanji(value) {
            return SyncResponse::unchanged();
        }
        self.next_generation();
        SyncResponse::write(self.config.mode.transliterate(value))
    }

    /// Direct edit of the kana field itself. The edited value is
    /// authoritative: it is never re-derived from the name field, only
    /// self-normalized into the target script (stray hiragana typed into a
    /// katakana field comes out katakana).
    pub fn handle_kana_input(&mut self, value: &str) -> SyncResponse {
        self.next_generation();
        SyncResponse::write(self.config.mode.transliterate(value))
    }

    /// Manual convert action over the full current name. Explicit user
    /// intent: always overwrites, via the backend when one is attached,
    /// otherwise via the deterministic mapping.
    pub fn request_convert(&mut self, name: &str) -> SyncResponse {
        if self.has_backend {
            let generation = self.next_generation();
            SyncResponse::convert(ConvertRequest {
                text: name.to_string(),
                generation,
            })
        } else {
            self.next_generation();
            SyncResponse::write(self.config.mode.transliterate(name))
        }
    }
}
