//! Composition tracker: the Idle → Composing → Idle state machine driven by
//! [`CompositionSignal`]s on the name field.

use tracing::debug_span;

use super::types::{CompositionSession, CompositionSignal, InputIntent, SessionState, SyncResponse};
use super::KanaBinding;

impl KanaBinding {
    /// Process one composition signal. Start enters Composing, End leaves
    /// it, Update/PreInsert self-loop; each returns what the kana field
    /// should do in response.
    pub fn handle_signal(&mut self, signal: CompositionSignal) -> SyncResponse {
        let _span = debug_span!("handle_signal", ?signal).entered();

        match signal {
            CompositionSignal::Start { text } => {
                self.state = SessionState::Composing(CompositionSession::default());
                // Some platforms put the pre-existing selection in the start
                // payload; treat it as a first update.
                match text {
                    Some(t) if !t.is_empty() => self.composition_update(t),
                    _ => SyncResponse::unchanged(),
                }
            }

            CompositionSignal::Update { text } => match text {
                // Malformed/absent payload is an empty delta — keep the
                // previous guess rather than flashing the field empty.
                None => SyncResponse::unchanged(),
                Some(t) => self.composition_update(t),
            },

            CompositionSignal::PreInsert { intent, text } => {
                if intent != InputIntent::InsertCompositionText {
                    return SyncResponse::unchanged();
                }
                match text {
                    None => SyncResponse::unchanged(),
                    Some(t) => self.composition_update(t),
                }
            }

            CompositionSignal::End { text } => {
                let resp = match text {
                    Some(t) if !t.is_empty() => self.composition_commit(&t),
                    _ => SyncResponse::unchanged(),
                };
                self.state = SessionState::Idle;
                resp
            }
        }
    }

    /// Live feedback path: the payload wholesale-replaces the session text
    /// and its transliteration wholesale-replaces the kana field. Always
    /// writes — this is the primary UX value of the engine.
    ///
    /// Updates arriving in Idle promote to Composing; some IMEs skip the
    /// start signal after a candidate-window cancel.
    fn composition_update(&mut self, text: String) -> SyncResponse {
        let kana = self.config.mode.transliterate(&text);
        match &mut self.state {
            SessionState::Composing(session) => session.last_text = text,
            SessionState::Idle => {
                self.state = SessionState::Composing(CompositionSession { last_text: text });
            }
        }
        self.next_generation();
        SyncResponse::write(kana)
    }

    /// Committed text at composition end. Syllabary-only commits supersede
    /// the last incremental update; kanji commits leave the field on the
    /// last update's phonetic approximation, optionally kicking off a
    /// backend conversion when the policy allows it.
    fn composition_commit(&mut self, text: &str) -> SyncResponse {
        if kana_core::unicode::is_syllabary_text(text) {
            self.next_generation();
            return SyncResponse::write(self.config.mode.transliterate(text));
        }
        if self.config.fill_on_kanji_commit && self.has_backend {
            let generation = self.next_generation();
            return SyncResponse::convert(super::types::ConvertRequest {
                text: text.to_string(),
                generation,
            });
        }
        SyncResponse::unchanged()
    }
}
