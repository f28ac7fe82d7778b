//! Name-to-kana synchronization engine.
//!
//! `KanaBinding` pairs one name field with one furigana field: it consumes
//! composition and input signals on the name side and decides what, if
//! anything, to write on the kana side. The host applies the returned
//! [`SyncResponse`]; the binding itself never touches a widget and never
//! writes the name field.

pub(crate) mod types;

mod form;
mod policy;
mod signal;
mod worker;

#[cfg(test)]
mod tests;

use kana_core::config::EngineConfig;

pub use form::{FormState, SignupForm};
pub use types::{CompositionSignal, ConvertRequest, InputIntent, SyncResponse};
pub use worker::{ConvertWorker, ReadingResult};

use types::SessionState;

/// Stateful engine for one (name field, kana field) pair.
pub struct KanaBinding {
    config: EngineConfig,
    /// Whether a reading backend is attached. Without one, every path must
    /// resolve synchronously via the deterministic mapping or not at all.
    has_backend: bool,

    state: SessionState,
    /// Bumped on every kana write and every issued request; an async reading
    /// is applied only if its request generation is still current.
    generation: u64,
}

impl KanaBinding {
    pub fn new(config: EngineConfig, has_backend: bool) -> Self {
        Self {
            config,
            has_backend,
            state: SessionState::Idle,
            generation: 0,
        }
    }

    pub fn is_composing(&self) -> bool {
        matches!(self.state, SessionState::Composing(_))
    }

    /// Deliver the result of an asynchronous conversion. Returns the value
    /// to write, or `None` when the request has been superseded by newer
    /// input (stale readings must not clobber the field).
    pub fn receive_reading(&mut self, generation: u64, reading: &str) -> Option<String> {
        if generation != self.generation {
            tracing::debug!(generation, current = self.generation, "dropping stale reading");
            return None;
        }
        Some(reading.to_string())
    }

    /// Invalidate any in-flight conversion; called whenever the kana field
    /// gains a newer value or a newer request is issued.
    pub(crate) fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }
}
