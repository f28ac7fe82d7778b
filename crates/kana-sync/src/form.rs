//! Host-side wiring: a sign-up form owning the two observable fields, one
//! binding, and (optionally) a conversion worker.
//!
//! This is the layer a UI toolkit adapter talks to — it forwards field
//! events and renders `state()` back into widgets. The division of labor is
//! strict: the host writes `name`, the engine decides `name_kana`.

use kana_core::backend::ReadingBackend;
use kana_core::config::EngineConfig;

use super::types::{CompositionSignal, SyncResponse};
use super::worker::ConvertWorker;
use super::KanaBinding;

/// The two string fields the engine reads and writes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub name_kana: String,
}

pub struct SignupForm {
    state: FormState,
    binding: KanaBinding,
    worker: Option<ConvertWorker>,
}

impl SignupForm {
    /// Mount the form. The backend is optional; when present it moves onto
    /// a worker thread and initializes there. Dropping the form drops the
    /// worker's channel, which stops the thread.
    pub fn new(config: EngineConfig, backend: Option<Box<dyn ReadingBackend>>) -> Self {
        let worker = backend.map(|b| ConvertWorker::spawn(b, config.mode));
        let binding = KanaBinding::new(config, worker.is_some());
        Self {
            state: FormState::default(),
            binding,
            worker,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Composition signal on the name field.
    pub fn name_composition(&mut self, signal: CompositionSignal) {
        let resp = self.binding.handle_signal(signal);
        self.apply(resp);
    }

    /// Plain value change on the name field. The field's value always lands
    /// in `name`; whether it propagates to `name_kana` is the binding's
    /// call.
    pub fn name_input(&mut self, value: &str) {
        self.state.name = value.to_string();
        let resp = self.binding.handle_source_input(value);
        self.apply(resp);
    }

    /// Direct edit of the kana field.
    pub fn kana_input(&mut self, value: &str) {
        let resp = self.binding.handle_kana_input(value);
        self.apply(resp);
    }

    /// Manual convert button: re-derive the reading from the whole current
    /// name, overwriting whatever is in the kana field.
    pub fn convert(&mut self) {
        let name = self.state.name.clone();
        let resp = self.binding.request_convert(&name);
        self.apply(resp);
    }

    /// Drain resolved conversions from the worker. Call from the host's
    /// idle/tick hook; stale readings are discarded by the binding.
    pub fn pump(&mut self) {
        let Some(worker) = &self.worker else { return };
        while let Some(result) = worker.poll() {
            if let Some(kana) = self
                .binding
                .receive_reading(result.generation, &result.reading)
            {
                self.state.name_kana = kana;
            }
        }
    }

    fn apply(&mut self, resp: SyncResponse) {
        if let Some(kana) = resp.kana {
            self.state.name_kana = kana;
        }
        if let Some(request) = resp.request {
            if let Some(worker) = &self.worker {
                worker.submit(request);
            }
        }
    }
}
