
use std::thread;
use std::time::{Duration, Instant};

use kana_core::backend::{ConvertError, InitError, LexiconBackend, ReadingBackend};
use kana_core::config::EngineConfig;
use kana_core::translit::KanaMode;

use super::form::SignupForm;
use super::types::CompositionSignal;

pub(super) fn name_lexicon() -> Box<dyn ReadingBackend> {
    Box::new(LexiconBackend::from_entries([
        ("大川".to_string(), "おおかわ".to_string()),
        ("山田".to_string(), "やまだ".to_string()),
    ]))
}

/// Backend whose initialization always fails — the "dictionary could not be
/// loaded" case the engine must absorb.
pub(super) struct UnavailableBackend;

impl ReadingBackend for UnavailableBackend {
    fn initialize(&mut self) -> Result<(), InitError> {
        Err(InitError::Unavailable("dictionary missing".into()))
    }

    fn convert(&self, _text: &str, _mode: KanaMode) -> Result<String, ConvertError> {
        Err(ConvertError::NotInitialized)
    }
}

pub(super) fn katakana_form(backend: Option<Box<dyn ReadingBackend>>) -> SignupForm {
    SignupForm::new(EngineConfig::default(), backend)
}

// Signal shorthand
pub(super) fn start() -> CompositionSignal {
    CompositionSignal::Start { text: None }
}

pub(super) fn update(text: &str) -> CompositionSignal {
    CompositionSignal::Update {
        text: Some(text.to_string()),
    }
}

pub(super) fn end(text: &str) -> CompositionSignal {
    CompositionSignal::End {
        text: Some(text.to_string()),
    }
}

/// Pump until the kana field equals `expected` or the deadline passes.
pub(super) fn wait_for_kana(form: &mut SignupForm, expected: &str) -> bool {
    let deadline = Instant::now() + Duration::from_secs(2);
    while Instant::now() < deadline {
        form.pump();
        if form.state().name_kana == expected {
            return true;
        }
        thread::sleep(Duration::from_millis(5));
    }
    false
}

/// Give any pending conversion ample time to (mis)apply, then return the
/// kana field. Used to assert that a value did NOT change.
pub(super) fn settle(form: &mut SignupForm) -> String {
    for _ in 0..40 {
        form.pump();
        thread::sleep(Duration::from_millis(5));
    }
    form.state().name_kana.clone()
}
