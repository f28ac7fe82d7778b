/// Discriminator carried by a pre-insert signal — the abstract form of the
/// DOM `beforeinput` `inputType` string. Only `InsertCompositionText` is a
/// composition delta; everything else is ignored by the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputIntent {
    InsertCompositionText,
    InsertText,
    Other,
}

/// Toolkit-neutral composition signal, one variant per event class.
/// Payloads are optional everywhere: platforms disagree on which events
/// carry text, and a missing payload is always a safe empty delta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompositionSignal {
    /// IME began composing. A non-empty payload doubles as a first update.
    Start { text: Option<String> },
    /// The in-progress buffer changed; the payload wholesale-replaces any
    /// earlier guess.
    Update { text: Option<String> },
    /// `beforeinput`-class delivery path. With `InsertCompositionText`
    /// intent this is an update by another name; updates replace the whole
    /// buffer, so double delivery alongside `Update` is harmless.
    PreInsert {
        intent: InputIntent,
        text: Option<String>,
    },
    /// Composition finished; the payload is the final committed text,
    /// possibly kanji.
    End { text: Option<String> },
}

/// One IME composition episode. Existence implies the session is active —
/// the binding holds this only inside [`SessionState::Composing`], so an
/// inactive-but-populated session is unrepresentable.
#[derive(Debug, Default)]
pub(crate) struct CompositionSession {
    /// Latest payload seen, the best current guess at the composed text.
    pub(crate) last_text: String,
}

pub(crate) enum SessionState {
    Idle,
    Composing(CompositionSession),
}

/// Asynchronous conversion to run against the reading backend. The
/// generation ties the eventual reading back to the binding state it was
/// issued under; see [`crate::KanaBinding::receive_reading`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertRequest {
    pub text: String,
    pub generation: u64,
}

/// What the host should do after feeding the binding an event: at most one
/// write to the kana field, at most one conversion to kick off. `kana: None`
/// means the field keeps its last value — every failure path collapses to
/// that, nothing propagates.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SyncResponse {
    pub kana: Option<String>,
    pub request: Option<ConvertRequest>,
}

impl SyncResponse {
    pub(crate) fn unchanged() -> Self {
        Self::default()
    }

    pub(crate) fn write(kana: String) -> Self {
        Self {
            kana: Some(kana),
            request: None,
        }
    }

    pub(crate) fn convert(request: ConvertRequest) -> Self {
        Self {
            kana: None,
            request: Some(request),
        }
    }
}
