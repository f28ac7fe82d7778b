//! Conversion worker thread.
//!
//! Owns the reading backend: initializes it once, then serves
//! [`ConvertRequest`]s in order. `submit` never blocks the event loop; the
//! host polls results and routes them through
//! [`KanaBinding::receive_reading`](crate::KanaBinding::receive_reading)
//! for the staleness check.
//!
//! Failure semantics match the engine's: a failed initialization silently
//! degrades every conversion to the deterministic mapping, and a failed
//! conversion produces no result at all (the field keeps its last value).

use std::sync::mpsc;
use std::thread;

use tracing::debug;

use kana_core::backend::ReadingBackend;
use kana_core::translit::KanaMode;

use super::types::ConvertRequest;

/// A resolved conversion, tagged with the generation of its request.
pub struct ReadingResult {
    pub generation: u64,
    pub reading: String,
}

pub struct ConvertWorker {
    tx: mpsc::Sender<ConvertRequest>,
    rx: mpsc::Receiver<ReadingResult>,
}

impl ConvertWorker {
    /// Spawn the worker and hand it the backend. Initialization happens on
    /// the worker thread, so a slow dictionary load never stalls the form
    /// mount.
    pub fn spawn(mut backend: Box<dyn ReadingBackend>, mode: KanaMode) -> Self {
        let (tx, work_rx) = mpsc::channel::<ConvertRequest>();
        let (result_tx, rx) = mpsc::channel::<ReadingResult>();

        thread::Builder::new()
            .name("kana-convert".into())
            .spawn(move || {
                let ready = match backend.initialize() {
                    Ok(()) => true,
                    Err(err) => {
                        debug!(%err, "backend unavailable, degrading to character mapping");
                        false
                    }
                };

                while let Ok(request) = work_rx.recv() {
                    let reading = if ready {
                        match backend.convert(&request.text, mode) {
                            Ok(reading) => reading,
                            Err(err) => {
                                debug!(%err, text = %request.text, "conversion failed, leaving field unchanged");
                                continue;
                            }
                        }
                    } else {
                        mode.transliterate(&request.text)
                    };
                    let result = ReadingResult {
                        generation: request.generation,
                        reading,
                    };
                    // Receiver dropped means the form unmounted.
                    if result_tx.send(result).is_err() {
                        break;
                    }
                }
            })
            .expect("failed to spawn convert worker");

        Self { tx, rx }
    }

    /// Queue a conversion. If the worker thread has exited the request is
    /// dropped, which is indistinguishable from a failed conversion.
    pub fn submit(&self, request: ConvertRequest) {
        let _ = self.tx.send(request);
    }

    /// Non-blocking poll for the next resolved conversion.
    pub fn poll(&self) -> Option<ReadingResult> {
        self.rx.try_recv().ok()
    }
}
