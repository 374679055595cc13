use dnslookup_application::ports::{TraceEvent, TraceSink};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Channel-backed [`TraceSink`] with a runtime on/off switch.
///
/// Events are dropped while tracing is off, and always when the emitter was
/// created disabled (no receiver exists).
#[derive(Clone)]
pub struct TraceEventEmitter {
    sender: Option<mpsc::UnboundedSender<TraceEvent>>,
    verbose: Arc<AtomicBool>,
}

impl TraceEventEmitter {
    pub fn new_disabled() -> Self {
        Self {
            sender: None,
            verbose: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn new_enabled() -> (Self, mpsc::UnboundedReceiver<TraceEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let emitter = Self {
            sender: Some(tx),
            verbose: Arc::new(AtomicBool::new(false)),
        };
        (emitter, rx)
    }

    pub fn set_verbose(&self, on: bool) {
        self.verbose.store(on, Ordering::Relaxed);
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose.load(Ordering::Relaxed)
    }
}

impl TraceSink for TraceEventEmitter {
    fn emit(&self, event: TraceEvent) {
        if !self.is_verbose() {
            return;
        }
        if let Some(ref tx) = self.sender {
            let _ = tx.send(event);
        }
    }

    fn is_enabled(&self) -> bool {
        self.sender.is_some() && self.is_verbose()
    }
}

impl Default for TraceEventEmitter {
    fn default() -> Self {
        Self::new_disabled()
    }
}

impl std::fmt::Debug for TraceEventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TraceEventEmitter")
            .field("enabled", &self.sender.is_some())
            .field("verbose", &self.is_verbose())
            .finish()
    }
}
