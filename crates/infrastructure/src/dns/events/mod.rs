pub mod emitter;

pub use emitter::TraceEventEmitter;
