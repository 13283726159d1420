// Adapters layer: concrete implementations of the domain ports (line sources, output sinks).

pub mod sink;
pub mod source;

pub use sink::{MemorySink, StdoutSink};
pub use source::{FileLineSource, MemoryLineSource};
