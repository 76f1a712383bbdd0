mod change_sink;

pub use change_sink::{ChangeSink, NullSink};
