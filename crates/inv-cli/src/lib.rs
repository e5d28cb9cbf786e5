//! Library side of the `invoice-normalizer` binary: logging setup and the
//! per-document pipeline.

pub mod logging;
pub mod pipeline;
