//! Many games at once.
//!
//! Each game owns its state and participants outright; nothing is shared
//! between games except the read-only configuration.

pub mod batch;

pub use batch::{run_batch, BatchConfig, BatchSummary};
