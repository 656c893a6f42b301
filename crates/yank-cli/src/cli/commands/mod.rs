//! CLI command handlers, one per file.

mod scan;
mod sync;

pub use scan::run_scan;
pub use sync::{run_sync, SyncArgs};
