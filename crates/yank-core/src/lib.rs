pub mod config;
pub mod logging;

pub mod catalog;
pub mod fetch;
pub mod guard;
pub mod identity;
pub mod notify;
pub mod orchestrator;
pub mod pipeline;
pub mod process;
pub mod scan;
pub mod target;
