//! Pipeline entry points for the monitor.
//!
//! - `run_monitor`: drive the poll cycle indefinitely
//! - `MonitorState` / `Decision`: availability change detection
//! - `SectionNotifier`: decision rendering and webhook dispatch

pub mod diff;
pub mod notify;
pub mod poll;

pub use diff::{Decision, MonitorState};
pub use notify::SectionNotifier;
pub use poll::run_monitor;
