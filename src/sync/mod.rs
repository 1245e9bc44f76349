//! Synchronizers module
//!
//! Single-pass replays of the declared configuration against the tracker:
//! - MilestoneSynchronizer: milestones plus their issues, per repository
//! - EpicSynchronizer: one labeled issue per epic per target repository

pub mod epics;
pub mod milestones;

pub use epics::{EpicSummary, EpicSynchronizer};
pub use milestones::{MilestoneSummary, MilestoneSynchronizer};
