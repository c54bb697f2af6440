//! Built-in rights layers
//!
//! Layers back the rights dataset when it is incomplete:
//! 1. Local - well-known city and county ordinances (rent control, just cause)
//! 2. State - California statewide minimums (AB 1482)

pub mod local;
pub mod state;

pub use local::local_record;
pub use state::{statewide_minimum, STATEWIDE_DATASET_NOTE, STATEWIDE_MINIMUM_NOTE};
