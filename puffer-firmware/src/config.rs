//! Build-time tuning
//!
//! `build.rs` validates `train.toml` and writes `embedded_tuning()`; edit
//! the file and rebuild to retune.

include!(concat!(env!("OUT_DIR"), "/tuning.rs"));
