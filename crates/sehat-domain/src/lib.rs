//! Domain layer for sehat-checker
//!
//! Pure, synchronous logic: every report is recomputed from scratch per
//! submission, nothing here touches the filesystem or the display layer.

pub mod model;
pub mod service;
