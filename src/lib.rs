//! molecule - workspace shell controller
//!
//! Modules:
//! - kernel: workspace registry, preferences, content-view routing and the
//!   session that ties them to persistent storage and UI surfaces

pub mod kernel;
