//! Admin credential entities.

pub mod model;

pub use model::AdminConfig;
