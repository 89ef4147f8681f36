//! Admin account: setup, login and session checks.

pub mod service;

pub use service::AdminService;
