//! Admin content store: the notes and snippets themselves.

pub mod service;

pub use service::ContentService;
