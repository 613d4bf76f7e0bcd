//! Shared library module for the Wordlace terminal app crate.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod command;
pub mod error;
pub mod render;
pub mod session;
pub mod settings;
