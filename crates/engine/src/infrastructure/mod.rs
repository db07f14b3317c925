//! Infrastructure implementations.
//!
//! Contains the document reader, port traits, and their implementations.

pub mod config;
pub mod diagnostics;
pub mod filesystem;
pub mod ports;
pub mod reader;
pub mod sector_builder;
pub mod translation;
