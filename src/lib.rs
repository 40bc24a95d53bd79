//! Chromakit - color conversion and tint/shade palettes
//!
//! Command-line front end for the `chroma-model` crate.
//! This library exposes modules for integration testing.

pub mod commands;
pub mod error;
pub mod models;
