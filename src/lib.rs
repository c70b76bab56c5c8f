//! AI gateway for the property marketplace - wraps a Gemini-style backend
//!
//! This crate turns marketplace features (listing descriptions, search
//! parsing, photo analysis, reports) into single calls against a multimodal
//! `generateContent` API, normalizing free-form model output into text or
//! JSON mappings the rest of the service can consume.

pub mod config;
pub mod error;
pub mod gateway;
pub mod gemini;
pub mod mock;
pub mod normalize;
pub mod prompts;

pub use error::{Error, Result};
