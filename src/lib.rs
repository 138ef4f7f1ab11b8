//! Typed client for the AdoptOpenJDK / Adoptium v3 release metadata API.
//!
//! Responses are mapped into [`model`] records by the [`parser`], which
//! drops individual malformed entries instead of failing the whole call.

pub mod api;
pub mod commands;
pub mod http;
pub mod model;
pub mod parser;
