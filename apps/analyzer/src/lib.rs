//! TalentSync analysis engine — turns a parsed-CV response from the external
//! parsing service into role recommendations and a gap analysis, and drives
//! the surrounding request lifecycle (file gate, upstream call, persistence
//! write, progress reporting).

pub mod analyzer;
pub mod client;
pub mod config;
pub mod errors;
pub mod matching;
pub mod models;
pub mod session;
