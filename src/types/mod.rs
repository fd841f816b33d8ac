//! Core types for Augur.

pub mod chat;
pub mod generation;

pub use chat::*;
pub use generation::*;
