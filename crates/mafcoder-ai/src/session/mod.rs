//! Conversation session management.
//!
//! A `Session` holds the thread (every message, function call and
//! function output so far) and drives the streaming tool-call loop.

mod chat;
mod manager;

pub use manager::Session;
