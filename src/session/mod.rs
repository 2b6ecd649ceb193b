//! Session Module
//!
//! Line-oriented front end that answers intents through a cached responder.

mod lines;

pub use lines::{normalize_intent, run_session};
