//! Payload model
//!
//! Structured canned responses: an action tag plus the items that go with it.

use serde::{Deserialize, Serialize};

/// One displayable item of a payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadItem {
    pub title: String,
    pub detail: String,
}

impl PayloadItem {
    pub fn new(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
        }
    }
}

/// A canned response for a recognized intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    /// What the client should do with the items, e.g. `show_list`
    pub action: String,
    pub items: Vec<PayloadItem>,
}

impl Payload {
    pub fn new(action: impl Into<String>, items: Vec<PayloadItem>) -> Self {
        Self {
            action: action.into(),
            items,
        }
    }
}
