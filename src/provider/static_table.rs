//! Built-in intent table
//!
//! A fixed mapping from shopping-assistant intents to canned payloads.

use crate::models::{Payload, PayloadItem};
use crate::provider::PayloadProvider;

struct IntentRow {
    intent: &'static str,
    action: &'static str,
    items: &'static [(&'static str, &'static str)],
}

const INTENT_TABLE: &[IntentRow] = &[
    IntentRow {
        intent: "greeting",
        action: "reply",
        items: &[("Hello!", "What can I help you find today?")],
    },
    IntentRow {
        intent: "browse_categories",
        action: "show_list",
        items: &[
            ("Electronics", "Phones, laptops and accessories"),
            ("Home", "Kitchen, furniture and decor"),
            ("Outdoors", "Camping, cycling and garden"),
            ("Books", "Fiction, non-fiction and comics"),
        ],
    },
    IntentRow {
        intent: "show_deals",
        action: "show_carousel",
        items: &[
            ("Wireless earbuds", "30% off this week"),
            ("Cast iron skillet", "Buy one, get one half price"),
            ("Trail backpack 40L", "Free shipping"),
        ],
    },
    IntentRow {
        intent: "track_order",
        action: "request_input",
        items: &[("Order number", "Found in your confirmation email")],
    },
    IntentRow {
        intent: "store_hours",
        action: "show_list",
        items: &[
            ("Mon-Fri", "9:00-20:00"),
            ("Saturday", "10:00-18:00"),
            ("Sunday", "Closed"),
        ],
    },
    IntentRow {
        intent: "return_policy",
        action: "reply",
        items: &[
            ("30 days", "Unused items in original packaging"),
            ("Refunds", "Issued to the original payment method"),
        ],
    },
    IntentRow {
        intent: "contact_support",
        action: "show_contacts",
        items: &[
            ("Chat", "Available 24/7 in the app"),
            ("Email", "support@example.com"),
        ],
    },
];

// == Static Payload Provider ==
/// Resolves intents against the built-in table.
///
/// Lookups are exact-match and side-effect free.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticPayloadProvider;

impl StaticPayloadProvider {
    pub fn new() -> Self {
        Self
    }

    /// Every intent this provider recognizes.
    pub fn intents(&self) -> impl Iterator<Item = &'static str> {
        INTENT_TABLE.iter().map(|row| row.intent)
    }
}

impl PayloadProvider for StaticPayloadProvider {
    fn resolve(&self, intent: &str) -> Option<Payload> {
        let row = INTENT_TABLE.iter().find(|row| row.intent == intent)?;
        let items = row
            .items
            .iter()
            .map(|(title, detail)| PayloadItem::new(*title, *detail))
            .collect();
        Some(Payload::new(row.action, items))
    }
}
