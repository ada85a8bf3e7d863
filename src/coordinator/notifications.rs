//! Toast Notifications
//!
//! Transient confirmations shown after cart actions. The coordinator keeps a
//! short rolling log; nothing here affects cart state.

use crate::cart::models::DeliveryOption;
use serde::Serialize;
use std::collections::VecDeque;
use uuid::Uuid;

/// Number of notifications kept before the oldest is dropped
pub const NOTIFICATION_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub id: Uuid,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn added_to_cart(name: &str, quantity: u32) -> Self {
        Self::new(
            "Added to cart",
            format!("{}x {} added to your order", quantity, name),
        )
    }

    pub fn item_removed() -> Self {
        Self::new("Item removed", "Item has been removed from your cart")
    }

    pub fn order_processing(option: DeliveryOption) -> Self {
        Self::new(
            "Order Processing",
            format!(
                "Processing your {} order. Payment integration requires backend setup.",
                option
            ),
        )
    }
}

/// Bounded log of recent notifications, oldest first
#[derive(Debug, Clone)]
pub struct NotificationLog {
    entries: VecDeque<Notification>,
    limit: usize,
}

impl Default for NotificationLog {
    fn default() -> Self {
        Self::with_limit(NOTIFICATION_LIMIT)
    }
}

impl NotificationLog {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(limit),
            limit,
        }
    }

    /// Records a notification and hands it back to the caller
    pub fn push(&mut self, notification: Notification) -> Notification {
        tracing::info!(title = %notification.title, "{}", notification.description);

        if self.limit == 0 {
            return notification;
        }
        while self.entries.len() >= self.limit {
            self.entries.pop_front();
        }
        self.entries.push_back(notification.clone());
        notification
    }

    pub fn recent(&self) -> Vec<Notification> {
        self.entries.iter().cloned().collect()
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.entries.back()
    }
}
