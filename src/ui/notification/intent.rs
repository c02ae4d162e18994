use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum NotificationIntent {
    /// Replaces whatever is showing.
    Show { message: String },
    Dismiss,
}

impl Intent for NotificationIntent {}
