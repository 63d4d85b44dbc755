use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    pub text: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationAction {
    TogglePanel,
    MarkRead(u32),
    ClearAll,
}

/// Notification list plus dropdown visibility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationCenter {
    pub items: Vec<Notification>,
    pub panel_open: bool,
}

impl NotificationCenter {
    /// The three starter notifications, timestamped relative to `now`.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        let item = |id: u32, text: &str, read: bool, ago: Duration| Notification {
            id,
            text: text.to_string(),
            read,
            created_at: now - ago,
        };
        Self {
            items: vec![
                item(1, "Resume analysis completed", false, Duration::minutes(2)),
                item(2, "New interview feedback available", false, Duration::hours(1)),
                item(3, "System update scheduled for tonight", true, Duration::hours(3)),
            ],
            panel_open: false,
        }
    }

    pub fn reduce(mut self, action: NotificationAction) -> Self {
        match action {
            NotificationAction::TogglePanel => self.panel_open = !self.panel_open,
            NotificationAction::MarkRead(id) => {
                if let Some(n) = self.items.iter_mut().find(|n| n.id == id) {
                    n.read = true;
                }
            }
            NotificationAction::ClearAll => {
                self.items.clear();
                self.panel_open = false;
            }
        }
        self
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    pub fn has_unread(&self) -> bool {
        self.unread_count() > 0
    }
}

/// Coarse "time ago" label.
pub fn relative_time(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(created_at);
    let plural = |n: i64, unit: &str| {
        if n == 1 {
            format!("1 {unit} ago")
        } else {
            format!("{n} {unit}s ago")
        }
    };

    if elapsed < Duration::minutes(1) {
        "just now".to_string()
    } else if elapsed < Duration::hours(1) {
        format!("{} min ago", elapsed.num_minutes())
    } else if elapsed < Duration::days(1) {
        plural(elapsed.num_hours(), "hour")
    } else if elapsed < Duration::weeks(1) {
        plural(elapsed.num_days(), "day")
    } else {
        plural(elapsed.num_weeks(), "week")
    }
}
