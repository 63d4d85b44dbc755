//! Settings page state: four editable sections, one modal open at a time.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingsSection {
    Profile,
    Notifications,
    Privacy,
    Appearance,
}

impl SettingsSection {
    pub fn title(self) -> &'static str {
        match self {
            SettingsSection::Profile => "Profile",
            SettingsSection::Notifications => "Notifications",
            SettingsSection::Privacy => "Privacy",
            SettingsSection::Appearance => "Appearance",
        }
    }
}

impl fmt::Display for SettingsSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSettings {
    pub name: String,
    pub email: String,
    pub role: String,
    pub company: String,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            name: "Admin User".to_string(),
            email: "admin@aegis.ai".to_string(),
            role: "Administrator".to_string(),
            company: "AEGIS Inc.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub analysis_complete: bool,
    pub weekly_report: bool,
    pub product_updates: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email_notifications: true,
            push_notifications: true,
            analysis_complete: true,
            weekly_report: false,
            product_updates: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivacySettings {
    pub data_collection: bool,
    pub analytics: bool,
    pub share_with_team: bool,
    pub public_profile: bool,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            data_collection: true,
            analytics: true,
            share_with_team: false,
            public_profile: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppearanceSettings {
    pub theme: Theme,
    pub compact_mode: bool,
    pub animations_enabled: bool,
    pub sidebar_collapsed: bool,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            compact_mode: false,
            animations_enabled: true,
            sidebar_collapsed: false,
        }
    }
}

/// Replacement value for one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsChange {
    Profile(ProfileSettings),
    Notifications(NotificationSettings),
    Privacy(PrivacySettings),
    Appearance(AppearanceSettings),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsAction {
    Open(SettingsSection),
    Close,
    Update(SettingsChange),
    Save,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsState {
    pub active: Option<SettingsSection>,
    pub profile: ProfileSettings,
    pub notifications: NotificationSettings,
    pub privacy: PrivacySettings,
    pub appearance: AppearanceSettings,
    /// Section confirmed by the most recent `Save`; cleared by any other action.
    pub last_saved: Option<SettingsSection>,
}

impl SettingsState {
    pub fn reduce(mut self, action: SettingsAction) -> Self {
        self.last_saved = None;
        match action {
            SettingsAction::Open(section) => self.active = Some(section),
            SettingsAction::Close => self.active = None,
            SettingsAction::Update(change) => match change {
                SettingsChange::Profile(p) => self.profile = p,
                SettingsChange::Notifications(n) => self.notifications = n,
                SettingsChange::Privacy(p) => self.privacy = p,
                SettingsChange::Appearance(a) => self.appearance = a,
            },
            SettingsAction::Save => self.last_saved = self.active.take(),
        }
        self
    }

    pub fn confirmation(&self) -> Option<String> {
        self.last_saved
            .map(|section| format!("{section} settings saved successfully!"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = SettingsState::default();
        assert!(s.active.is_none());
        assert_eq!(s.profile.name, "Admin User");
        assert!(!s.notifications.weekly_report);
        assert!(!s.privacy.public_profile);
        assert_eq!(s.appearance.theme, Theme::Dark);
    }

    #[test]
    fn test_save_closes_and_confirms() {
        let s = SettingsState::default()
            .reduce(SettingsAction::Open(SettingsSection::Privacy))
            .reduce(SettingsAction::Save);
        assert!(s.active.is_none());
        assert_eq!(
            s.confirmation().as_deref(),
            Some("Privacy settings saved successfully!")
        );
    }

    #[test]
    fn test_save_without_open_section() {
        let s = SettingsState::default().reduce(SettingsAction::Save);
        assert!(s.confirmation().is_none());
    }

    #[test]
    fn test_update_keeps_modal_open() {
        let appearance = AppearanceSettings {
            theme: Theme::Light,
            ..AppearanceSettings::default()
        };
        let s = SettingsState::default()
            .reduce(SettingsAction::Open(SettingsSection::Appearance))
            .reduce(SettingsAction::Update(SettingsChange::Appearance(appearance)));
        assert_eq!(s.active, Some(SettingsSection::Appearance));
        assert_eq!(s.appearance.theme, Theme::Light);
    }

    #[test]
    fn test_confirmation_cleared_by_next_action() {
        let s = SettingsState::default()
            .reduce(SettingsAction::Open(SettingsSection::Profile))
            .reduce(SettingsAction::Save)
            .reduce(SettingsAction::Open(SettingsSection::Notifications));
        assert!(s.confirmation().is_none());
    }

    #[test]
    fn test_close_discards_nothing() {
        let profile = ProfileSettings {
            name: "Dana".to_string(),
            ..ProfileSettings::default()
        };
        let s = SettingsState::default()
            .reduce(SettingsAction::Open(SettingsSection::Profile))
            .reduce(SettingsAction::Update(SettingsChange::Profile(profile)))
            .reduce(SettingsAction::Close);
        assert!(s.active.is_none());
        assert_eq!(s.profile.name, "Dana");
        assert!(s.confirmation().is_none());
    }
}
