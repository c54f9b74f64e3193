use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fields collected by the profile-building wizard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub interests: String,
    /// Uploaded picture reference (storage URL or file id)
    #[serde(rename = "profilePicture", default)]
    pub profile_picture: Option<String>,
}

/// Account settings page form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSettingsForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub interests: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(rename = "twoFactorEnabled", default)]
    pub two_factor_enabled: bool,
    /// Password fields are only checked when the user opened the change form
    #[serde(rename = "changePassword", default)]
    pub change_password: bool,
    #[serde(rename = "currentPassword", default)]
    pub current_password: String,
    #[serde(default)]
    pub password: String,
    #[serde(rename = "confirmPassword", default)]
    pub confirm_password: String,
    #[serde(rename = "dataPreferences", default)]
    pub data_preferences: DataPreferences,
    #[serde(rename = "paymentMethod", default)]
    pub payment_method: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataPreferences {
    #[serde(rename = "shareData", default)]
    pub share_data: bool,
    #[serde(rename = "receiveEmails", default = "default_true")]
    pub receive_emails: bool,
}

impl Default for DataPreferences {
    fn default() -> Self {
        Self {
            share_data: false,
            receive_emails: true,
        }
    }
}

fn default_true() -> bool { true }

/// Sections of the account settings page, each saved independently
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingsSection {
    Personal,
    Security,
    Data,
    Payments,
    History,
}

impl SettingsSection {
    pub fn label(self) -> &'static str {
        match self {
            SettingsSection::Personal => "Personal",
            SettingsSection::Security => "Security",
            SettingsSection::Data => "Data",
            SettingsSection::Payments => "Payments",
            SettingsSection::History => "History",
        }
    }
}

impl fmt::Display for SettingsSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label().to_lowercase())
    }
}

impl FromStr for SettingsSection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "personal" => Ok(SettingsSection::Personal),
            "security" => Ok(SettingsSection::Security),
            "data" => Ok(SettingsSection::Data),
            "payments" => Ok(SettingsSection::Payments),
            "history" => Ok(SettingsSection::History),
            other => Err(format!("unknown settings section: {}", other)),
        }
    }
}

/// Profile data kept in the identity provider's per-user metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMetadata {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "fullName", default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub interests: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(rename = "completedSteps", default)]
    pub completed_steps: Vec<u8>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl UserMetadata {
    /// Seed a wizard form from stored metadata
    pub fn to_profile_form(&self) -> ProfileForm {
        ProfileForm {
            name: self.full_name.clone(),
            education: self.education.clone(),
            skills: self.skills.clone(),
            interests: self.interests.clone(),
            profile_picture: None,
        }
    }
}
