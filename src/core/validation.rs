use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;
use crate::models::{AccountSettingsForm, ProfileForm, SettingsSection};

static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]+$").unwrap());

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{10}$").unwrap());

static PAYMENT_METHOD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+\s+ending\s+in\s+[0-9]{4}$").unwrap());

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_ADDRESS_LEN: usize = 5;
pub const MIN_EDUCATION_LEN: usize = 3;
pub const MIN_INTERESTS_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 8;

/// Field name to user-facing message, one entry per failing field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, field: &str, outcome: Result<(), &'static str>) {
        if let Err(message) = outcome {
            self.0.insert(field.to_string(), message.to_string());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        self.0
    }

    /// Ok when nothing failed
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
        f.write_str(&parts.join("; "))
    }
}

pub fn validate_name(name: &str) -> Result<(), &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Full name is required.");
    }
    if !NAME_REGEX.is_match(name) || name.chars().count() < MIN_NAME_LEN {
        return Err("Name must contain only letters and be at least 2 characters long.");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Email is required.");
    }
    if !EMAIL_REGEX.is_match(email) {
        return Err("Please enter a valid email address.");
    }
    Ok(())
}

/// Phone is optional, an empty value passes
pub fn validate_phone(phone: &str) -> Result<(), &'static str> {
    if !phone.is_empty() && !PHONE_REGEX.is_match(phone.trim()) {
        return Err("Phone number must be a 10-digit number.");
    }
    Ok(())
}

pub fn validate_address(address: &str) -> Result<(), &'static str> {
    let address = address.trim();
    if address.is_empty() {
        return Err("Address is required.");
    }
    if address.chars().count() < MIN_ADDRESS_LEN {
        return Err("Address must be at least 5 characters long.");
    }
    Ok(())
}

pub fn validate_education(education: &str) -> Result<(), &'static str> {
    let education = education.trim();
    if education.is_empty() {
        return Err("Education is required.");
    }
    if education.chars().count() < MIN_EDUCATION_LEN {
        return Err("Education must be at least 3 characters long.");
    }
    Ok(())
}

pub fn validate_interests(interests: &str) -> Result<(), &'static str> {
    let interests = interests.trim();
    if interests.is_empty() {
        return Err("Career interests are required.");
    }
    if interests.chars().count() < MIN_INTERESTS_LEN {
        return Err("Interests must be at least 3 characters long.");
    }
    Ok(())
}

pub fn validate_skills(skills: &[String]) -> Result<(), &'static str> {
    if skills.is_empty() {
        return Err("At least one skill is required.");
    }
    Ok(())
}

pub fn validate_password_change(form: &AccountSettingsForm) -> Result<(), &'static str> {
    if form.current_password.is_empty() {
        return Err("Current password is required.");
    }
    if form.password.is_empty() {
        return Err("New password is required.");
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err("New password must be at least 8 characters long.");
    }
    if form.password != form.confirm_password {
        return Err("New passwords do not match.");
    }
    Ok(())
}

/// Payment method is optional; the raw value is checked, not a trimmed one
pub fn validate_payment_method(method: &str) -> Result<(), &'static str> {
    if !method.is_empty() && !PAYMENT_METHOD_REGEX.is_match(method) {
        return Err("Enter a valid payment method (e.g., Visa ending in 1234).");
    }
    Ok(())
}

pub fn validate_profile_picture(picture: Option<&str>) -> Result<(), &'static str> {
    match picture {
        Some(p) if !p.trim().is_empty() => Ok(()),
        _ => Err("A profile picture is required."),
    }
}

/// Validate one account settings section, collecting every failing field
pub fn validate_settings_section(
    section: SettingsSection,
    form: &AccountSettingsForm,
) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    match section {
        SettingsSection::Personal => {
            errors.push("name", validate_name(&form.name));
            errors.push("email", validate_email(&form.email));
            errors.push("phone", validate_phone(&form.phone));
            errors.push("address", validate_address(&form.address));
            errors.push("education", validate_education(&form.education));
            errors.push("interests", validate_interests(&form.interests));
            errors.push("skills", validate_skills(&form.skills));
        }
        SettingsSection::Security => {
            if form.change_password {
                errors.push("password", validate_password_change(form));
            }
        }
        SettingsSection::Payments => {
            errors.push("paymentMethod", validate_payment_method(&form.payment_method));
        }
        SettingsSection::Data | SettingsSection::History => {}
    }

    errors.into_result()
}

/// Validate the fields owned by one wizard step (1-based)
pub fn validate_profile_step(step: u8, form: &ProfileForm) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    match step {
        1 => errors.push("name", validate_name(&form.name)),
        2 => errors.push("education", validate_education(&form.education)),
        3 => errors.push("skills", validate_skills(&form.skills)),
        4 => errors.push("interests", validate_interests(&form.interests)),
        5 => errors.push(
            "profilePicture",
            validate_profile_picture(form.profile_picture.as_deref()),
        ),
        _ => {}
    }

    errors.into_result()
}

/// Add a skill tag; blank input and duplicates are ignored
///
/// Returns whether the list changed.
pub fn add_skill(skills: &mut Vec<String>, raw: &str) -> bool {
    let trimmed = raw.trim();
    if trimmed.is_empty() || skills.iter().any(|s| s == trimmed) {
        return false;
    }
    skills.push(trimmed.to_string());
    true
}

pub fn remove_skill(skills: &mut Vec<String>, skill: &str) -> bool {
    let before = skills.len();
    skills.retain(|s| s != skill);
    skills.len() != before
}
