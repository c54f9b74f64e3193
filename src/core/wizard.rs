use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::core::validation::{validate_profile_step, FieldErrors};
use crate::models::ProfileForm;

/// Errors raised while building a profile or saving settings
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("Step {step} is incomplete: {errors}")]
    Incomplete { step: u8, errors: FieldErrors },

    #[error("Unknown wizard step: {0}")]
    UnknownStep(u8),

    #[error("Unknown settings section: {0}")]
    UnknownSection(String),

    #[error("User not found: {0}")]
    UserNotFound(String),
}

/// Static description of one wizard step
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WizardStep {
    pub id: u8,
    pub title: &'static str,
    pub tip: &'static str,
}

pub const WIZARD_STEPS: [WizardStep; 5] = [
    WizardStep {
        id: 1,
        title: "Basic Info",
        tip: "A clear name helps build trust with mentors!",
    },
    WizardStep {
        id: 2,
        title: "Education",
        tip: "Your educational background helps mentors understand your foundation.",
    },
    WizardStep {
        id: 3,
        title: "Skills",
        tip: "Add skills you have or want to develop - mentors love helping with both!",
    },
    WizardStep {
        id: 4,
        title: "Career Interests",
        tip: "The more specific you are, the better we can match you!",
    },
    WizardStep {
        id: 5,
        title: "Profile Picture",
        tip: "A clear photo helps mentors put a face to the name!",
    },
];

pub const STEP_COUNT: u8 = WIZARD_STEPS.len() as u8;

pub fn step_info(step: u8) -> Option<&'static WizardStep> {
    WIZARD_STEPS.iter().find(|s| s.id == step)
}

/// Progress through the five profile-building steps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileWizard {
    current_step: u8,
    completed_steps: Vec<u8>,
}

impl ProfileWizard {
    pub fn new() -> Self {
        Self {
            current_step: 1,
            completed_steps: Vec::new(),
        }
    }

    /// Resume from steps recorded earlier; unknown ids are dropped
    pub fn resume(completed: &[u8]) -> Self {
        let mut wizard = Self::new();
        for &step in completed {
            if step_info(step).is_some() && !wizard.completed_steps.contains(&step) {
                wizard.completed_steps.push(step);
            }
        }
        wizard.current_step = (1..=STEP_COUNT)
            .find(|s| !wizard.completed_steps.contains(s))
            .unwrap_or(STEP_COUNT);
        wizard
    }

    pub fn current_step(&self) -> u8 {
        self.current_step
    }

    pub fn completed_steps(&self) -> &[u8] {
        &self.completed_steps
    }

    pub fn progress_percent(&self) -> f64 {
        self.completed_steps.len() as f64 * 100.0 / STEP_COUNT as f64
    }

    /// Validate `step` and, if it passes, mark it done and move on
    pub fn complete_step(&mut self, step: u8, form: &ProfileForm) -> Result<&'static WizardStep, ProfileError> {
        let info = step_info(step).ok_or(ProfileError::UnknownStep(step))?;

        validate_profile_step(step, form).map_err(ProfileError::Validation)?;

        if !self.completed_steps.contains(&step) {
            self.completed_steps.push(step);
        }
        if step < STEP_COUNT {
            self.current_step = step + 1;
        }

        tracing::debug!("Wizard step {} ({}) completed", step, info.title);
        Ok(info)
    }

    /// Check every step in order, stopping at the first invalid one
    pub fn finish(&self, form: &ProfileForm) -> Result<(), ProfileError> {
        for step in 1..=STEP_COUNT {
            validate_profile_step(step, form)
                .map_err(|errors| ProfileError::Incomplete { step, errors })?;
        }
        Ok(())
    }
}

impl Default for ProfileWizard {
    fn default() -> Self {
        Self::new()
    }
}
