use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::validation::validate_settings_section;
use crate::core::wizard::{ProfileError, ProfileWizard, STEP_COUNT};
use crate::models::{
    ErrorResponse, ProfileStepRequest, ProfileStepResponse, SaveSettingsRequest,
    SaveSettingsResponse, SeedUserRequest, SettingsSection, UserMetadata,
};
use crate::routes::mentors::AppState;

/// Configure profile and account settings routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/settings/{section}/validate", web::post().to(save_settings))
        .route("/profile/{user_id}", web::put().to(seed_user))
        .route("/profile/{user_id}", web::get().to(get_profile))
        .route("/profile/{user_id}/steps/{step}", web::post().to(complete_step))
        .route("/profile/{user_id}/finish", web::post().to(finish_profile));
}

/// Map profile errors to HTTP responses
pub fn profile_error_response(err: ProfileError) -> HttpResponse {
    match err {
        ProfileError::Validation(errors) => {
            let mut body = ErrorResponse::new(
                "Validation failed",
                "Please fix the errors before continuing.",
                400,
            );
            body.fields = errors.into_map();
            HttpResponse::BadRequest().json(body)
        }
        ProfileError::Incomplete { step, errors } => {
            let mut body = ErrorResponse::new(
                "Profile incomplete",
                format!(
                    "Please complete all steps with valid data before finishing (step {}).",
                    step
                ),
                400,
            );
            body.fields = errors.into_map();
            HttpResponse::BadRequest().json(body)
        }
        ProfileError::UnknownStep(_) | ProfileError::UnknownSection(_) => {
            HttpResponse::NotFound().json(ErrorResponse::new("Not found", err.to_string(), 404))
        }
        ProfileError::UserNotFound(_) => {
            HttpResponse::NotFound().json(ErrorResponse::new("User not found", err.to_string(), 404))
        }
    }
}

fn status_response(message: String, meta: UserMetadata) -> ProfileStepResponse {
    let wizard = ProfileWizard::resume(&meta.completed_steps);
    ProfileStepResponse {
        message,
        current_step: wizard.current_step(),
        completed_steps: wizard.completed_steps().to_vec(),
        progress_percent: wizard.progress_percent(),
        form: meta.to_profile_form(),
        profile: meta,
    }
}

/// Validate one account settings section
///
/// POST /api/v1/settings/{section}/validate
///
/// The form is checked, not stored: account fields belong to the identity
/// provider and are written by the client after a successful check.
async fn save_settings(
    path: web::Path<String>,
    req: web::Json<SaveSettingsRequest>,
) -> impl Responder {
    let section = match path.parse::<SettingsSection>() {
        Ok(section) => section,
        Err(e) => return profile_error_response(ProfileError::UnknownSection(e)),
    };

    match validate_settings_section(section, &req.form) {
        Ok(()) => {
            tracing::info!("Settings section {} validated", section);
            HttpResponse::Ok().json(SaveSettingsResponse {
                success: true,
                message: format!("{} settings saved successfully.", section.label()),
            })
        }
        Err(errors) => {
            tracing::info!("Settings section {} rejected: {}", section, errors);
            let mut body = ErrorResponse::new(
                "Validation failed",
                "Please fix the errors in the form before saving.",
                400,
            );
            body.fields = errors.into_map();
            HttpResponse::BadRequest().json(body)
        }
    }
}

/// Register a signed-in user
///
/// PUT /api/v1/profile/{userId}
async fn seed_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<SeedUserRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "Validation failed",
            errors.to_string(),
            400,
        ));
    }

    let meta = state.metadata.seed(&path, &req.full_name, &req.email).await;
    HttpResponse::Ok().json(status_response("User registered.".to_string(), meta))
}

/// Saved profile plus wizard progress
///
/// GET /api/v1/profile/{userId}
///
/// `form` carries the stored fields so the wizard can resume prefilled.
async fn get_profile(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let user_id = path.into_inner();

    match state.metadata.get(&user_id).await {
        Some(meta) => HttpResponse::Ok().json(status_response(String::new(), meta)),
        None => profile_error_response(ProfileError::UserNotFound(user_id)),
    }
}

/// Complete one wizard step
///
/// POST /api/v1/profile/{userId}/steps/{step}
async fn complete_step(
    state: web::Data<AppState>,
    path: web::Path<(String, u8)>,
    req: web::Json<ProfileStepRequest>,
) -> impl Responder {
    let (user_id, step) = path.into_inner();

    let existing = match state.metadata.get(&user_id).await {
        Some(meta) => meta,
        None => return profile_error_response(ProfileError::UserNotFound(user_id)),
    };

    let mut wizard = ProfileWizard::resume(&existing.completed_steps);
    let info = match wizard.complete_step(step, &req.form) {
        Ok(info) => info,
        Err(e) => {
            tracing::info!("Wizard step {} rejected for {}: {}", step, user_id, e);
            return profile_error_response(e);
        }
    };

    let meta = state
        .metadata
        .save_profile(&user_id, &req.form, wizard.completed_steps())
        .await;

    HttpResponse::Ok().json(ProfileStepResponse {
        message: format!("{} saved successfully.", info.title),
        current_step: wizard.current_step(),
        completed_steps: wizard.completed_steps().to_vec(),
        progress_percent: wizard.progress_percent(),
        form: meta.to_profile_form(),
        profile: meta,
    })
}

/// Validate every step and store the finished profile
///
/// POST /api/v1/profile/{userId}/finish
async fn finish_profile(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<ProfileStepRequest>,
) -> impl Responder {
    let user_id = path.into_inner();

    let existing = match state.metadata.get(&user_id).await {
        Some(meta) => meta,
        None => return profile_error_response(ProfileError::UserNotFound(user_id)),
    };

    let wizard = ProfileWizard::resume(&existing.completed_steps);
    if let Err(e) = wizard.finish(&req.form) {
        return profile_error_response(e);
    }

    let all_steps: Vec<u8> = (1..=STEP_COUNT).collect();
    let meta = state.metadata.save_profile(&user_id, &req.form, &all_steps).await;

    tracing::info!("Profile completed for user {}", user_id);
    HttpResponse::Ok().json(status_response("Profile completed.".to_string(), meta))
}
