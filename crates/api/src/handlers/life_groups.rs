//! Handlers for life group signups.

use axum::extract::State;
use axum::Json;
use highfields_core::error::CoreError;
use highfields_core::forms::{validate_email, validate_required, MAX_SHORT_TEXT_LENGTH};
use highfields_core::life_groups::GROUP_FULL_MESSAGE;
use highfields_core::types::parse_record_id;
use highfields_db::models::life_group::{
    CreateLifeGroupSignup, LifeGroup, LifeGroupSignup, SignupOutcome,
};
use highfields_db::repositories::{LifeGroupRepo, Resource};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

/// POST /api/life-groups/signup
///
/// Record a signup and bump the group's member count. Unknown or malformed
/// `group_id` yields 404 and writes nothing. Capacity is only checked when
/// `ENFORCE_GROUP_CAPACITY` is set; a full group then yields 409.
pub async fn signup(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateLifeGroupSignup>,
) -> AppResult<Json<LifeGroupSignup>> {
    validate_signup(&input).map_err(AppError::validation)?;

    let group_id = parse_record_id(&input.group_id)
        .ok_or_else(|| AppError::not_found(LifeGroup::ENTITY, &input.group_id))?;

    let outcome = LifeGroupRepo::signup(
        &state.pool,
        group_id,
        &input,
        state.config.enforce_group_capacity,
    )
    .await?;

    match outcome {
        SignupOutcome::Created(signup) => {
            tracing::info!(
                signup_id = %signup.id,
                group_id = %signup.group_id,
                "Life group signup recorded",
            );
            Ok(Json(signup))
        }
        SignupOutcome::GroupNotFound => Err(AppError::not_found(LifeGroup::ENTITY, input.group_id)),
        SignupOutcome::GroupFull => {
            tracing::info!(group_id = %group_id, "Signup refused, life group is full");
            Err(AppError::Core(CoreError::Conflict(
                GROUP_FULL_MESSAGE.to_string(),
            )))
        }
    }
}

fn validate_signup(input: &CreateLifeGroupSignup) -> Result<(), String> {
    validate_required("name", &input.name, MAX_SHORT_TEXT_LENGTH)?;
    validate_email("email", &input.email)?;
    validate_required("phone", &input.phone, MAX_SHORT_TEXT_LENGTH)
}
