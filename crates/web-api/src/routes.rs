use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;
use uuid::Uuid;
use validator::Validate;

use application::{
    ApplicationDto, ApplyRequest, AuthenticateUserRequest, ChangePasswordRequest,
    JobApplicationView, JobDto, LocationRequest, MessageDto, PostJobRequest, RateUserRequest,
    RatingDto, RatingView, RegisterUserRequest, SendMessageRequest, UpdateJobRequest,
    UpdateProfileRequest, UpdateRatingRequest, UpdateSettingsRequest, UserDto,
};

use crate::{auth::LoginResponse, error::ApiError, state::AppState};

#[derive(Debug, Deserialize, Validate)]
struct RegisterPayload {
    #[validate(length(min = 1))]
    name: String,
    #[validate(email)]
    email: String,
    #[validate(length(min = 6))]
    password: String,
}

#[derive(Debug, Deserialize)]
struct LoginPayload {
    email: String,
    password: String,
}

#[derive(Debug, Deserialize, Validate)]
struct ChangePasswordPayload {
    current_password: String,
    #[validate(length(min = 6))]
    new_password: String,
}

#[derive(Debug, Deserialize)]
struct UpdateProfilePayload {
    name: Option<String>,
    handle: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UpdateSettingsPayload {
    theme: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
struct LocationPayload {
    #[validate(length(min = 1))]
    formatted_address: String,
    #[validate(length(min = 1))]
    place_id: String,
    #[validate(range(min = -90.0, max = 90.0))]
    lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    lng: f64,
}

impl From<LocationPayload> for LocationRequest {
    fn from(payload: LocationPayload) -> Self {
        LocationRequest {
            formatted_address: payload.formatted_address,
            place_id: payload.place_id,
            lat: payload.lat,
            lng: payload.lng,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
struct CreateJobPayload {
    #[validate(length(min = 1))]
    title: String,
    #[validate(length(min = 1))]
    description: String,
    salary: Option<i64>,
    #[validate(nested)]
    location: Option<LocationPayload>,
}

#[derive(Debug, Deserialize, Validate)]
struct UpdateJobPayload {
    #[validate(length(min = 1))]
    title: Option<String>,
    #[validate(length(min = 1))]
    description: Option<String>,
    salary: Option<i64>,
    #[validate(nested)]
    location: Option<LocationPayload>,
}

#[derive(Debug, Deserialize)]
struct ApplyPayload {
    job_id: Uuid,
    cover_letter: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
struct CreateRatingPayload {
    #[validate(range(min = 1, max = 5))]
    rating: i16,
    comment: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
struct UpdateRatingPayload {
    #[validate(range(min = 1, max = 5))]
    rating: Option<i16>,
    comment: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
struct SendMessagePayload {
    recipient_id: Uuid,
    #[validate(length(min = 1))]
    content: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register_user))
        .route("/auth/login", post(login_user))
        .route("/auth/change-password", post(change_password))
        .route("/users/profile", get(get_profile).put(update_profile))
        .route("/users/settings", get(get_settings).put(update_settings))
        .route("/users/handle/{handle}", get(get_profile_by_handle))
        .route("/jobs", get(list_jobs).post(create_job))
        .route(
            "/jobs/{job_id}",
            get(get_job).put(update_job).delete(remove_job),
        )
        .route("/applications", post(apply_to_job))
        .route("/applications/job/{job_id}", get(list_applications))
        .route("/applications/job/{job_id}/count", get(count_applications))
        .route(
            "/ratings/user/{rated_user_id}",
            post(create_rating).get(list_ratings),
        )
        .route("/ratings/{rating_id}", put(update_rating).delete(remove_rating))
        .route("/messages", post(send_message))
        .route("/messages/conversation/{user_id}", get(get_conversation))
}

async fn health() -> StatusCode {
    StatusCode::OK
}

fn validated(result: Result<(), validator::ValidationErrors>) -> Result<(), ApiError> {
    result.map_err(|err| ApiError::bad_request(err.to_string()))
}

async fn register_user(
    State(state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> Result<(StatusCode, Json<LoginResponse>), ApiError> {
    validated(payload.validate())?;

    let user = state
        .user_service
        .register(RegisterUserRequest {
            name: payload.name,
            email: payload.email,
            password: payload.password,
        })
        .await?;

    let access_token = state.jwt_service.generate_token(Uuid::from(user.id))?;
    Ok((
        StatusCode::CREATED,
        Json(LoginResponse {
            user: UserDto::from(&user),
            access_token,
        }),
    ))
}

async fn login_user(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<LoginResponse>, ApiError> {
    let user = state
        .user_service
        .authenticate(AuthenticateUserRequest {
            email: payload.email,
            password: payload.password,
        })
        .await?;

    let access_token = state.jwt_service.generate_token(Uuid::from(user.id))?;
    Ok(Json(LoginResponse {
        user: UserDto::from(&user),
        access_token,
    }))
}

async fn change_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ChangePasswordPayload>,
) -> Result<Json<Value>, ApiError> {
    let actor = state.jwt_service.extract_user_from_headers(&headers)?;
    validated(payload.validate())?;

    state
        .user_service
        .change_password(
            actor,
            ChangePasswordRequest {
                current_password: payload.current_password,
                new_password: payload.new_password,
            },
        )
        .await?;

    Ok(Json(json!({ "message": "Password updated successfully" })))
}

async fn get_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<UserDto>, ApiError> {
    let actor = state.jwt_service.extract_user_from_headers(&headers)?;
    let profile = state.user_service.get_profile(actor).await?;
    Ok(Json(profile))
}

async fn get_profile_by_handle(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> Result<Json<UserDto>, ApiError> {
    let profile = state.user_service.get_by_handle(&handle).await?;
    Ok(Json(profile))
}

async fn update_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateProfilePayload>,
) -> Result<Json<UserDto>, ApiError> {
    let actor = state.jwt_service.extract_user_from_headers(&headers)?;
    let profile = state
        .user_service
        .update_profile(
            actor,
            UpdateProfileRequest {
                name: payload.name,
                handle: payload.handle,
            },
        )
        .await?;
    Ok(Json(profile))
}

async fn get_settings(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<UserDto>, ApiError> {
    let actor = state.jwt_service.extract_user_from_headers(&headers)?;
    let profile = state.user_service.get_profile(actor).await?;
    Ok(Json(profile))
}

async fn update_settings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateSettingsPayload>,
) -> Result<Json<UserDto>, ApiError> {
    let actor = state.jwt_service.extract_user_from_headers(&headers)?;
    let profile = state
        .user_service
        .update_settings(
            actor,
            UpdateSettingsRequest {
                theme: payload.theme,
            },
        )
        .await?;
    Ok(Json(profile))
}

async fn list_jobs(State(state): State<AppState>) -> Result<Json<Vec<JobDto>>, ApiError> {
    let jobs = state.job_service.list_jobs().await?;
    Ok(Json(jobs))
}

async fn get_job(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
) -> Result<Json<JobDto>, ApiError> {
    let job = state.job_service.get_job(job_id).await?;
    Ok(Json(job))
}

async fn create_job(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateJobPayload>,
) -> Result<(StatusCode, Json<JobDto>), ApiError> {
    let actor = state.jwt_service.extract_user_from_headers(&headers)?;
    validated(payload.validate())?;

    let job = state
        .job_service
        .post_job(
            PostJobRequest {
                title: payload.title,
                description: payload.description,
                salary: payload.salary,
                location: payload.location.map(LocationRequest::from),
            },
            actor,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(job)))
}

async fn update_job(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
    headers: HeaderMap,
    Json(payload): Json<UpdateJobPayload>,
) -> Result<Json<JobDto>, ApiError> {
    let actor = state.jwt_service.extract_user_from_headers(&headers)?;
    validated(payload.validate())?;

    let job = state
        .job_service
        .update_job(
            job_id,
            UpdateJobRequest {
                title: payload.title,
                description: payload.description,
                salary: payload.salary,
                location: payload.location.map(LocationRequest::from),
            },
            actor,
        )
        .await?;

    Ok(Json(job))
}

async fn remove_job(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    let actor = state.jwt_service.extract_user_from_headers(&headers)?;
    state.job_service.remove_job(job_id, actor).await?;
    Ok(Json(json!({ "message": "Job removed successfully" })))
}

async fn apply_to_job(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ApplyPayload>,
) -> Result<(StatusCode, Json<ApplicationDto>), ApiError> {
    let actor = state.jwt_service.extract_user_from_headers(&headers)?;

    let application = state
        .application_service
        .apply(
            ApplyRequest {
                job_id: payload.job_id,
                cover_letter: payload.cover_letter,
            },
            actor,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(application)))
}

async fn list_applications(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<Vec<JobApplicationView>>, ApiError> {
    let actor = state.jwt_service.extract_user_from_headers(&headers)?;
    let applications = state
        .application_service
        .list_for_job(job_id, actor)
        .await?;
    Ok(Json(applications))
}

async fn count_applications(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let count = state.application_service.count_for_job(job_id).await?;
    Ok(Json(json!({ "count": count })))
}

async fn create_rating(
    State(state): State<AppState>,
    Path(rated_user_id): Path<Uuid>,
    headers: HeaderMap,
    Json(payload): Json<CreateRatingPayload>,
) -> Result<(StatusCode, Json<RatingDto>), ApiError> {
    let actor = state.jwt_service.extract_user_from_headers(&headers)?;
    validated(payload.validate())?;

    let rating = state
        .rating_service
        .rate_user(
            rated_user_id,
            actor,
            RateUserRequest {
                rating: payload.rating,
                comment: payload.comment,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(rating)))
}

async fn list_ratings(
    State(state): State<AppState>,
    Path(rated_user_id): Path<Uuid>,
) -> Result<Json<Vec<RatingView>>, ApiError> {
    let ratings = state.rating_service.list_for_user(rated_user_id).await?;
    Ok(Json(ratings))
}

async fn update_rating(
    State(state): State<AppState>,
    Path(rating_id): Path<Uuid>,
    headers: HeaderMap,
    Json(payload): Json<UpdateRatingPayload>,
) -> Result<Json<RatingDto>, ApiError> {
    let actor = state.jwt_service.extract_user_from_headers(&headers)?;
    validated(payload.validate())?;

    let rating = state
        .rating_service
        .update_rating(
            rating_id,
            actor,
            UpdateRatingRequest {
                rating: payload.rating,
                comment: payload.comment,
            },
        )
        .await?;

    Ok(Json(rating))
}

async fn remove_rating(
    State(state): State<AppState>,
    Path(rating_id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    let actor = state.jwt_service.extract_user_from_headers(&headers)?;
    state.rating_service.remove_rating(rating_id, actor).await?;
    Ok(Json(json!({ "message": "Rating removed successfully" })))
}

async fn send_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SendMessagePayload>,
) -> Result<(StatusCode, Json<MessageDto>), ApiError> {
    let actor = state.jwt_service.extract_user_from_headers(&headers)?;
    validated(payload.validate())?;

    let message = state
        .message_service
        .send_message(
            SendMessageRequest {
                recipient_id: payload.recipient_id,
                content: payload.content,
            },
            actor,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(message)))
}

async fn get_conversation(
    State(state): State<AppState>,
    Path(other_user_id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<Vec<MessageDto>>, ApiError> {
    let actor = state.jwt_service.extract_user_from_headers(&headers)?;
    let messages = state
        .message_service
        .get_conversation(actor, other_user_id)
        .await?;
    Ok(Json(messages))
}
