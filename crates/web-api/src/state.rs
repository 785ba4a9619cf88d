use std::sync::Arc;

use application::{ApplicationService, JobService, MessageService, RatingService, UserService};

use crate::JwtService;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub job_service: Arc<JobService>,
    pub application_service: Arc<ApplicationService>,
    pub rating_service: Arc<RatingService>,
    pub message_service: Arc<MessageService>,
    pub jwt_service: Arc<JwtService>,
}

impl AppState {
    pub fn new(
        user_service: Arc<UserService>,
        job_service: Arc<JobService>,
        application_service: Arc<ApplicationService>,
        rating_service: Arc<RatingService>,
        message_service: Arc<MessageService>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            user_service,
            job_service,
            application_service,
            rating_service,
            message_service,
            jwt_service,
        }
    }
}
