//! 路由测试支撑：在内存仓储上组装完整的应用状态。

use std::sync::Arc;

use application::{
    ApplicationService, ApplicationServiceDependencies, InMemoryJobApplicationRepository,
    InMemoryJobRepository, InMemoryMessageRepository, InMemoryRatingRepository,
    InMemoryUserRepository, JobService, JobServiceDependencies, MessageService,
    MessageServiceDependencies, PasswordHasher, PasswordHasherError, RatingService,
    RatingServiceDependencies, SystemClock, UserService, UserServiceDependencies,
};
use async_trait::async_trait;
use axum::Router;
use domain::PasswordHash;
use web_api::{router, AppState, JwtConfig, JwtService};

/// 测试用明文“哈希器”，避免真实 bcrypt 的开销
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, plaintext: &str) -> Result<PasswordHash, PasswordHasherError> {
        PasswordHash::new(plaintext.to_owned())
            .map_err(|err| PasswordHasherError::hash_error(err.to_string()))
    }

    async fn verify(
        &self,
        plaintext: &str,
        hashed: &PasswordHash,
    ) -> Result<bool, PasswordHasherError> {
        Ok(hashed.as_str() == plaintext)
    }
}

pub fn test_router() -> Router {
    let user_repository = Arc::new(InMemoryUserRepository::new());
    let job_repository = Arc::new(InMemoryJobRepository::new());
    let application_repository = Arc::new(InMemoryJobApplicationRepository::new());
    let rating_repository = Arc::new(InMemoryRatingRepository::new());
    let message_repository = Arc::new(InMemoryMessageRepository::new());
    let clock = Arc::new(SystemClock::default());
    let password_hasher = Arc::new(PlainPasswordHasher);

    let user_service = Arc::new(UserService::new(UserServiceDependencies {
        user_repository: user_repository.clone(),
        password_hasher,
        clock: clock.clone(),
    }));

    let job_service = Arc::new(JobService::new(JobServiceDependencies {
        job_repository: job_repository.clone(),
        clock: clock.clone(),
    }));

    let application_service = Arc::new(ApplicationService::new(ApplicationServiceDependencies {
        application_repository,
        job_repository,
        user_repository: user_repository.clone(),
        clock: clock.clone(),
    }));

    let rating_service = Arc::new(RatingService::new(RatingServiceDependencies {
        rating_repository,
        user_repository,
        clock: clock.clone(),
    }));

    let message_service = Arc::new(MessageService::new(MessageServiceDependencies {
        message_repository,
        clock,
    }));

    let jwt_service = Arc::new(JwtService::new(JwtConfig {
        secret: "test-secret-key-with-at-least-32-characters".to_string(),
        expiration_hours: 24,
    }));

    let state = AppState::new(
        user_service,
        job_service,
        application_service,
        rating_service,
        message_service,
        jwt_service,
    );
    router(state)
}
