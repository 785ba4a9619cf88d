mod application_service;
mod job_service;
mod message_service;
mod rating_service;
mod user_service;

#[cfg(test)]
mod application_service_tests;
#[cfg(test)]
mod message_service_tests;

pub use application_service::{ApplicationService, ApplicationServiceDependencies, ApplyRequest};
pub use job_service::{
    JobService, JobServiceDependencies, LocationRequest, PostJobRequest, UpdateJobRequest,
};
pub use message_service::{MessageService, MessageServiceDependencies, SendMessageRequest};
pub use rating_service::{
    RateUserRequest, RatingService, RatingServiceDependencies, UpdateRatingRequest,
};
pub use user_service::{
    AuthenticateUserRequest, ChangePasswordRequest, RegisterUserRequest, UpdateProfileRequest,
    UpdateSettingsRequest, UserService, UserServiceDependencies,
};
