//! 应用层实现。
//!
//! 这里提供围绕领域模型的用例服务，处理所有权与唯一性校验、读侧联结、
//! 以及对外部适配器（密码哈希、时钟、存储）的抽象。

pub mod clock;
pub mod dto;
pub mod error;
pub mod memory;
pub mod password;
pub mod services;

pub use clock::{Clock, SystemClock};
pub use dto::{
    ApplicantProfile, ApplicationDto, JobApplicationView, JobDto, MessageDto, RaterProfile,
    RatingDto, RatingView, UserDto,
};
pub use error::{ApplicationError, ApplicationResult};
pub use memory::{
    InMemoryJobApplicationRepository, InMemoryJobRepository, InMemoryMessageRepository,
    InMemoryRatingRepository, InMemoryUserRepository,
};
pub use password::{PasswordHasher, PasswordHasherError};
pub use services::{
    ApplicationService, ApplicationServiceDependencies, ApplyRequest, AuthenticateUserRequest,
    ChangePasswordRequest, JobService, JobServiceDependencies, LocationRequest, MessageService,
    MessageServiceDependencies, PostJobRequest, RateUserRequest, RatingService,
    RatingServiceDependencies, RegisterUserRequest, SendMessageRequest, UpdateJobRequest,
    UpdateProfileRequest, UpdateRatingRequest, UpdateSettingsRequest, UserService,
    UserServiceDependencies,
};
