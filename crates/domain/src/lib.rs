//! 招聘平台核心领域模型
//!
//! 包含用户、职位、投递、评价、私信等核心实体，以及写路径上强制执行的
//! 所有权与唯一性规则。

pub mod errors;
pub mod job;
pub mod job_application;
pub mod message;
pub mod rating;
pub mod repository;
pub mod user;
pub mod value_objects;

pub use errors::*;
pub use job::*;
pub use job_application::*;
pub use message::*;
pub use rating::*;
pub use repository::*;
pub use user::*;
pub use value_objects::*;
