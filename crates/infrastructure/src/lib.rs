//! 基础设施层实现。
//!
//! 提供 PostgreSQL 仓储与 bcrypt 密码哈希适配器，实现应用/领域层定义的接口。

pub mod password;
pub mod repository;

pub use password::BcryptPasswordHasher;
pub use repository::{
    create_pg_pool, PgJobApplicationRepository, PgJobRepository, PgMessageRepository,
    PgRatingRepository, PgStorage, PgUserRepository,
};
