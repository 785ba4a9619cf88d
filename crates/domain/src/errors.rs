//! 领域模型错误定义
//!
//! 每一种失败使用独立的变体，保证“职位不存在”与“评价不存在”这类
//! 形状相同但含义不同的错误对调用方保持可区分。

use thiserror::Error;

/// 领域模型错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// 输入超出值域或格式非法
    #[error("invalid {field}: {reason}")]
    InvalidArgument { field: String, reason: String },

    /// 用户不存在
    #[error("user not found")]
    UserNotFound,

    /// 职位不存在
    #[error("job not found")]
    JobNotFound,

    /// 评价不存在
    #[error("rating not found")]
    RatingNotFound,

    /// 邮箱已被注册
    #[error("email already in use")]
    EmailTaken,

    /// 句柄已被占用
    #[error("handle already in use")]
    HandleTaken,

    /// 同一职位重复投递
    #[error("you have already applied for this job")]
    AlreadyApplied,

    /// 同一用户重复评价，应改用更新操作
    #[error("you have already rated this user, use update to modify your rating")]
    AlreadyRated,

    /// 操作者不是记录的所有者
    #[error("you are not allowed to {action}")]
    PermissionDenied { action: String },
}

impl DomainError {
    /// 创建输入校验错误
    pub fn invalid_argument(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// 创建所有权校验错误
    pub fn permission_denied(action: impl Into<String>) -> Self {
        Self::PermissionDenied {
            action: action.into(),
        }
    }
}

/// 领域模型结果类型
pub type DomainResult<T> = Result<T, DomainError>;

/// 存储层错误类型
///
/// 唯一约束竞争由底层存储裁决，落败的并发写入以 `Conflict` 上报。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// 目标记录不存在
    #[error("record not found")]
    NotFound,

    /// 唯一约束冲突
    #[error("unique constraint violated")]
    Conflict,

    /// 底层存储故障
    #[error("storage error: {message}")]
    Storage { message: String },
}

impl RepositoryError {
    /// 创建存储故障错误
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}
