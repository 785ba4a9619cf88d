//! 对外数据传输对象。
//!
//! 带联结信息的读模型（投递人、评价人摘要）由服务层在取出原始记录后
//! 显式拼装，存储层不感知跨实体引用。

use domain::{Job, JobApplication, JobLocation, Message, Rating, Timestamp, User};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub handle: Option<String>,
    pub theme: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: Uuid::from(user.id),
            email: user.email.as_str().to_owned(),
            name: user.name.clone(),
            handle: user.handle.as_ref().map(|h| h.as_str().to_owned()),
            theme: user.theme.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDto {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub salary: Option<i64>,
    pub location: Option<JobLocation>,
    pub posted_by: Uuid,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&Job> for JobDto {
    fn from(job: &Job) -> Self {
        Self {
            id: Uuid::from(job.id),
            title: job.title.clone(),
            description: job.description.clone(),
            salary: job.salary,
            location: job.location.clone(),
            posted_by: Uuid::from(job.posted_by),
            created_at: job.created_at,
            updated_at: job.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationDto {
    pub id: Uuid,
    pub job_id: Uuid,
    pub applicant_id: Uuid,
    pub cover_letter: Option<String>,
    pub created_at: Timestamp,
}

impl From<&JobApplication> for ApplicationDto {
    fn from(application: &JobApplication) -> Self {
        Self {
            id: Uuid::from(application.id),
            job_id: Uuid::from(application.job_id),
            applicant_id: Uuid::from(application.applicant_id),
            cover_letter: application.cover_letter.clone(),
            created_at: application.created_at,
        }
    }
}

/// 投递人摘要：发布者查看投递列表时联结出的公开字段
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub handle: Option<String>,
}

impl From<&User> for ApplicantProfile {
    fn from(user: &User) -> Self {
        Self {
            id: Uuid::from(user.id),
            name: user.name.clone(),
            email: user.email.as_str().to_owned(),
            handle: user.handle.as_ref().map(|h| h.as_str().to_owned()),
        }
    }
}

/// 带投递人摘要的投递记录读模型
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobApplicationView {
    pub id: Uuid,
    pub job_id: Uuid,
    pub cover_letter: Option<String>,
    pub created_at: Timestamp,
    pub applicant: Option<ApplicantProfile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingDto {
    pub id: Uuid,
    pub rated_user_id: Uuid,
    pub rater_id: Uuid,
    pub rating: i16,
    pub comment: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&Rating> for RatingDto {
    fn from(rating: &Rating) -> Self {
        Self {
            id: Uuid::from(rating.id),
            rated_user_id: Uuid::from(rating.rated_user_id),
            rater_id: Uuid::from(rating.rater_id),
            rating: rating.score.value(),
            comment: rating.comment.clone(),
            created_at: rating.created_at,
            updated_at: rating.updated_at,
        }
    }
}

/// 评价人摘要：查询某用户收到的评价时联结出的公开字段
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaterProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<&User> for RaterProfile {
    fn from(user: &User) -> Self {
        Self {
            id: Uuid::from(user.id),
            name: user.name.clone(),
            email: user.email.as_str().to_owned(),
        }
    }
}

/// 带评价人摘要的评价读模型
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingView {
    pub id: Uuid,
    pub rated_user_id: Uuid,
    pub rating: i16,
    pub comment: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub rater: Option<RaterProfile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDto {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub recipient_id: Uuid,
    pub content: String,
    pub created_at: Timestamp,
}

impl From<&Message> for MessageDto {
    fn from(message: &Message) -> Self {
        Self {
            id: Uuid::from(message.id),
            sender_id: Uuid::from(message.sender_id),
            recipient_id: Uuid::from(message.recipient_id),
            content: message.content.as_str().to_owned(),
            created_at: message.created_at,
        }
    }
}
