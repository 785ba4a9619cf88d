//! 存储接口定义
//!
//! 唯一约束（邮箱、句柄、(职位, 申请人)、(被评价人, 评价人)）由具体实现
//! 原子裁决，落败的并发创建以 `RepositoryError::Conflict` 返回。

use futures::future::BoxFuture;

use crate::errors::RepositoryError;
use crate::job::Job;
use crate::job_application::JobApplication;
use crate::message::Message;
use crate::rating::Rating;
use crate::user::User;
use crate::value_objects::{Handle, JobId, RatingId, UserEmail, UserId};

pub type RepositoryResult<T> = Result<T, RepositoryError>;
pub type RepositoryFuture<T> = BoxFuture<'static, RepositoryResult<T>>;

pub trait UserRepository: Send + Sync {
    fn create(&self, user: User) -> RepositoryFuture<User>;
    fn update(&self, user: User) -> RepositoryFuture<User>;
    fn find_by_id(&self, id: UserId) -> RepositoryFuture<Option<User>>;
    fn find_by_email(&self, email: UserEmail) -> RepositoryFuture<Option<User>>;
    fn find_by_handle(&self, handle: Handle) -> RepositoryFuture<Option<User>>;
    // 读侧联结使用：按 ID 批量取用户
    fn find_by_ids(&self, ids: Vec<UserId>) -> RepositoryFuture<Vec<User>>;
}

pub trait JobRepository: Send + Sync {
    fn create(&self, job: Job) -> RepositoryFuture<Job>;
    fn update(&self, job: Job) -> RepositoryFuture<Job>;
    fn delete(&self, id: JobId) -> RepositoryFuture<()>;
    fn find_by_id(&self, id: JobId) -> RepositoryFuture<Option<Job>>;
    fn list_all(&self) -> RepositoryFuture<Vec<Job>>;
}

pub trait JobApplicationRepository: Send + Sync {
    fn create(&self, application: JobApplication) -> RepositoryFuture<JobApplication>;
    fn find_by_job_and_applicant(
        &self,
        job_id: JobId,
        applicant_id: UserId,
    ) -> RepositoryFuture<Option<JobApplication>>;
    fn list_by_job(&self, job_id: JobId) -> RepositoryFuture<Vec<JobApplication>>;
    fn count_by_job(&self, job_id: JobId) -> RepositoryFuture<u64>;
}

pub trait RatingRepository: Send + Sync {
    fn create(&self, rating: Rating) -> RepositoryFuture<Rating>;
    fn update(&self, rating: Rating) -> RepositoryFuture<Rating>;
    fn delete(&self, id: RatingId) -> RepositoryFuture<()>;
    fn find_by_id(&self, id: RatingId) -> RepositoryFuture<Option<Rating>>;
    fn find_by_rated_and_rater(
        &self,
        rated_user_id: UserId,
        rater_id: UserId,
    ) -> RepositoryFuture<Option<Rating>>;
    fn list_by_rated_user(&self, rated_user_id: UserId) -> RepositoryFuture<Vec<Rating>>;
}

pub trait MessageRepository: Send + Sync {
    fn create(&self, message: Message) -> RepositoryFuture<Message>;
    // 双向会话，按创建时间升序返回
    fn list_conversation(&self, user_id: UserId, other_user_id: UserId)
        -> RepositoryFuture<Vec<Message>>;
}
