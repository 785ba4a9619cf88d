//! 内存存储实现（用于测试和简单部署）。
//!
//! 与 PostgreSQL 实现遵循同一套契约：唯一约束在持有写锁时裁决，
//! 落败的并发创建返回 `RepositoryError::Conflict`。

use std::collections::HashMap;
use std::sync::Arc;

use domain::{
    Handle, Job, JobApplication, JobApplicationRepository, JobId, JobRepository, Message,
    MessageRepository, Rating, RatingId, RatingRepository, RepositoryError, RepositoryFuture,
    User, UserEmail, UserId, UserRepository,
};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default, Clone)]
pub struct InMemoryUserRepository {
    data: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryUserRepository {
    fn create(&self, user: User) -> RepositoryFuture<User> {
        let repo = self.data.clone();
        Box::pin(async move {
            let mut guard = repo.write().await;
            let duplicate = guard.values().any(|existing| {
                existing.email == user.email
                    || (user.handle.is_some() && existing.handle == user.handle)
            });
            if duplicate {
                return Err(RepositoryError::Conflict);
            }
            let stored = user.clone();
            guard.insert(Uuid::from(user.id), user);
            Ok(stored)
        })
    }

    fn update(&self, user: User) -> RepositoryFuture<User> {
        let repo = self.data.clone();
        Box::pin(async move {
            let mut guard = repo.write().await;
            let id = Uuid::from(user.id);
            if !guard.contains_key(&id) {
                return Err(RepositoryError::NotFound);
            }
            let duplicate = guard.values().any(|existing| {
                existing.id != user.id
                    && (existing.email == user.email
                        || (user.handle.is_some() && existing.handle == user.handle))
            });
            if duplicate {
                return Err(RepositoryError::Conflict);
            }
            let stored = user.clone();
            guard.insert(id, user);
            Ok(stored)
        })
    }

    fn find_by_id(&self, id: UserId) -> RepositoryFuture<Option<User>> {
        let repo = self.data.clone();
        Box::pin(async move {
            let guard = repo.read().await;
            Ok(guard.get(&Uuid::from(id)).cloned())
        })
    }

    fn find_by_email(&self, email: UserEmail) -> RepositoryFuture<Option<User>> {
        let repo = self.data.clone();
        Box::pin(async move {
            let guard = repo.read().await;
            Ok(guard.values().find(|user| user.email == email).cloned())
        })
    }

    fn find_by_handle(&self, handle: Handle) -> RepositoryFuture<Option<User>> {
        let repo = self.data.clone();
        Box::pin(async move {
            let guard = repo.read().await;
            Ok(guard
                .values()
                .find(|user| user.handle.as_ref() == Some(&handle))
                .cloned())
        })
    }

    fn find_by_ids(&self, ids: Vec<UserId>) -> RepositoryFuture<Vec<User>> {
        let repo = self.data.clone();
        Box::pin(async move {
            let guard = repo.read().await;
            Ok(ids
                .into_iter()
                .filter_map(|id| guard.get(&Uuid::from(id)).cloned())
                .collect())
        })
    }
}

#[derive(Default, Clone)]
pub struct InMemoryJobRepository {
    data: Arc<RwLock<HashMap<Uuid, Job>>>,
}

impl InMemoryJobRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl JobRepository for InMemoryJobRepository {
    fn create(&self, job: Job) -> RepositoryFuture<Job> {
        let repo = self.data.clone();
        Box::pin(async move {
            let mut guard = repo.write().await;
            let stored = job.clone();
            guard.insert(Uuid::from(job.id), job);
            Ok(stored)
        })
    }

    fn update(&self, job: Job) -> RepositoryFuture<Job> {
        let repo = self.data.clone();
        Box::pin(async move {
            let mut guard = repo.write().await;
            let id = Uuid::from(job.id);
            if !guard.contains_key(&id) {
                return Err(RepositoryError::NotFound);
            }
            let stored = job.clone();
            guard.insert(id, job);
            Ok(stored)
        })
    }

    fn delete(&self, id: JobId) -> RepositoryFuture<()> {
        let repo = self.data.clone();
        Box::pin(async move {
            let mut guard = repo.write().await;
            if guard.remove(&Uuid::from(id)).is_none() {
                return Err(RepositoryError::NotFound);
            }
            Ok(())
        })
    }

    fn find_by_id(&self, id: JobId) -> RepositoryFuture<Option<Job>> {
        let repo = self.data.clone();
        Box::pin(async move {
            let guard = repo.read().await;
            Ok(guard.get(&Uuid::from(id)).cloned())
        })
    }

    fn list_all(&self) -> RepositoryFuture<Vec<Job>> {
        let repo = self.data.clone();
        Box::pin(async move {
            let guard = repo.read().await;
            let mut jobs: Vec<Job> = guard.values().cloned().collect();
            jobs.sort_by(|a, b| a.created_at.cmp(&b.created_at));
            Ok(jobs)
        })
    }
}

#[derive(Default, Clone)]
pub struct InMemoryJobApplicationRepository {
    data: Arc<RwLock<HashMap<Uuid, JobApplication>>>,
}

impl InMemoryJobApplicationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl JobApplicationRepository for InMemoryJobApplicationRepository {
    fn create(&self, application: JobApplication) -> RepositoryFuture<JobApplication> {
        let repo = self.data.clone();
        Box::pin(async move {
            let mut guard = repo.write().await;
            let duplicate = guard.values().any(|existing| {
                existing.job_id == application.job_id
                    && existing.applicant_id == application.applicant_id
            });
            if duplicate {
                return Err(RepositoryError::Conflict);
            }
            let stored = application.clone();
            guard.insert(Uuid::from(application.id), application);
            Ok(stored)
        })
    }

    fn find_by_job_and_applicant(
        &self,
        job_id: JobId,
        applicant_id: UserId,
    ) -> RepositoryFuture<Option<JobApplication>> {
        let repo = self.data.clone();
        Box::pin(async move {
            let guard = repo.read().await;
            Ok(guard
                .values()
                .find(|application| {
                    application.job_id == job_id && application.applicant_id == applicant_id
                })
                .cloned())
        })
    }

    fn list_by_job(&self, job_id: JobId) -> RepositoryFuture<Vec<JobApplication>> {
        let repo = self.data.clone();
        Box::pin(async move {
            let guard = repo.read().await;
            let mut applications: Vec<JobApplication> = guard
                .values()
                .filter(|application| application.job_id == job_id)
                .cloned()
                .collect();
            applications.sort_by(|a, b| a.created_at.cmp(&b.created_at));
            Ok(applications)
        })
    }

    fn count_by_job(&self, job_id: JobId) -> RepositoryFuture<u64> {
        let repo = self.data.clone();
        Box::pin(async move {
            let guard = repo.read().await;
            Ok(guard
                .values()
                .filter(|application| application.job_id == job_id)
                .count() as u64)
        })
    }
}

#[derive(Default, Clone)]
pub struct InMemoryRatingRepository {
    data: Arc<RwLock<HashMap<Uuid, Rating>>>,
}

impl InMemoryRatingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RatingRepository for InMemoryRatingRepository {
    fn create(&self, rating: Rating) -> RepositoryFuture<Rating> {
        let repo = self.data.clone();
        Box::pin(async move {
            let mut guard = repo.write().await;
            let duplicate = guard.values().any(|existing| {
                existing.rated_user_id == rating.rated_user_id
                    && existing.rater_id == rating.rater_id
            });
            if duplicate {
                return Err(RepositoryError::Conflict);
            }
            let stored = rating.clone();
            guard.insert(Uuid::from(rating.id), rating);
            Ok(stored)
        })
    }

    fn update(&self, rating: Rating) -> RepositoryFuture<Rating> {
        let repo = self.data.clone();
        Box::pin(async move {
            let mut guard = repo.write().await;
            let id = Uuid::from(rating.id);
            if !guard.contains_key(&id) {
                return Err(RepositoryError::NotFound);
            }
            let stored = rating.clone();
            guard.insert(id, rating);
            Ok(stored)
        })
    }

    fn delete(&self, id: RatingId) -> RepositoryFuture<()> {
        let repo = self.data.clone();
        Box::pin(async move {
            let mut guard = repo.write().await;
            if guard.remove(&Uuid::from(id)).is_none() {
                return Err(RepositoryError::NotFound);
            }
            Ok(())
        })
    }

    fn find_by_id(&self, id: RatingId) -> RepositoryFuture<Option<Rating>> {
        let repo = self.data.clone();
        Box::pin(async move {
            let guard = repo.read().await;
            Ok(guard.get(&Uuid::from(id)).cloned())
        })
    }

    fn find_by_rated_and_rater(
        &self,
        rated_user_id: UserId,
        rater_id: UserId,
    ) -> RepositoryFuture<Option<Rating>> {
        let repo = self.data.clone();
        Box::pin(async move {
            let guard = repo.read().await;
            Ok(guard
                .values()
                .find(|rating| {
                    rating.rated_user_id == rated_user_id && rating.rater_id == rater_id
                })
                .cloned())
        })
    }

    fn list_by_rated_user(&self, rated_user_id: UserId) -> RepositoryFuture<Vec<Rating>> {
        let repo = self.data.clone();
        Box::pin(async move {
            let guard = repo.read().await;
            let mut ratings: Vec<Rating> = guard
                .values()
                .filter(|rating| rating.rated_user_id == rated_user_id)
                .cloned()
                .collect();
            ratings.sort_by(|a, b| a.created_at.cmp(&b.created_at));
            Ok(ratings)
        })
    }
}

#[derive(Default, Clone)]
pub struct InMemoryMessageRepository {
    data: Arc<RwLock<Vec<Message>>>,
}

impl InMemoryMessageRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MessageRepository for InMemoryMessageRepository {
    fn create(&self, message: Message) -> RepositoryFuture<Message> {
        let repo = self.data.clone();
        Box::pin(async move {
            let mut guard = repo.write().await;
            let stored = message.clone();
            guard.push(message);
            Ok(stored)
        })
    }

    fn list_conversation(
        &self,
        user_id: UserId,
        other_user_id: UserId,
    ) -> RepositoryFuture<Vec<Message>> {
        let repo = self.data.clone();
        Box::pin(async move {
            let guard = repo.read().await;
            let mut messages: Vec<Message> = guard
                .iter()
                .filter(|message| message.belongs_to_conversation(user_id, other_user_id))
                .cloned()
                .collect();
            messages.sort_by(|a, b| a.created_at.cmp(&b.created_at));
            Ok(messages)
        })
    }
}
