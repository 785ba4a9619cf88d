//! PostgreSQL 仓储实现。
//!
//! 唯一索引裁决并发冲突：邮箱、句柄、(职位, 申请人)、(被评价人, 评价人)
//! 的唯一违例统一映射为 `RepositoryError::Conflict`。

use std::sync::Arc;

use domain::{
    Handle, Job, JobApplication, JobApplicationRepository, JobId, JobLocation, JobRepository,
    Message, MessageContent, MessageRepository, Rating, RatingId, RatingRepository, RatingScore,
    RepositoryError, RepositoryFuture, User, UserEmail, UserId, UserRepository,
};
use chrono::{DateTime, Utc};
use sqlx::{postgres::PgPoolOptions, FromRow, PgPool};
use uuid::Uuid;

fn map_sqlx_err(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::RowNotFound => RepositoryError::NotFound,
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            RepositoryError::Conflict
        }
        _ => RepositoryError::storage(err.to_string()),
    }
}

fn invalid_data(message: impl Into<String>) -> RepositoryError {
    RepositoryError::storage(message)
}

#[derive(Debug, FromRow)]
struct UserRecord {
    id: Uuid,
    email: String,
    password_hash: String,
    name: String,
    handle: Option<String>,
    theme: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRecord> for User {
    type Error = RepositoryError;

    fn try_from(value: UserRecord) -> Result<Self, Self::Error> {
        let email =
            UserEmail::parse(value.email).map_err(|err| invalid_data(err.to_string()))?;
        let password = domain::PasswordHash::new(value.password_hash)
            .map_err(|err| invalid_data(err.to_string()))?;
        let handle = value
            .handle
            .map(Handle::parse)
            .transpose()
            .map_err(|err| invalid_data(err.to_string()))?;

        Ok(User {
            id: UserId::from(value.id),
            email,
            password,
            name: value.name,
            handle,
            theme: value.theme,
            created_at: value.created_at,
            updated_at: value.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct JobRecord {
    id: Uuid,
    title: String,
    description: String,
    salary: Option<i64>,
    location_formatted_address: Option<String>,
    location_place_id: Option<String>,
    location_lat: Option<f64>,
    location_lng: Option<f64>,
    posted_by: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<JobRecord> for Job {
    type Error = RepositoryError;

    fn try_from(value: JobRecord) -> Result<Self, Self::Error> {
        // 四个地点列要么全部为空要么全部填充
        let location = match (
            value.location_formatted_address,
            value.location_place_id,
            value.location_lat,
            value.location_lng,
        ) {
            (None, None, None, None) => None,
            (Some(formatted_address), Some(place_id), Some(lat), Some(lng)) => Some(
                JobLocation::new(formatted_address, place_id, lat, lng)
                    .map_err(|err| invalid_data(err.to_string()))?,
            ),
            _ => return Err(invalid_data("job location columns partially populated")),
        };

        Ok(Job {
            id: JobId::from(value.id),
            title: value.title,
            description: value.description,
            salary: value.salary,
            location,
            posted_by: UserId::from(value.posted_by),
            created_at: value.created_at,
            updated_at: value.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct ApplicationRecord {
    id: Uuid,
    job_id: Uuid,
    applicant_id: Uuid,
    cover_letter: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<ApplicationRecord> for JobApplication {
    fn from(value: ApplicationRecord) -> Self {
        JobApplication {
            id: value.id.into(),
            job_id: JobId::from(value.job_id),
            applicant_id: UserId::from(value.applicant_id),
            cover_letter: value.cover_letter,
            created_at: value.created_at,
        }
    }
}

#[derive(Debug, FromRow)]
struct RatingRecord {
    id: Uuid,
    rated_user_id: Uuid,
    rater_id: Uuid,
    score: i16,
    comment: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<RatingRecord> for Rating {
    type Error = RepositoryError;

    fn try_from(value: RatingRecord) -> Result<Self, Self::Error> {
        let score =
            RatingScore::new(value.score).map_err(|err| invalid_data(err.to_string()))?;

        Ok(Rating {
            id: RatingId::from(value.id),
            rated_user_id: UserId::from(value.rated_user_id),
            rater_id: UserId::from(value.rater_id),
            score,
            comment: value.comment,
            created_at: value.created_at,
            updated_at: value.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct MessageRecord {
    id: Uuid,
    sender_id: Uuid,
    recipient_id: Uuid,
    content: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<MessageRecord> for Message {
    type Error = RepositoryError;

    fn try_from(value: MessageRecord) -> Result<Self, Self::Error> {
        let content =
            MessageContent::new(value.content).map_err(|err| invalid_data(err.to_string()))?;

        Ok(Message {
            id: value.id.into(),
            sender_id: UserId::from(value.sender_id),
            recipient_id: UserId::from(value.recipient_id),
            content,
            created_at: value.created_at,
        })
    }
}

#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for PgUserRepository {
    fn create(&self, user: User) -> RepositoryFuture<User> {
        let pool = self.pool.clone();
        Box::pin(async move {
            let record = sqlx::query_as::<_, UserRecord>(
                r#"
                INSERT INTO users (id, email, password_hash, name, handle, theme, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                RETURNING id, email, password_hash, name, handle, theme, created_at, updated_at
                "#,
            )
            .bind(Uuid::from(user.id))
            .bind(user.email.as_str())
            .bind(user.password.as_str())
            .bind(&user.name)
            .bind(user.handle.as_ref().map(|handle| handle.as_str()))
            .bind(&user.theme)
            .bind(user.created_at)
            .bind(user.updated_at)
            .fetch_one(&pool)
            .await
            .map_err(map_sqlx_err)?;

            User::try_from(record)
        })
    }

    fn update(&self, user: User) -> RepositoryFuture<User> {
        let pool = self.pool.clone();
        Box::pin(async move {
            let record = sqlx::query_as::<_, UserRecord>(
                r#"
                UPDATE users
                SET email = $2, password_hash = $3, name = $4, handle = $5, theme = $6, updated_at = $7
                WHERE id = $1
                RETURNING id, email, password_hash, name, handle, theme, created_at, updated_at
                "#,
            )
            .bind(Uuid::from(user.id))
            .bind(user.email.as_str())
            .bind(user.password.as_str())
            .bind(&user.name)
            .bind(user.handle.as_ref().map(|handle| handle.as_str()))
            .bind(&user.theme)
            .bind(user.updated_at)
            .fetch_one(&pool)
            .await
            .map_err(map_sqlx_err)?;

            User::try_from(record)
        })
    }

    fn find_by_id(&self, id: UserId) -> RepositoryFuture<Option<User>> {
        let pool = self.pool.clone();
        Box::pin(async move {
            let record = sqlx::query_as::<_, UserRecord>(
                r#"SELECT id, email, password_hash, name, handle, theme, created_at, updated_at FROM users WHERE id = $1"#,
            )
            .bind(Uuid::from(id))
            .fetch_optional(&pool)
            .await
            .map_err(map_sqlx_err)?;

            record.map(User::try_from).transpose()
        })
    }

    fn find_by_email(&self, email: UserEmail) -> RepositoryFuture<Option<User>> {
        let pool = self.pool.clone();
        Box::pin(async move {
            let record = sqlx::query_as::<_, UserRecord>(
                r#"SELECT id, email, password_hash, name, handle, theme, created_at, updated_at FROM users WHERE email = $1"#,
            )
            .bind(email.as_str())
            .fetch_optional(&pool)
            .await
            .map_err(map_sqlx_err)?;

            record.map(User::try_from).transpose()
        })
    }

    fn find_by_handle(&self, handle: Handle) -> RepositoryFuture<Option<User>> {
        let pool = self.pool.clone();
        Box::pin(async move {
            let record = sqlx::query_as::<_, UserRecord>(
                r#"SELECT id, email, password_hash, name, handle, theme, created_at, updated_at FROM users WHERE handle = $1"#,
            )
            .bind(handle.as_str())
            .fetch_optional(&pool)
            .await
            .map_err(map_sqlx_err)?;

            record.map(User::try_from).transpose()
        })
    }

    fn find_by_ids(&self, ids: Vec<UserId>) -> RepositoryFuture<Vec<User>> {
        let pool = self.pool.clone();
        Box::pin(async move {
            let ids: Vec<Uuid> = ids.into_iter().map(Uuid::from).collect();
            let records = sqlx::query_as::<_, UserRecord>(
                r#"SELECT id, email, password_hash, name, handle, theme, created_at, updated_at FROM users WHERE id = ANY($1)"#,
            )
            .bind(&ids)
            .fetch_all(&pool)
            .await
            .map_err(map_sqlx_err)?;

            records.into_iter().map(User::try_from).collect()
        })
    }
}

#[derive(Clone)]
pub struct PgJobRepository {
    pool: PgPool,
}

impl PgJobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl JobRepository for PgJobRepository {
    fn create(&self, job: Job) -> RepositoryFuture<Job> {
        let pool = self.pool.clone();
        Box::pin(async move {
            let record = sqlx::query_as::<_, JobRecord>(
                r#"
                INSERT INTO jobs (id, title, description, salary, location_formatted_address,
                                  location_place_id, location_lat, location_lng, posted_by,
                                  created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
                RETURNING id, title, description, salary, location_formatted_address,
                          location_place_id, location_lat, location_lng, posted_by,
                          created_at, updated_at
                "#,
            )
            .bind(Uuid::from(job.id))
            .bind(&job.title)
            .bind(&job.description)
            .bind(job.salary)
            .bind(job.location.as_ref().map(|l| l.formatted_address.as_str()))
            .bind(job.location.as_ref().map(|l| l.place_id.as_str()))
            .bind(job.location.as_ref().map(|l| l.lat))
            .bind(job.location.as_ref().map(|l| l.lng))
            .bind(Uuid::from(job.posted_by))
            .bind(job.created_at)
            .bind(job.updated_at)
            .fetch_one(&pool)
            .await
            .map_err(map_sqlx_err)?;

            Job::try_from(record)
        })
    }

    fn update(&self, job: Job) -> RepositoryFuture<Job> {
        let pool = self.pool.clone();
        Box::pin(async move {
            let record = sqlx::query_as::<_, JobRecord>(
                r#"
                UPDATE jobs
                SET title = $2, description = $3, salary = $4, location_formatted_address = $5,
                    location_place_id = $6, location_lat = $7, location_lng = $8, updated_at = $9
                WHERE id = $1
                RETURNING id, title, description, salary, location_formatted_address,
                          location_place_id, location_lat, location_lng, posted_by,
                          created_at, updated_at
                "#,
            )
            .bind(Uuid::from(job.id))
            .bind(&job.title)
            .bind(&job.description)
            .bind(job.salary)
            .bind(job.location.as_ref().map(|l| l.formatted_address.as_str()))
            .bind(job.location.as_ref().map(|l| l.place_id.as_str()))
            .bind(job.location.as_ref().map(|l| l.lat))
            .bind(job.location.as_ref().map(|l| l.lng))
            .bind(job.updated_at)
            .fetch_one(&pool)
            .await
            .map_err(map_sqlx_err)?;

            Job::try_from(record)
        })
    }

    fn delete(&self, id: JobId) -> RepositoryFuture<()> {
        let pool = self.pool.clone();
        Box::pin(async move {
            let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
                .bind(Uuid::from(id))
                .execute(&pool)
                .await
                .map_err(map_sqlx_err)?;

            if result.rows_affected() == 0 {
                return Err(RepositoryError::NotFound);
            }
            Ok(())
        })
    }

    fn find_by_id(&self, id: JobId) -> RepositoryFuture<Option<Job>> {
        let pool = self.pool.clone();
        Box::pin(async move {
            let record = sqlx::query_as::<_, JobRecord>(
                r#"SELECT id, title, description, salary, location_formatted_address,
                          location_place_id, location_lat, location_lng, posted_by,
                          created_at, updated_at
                   FROM jobs WHERE id = $1"#,
            )
            .bind(Uuid::from(id))
            .fetch_optional(&pool)
            .await
            .map_err(map_sqlx_err)?;

            record.map(Job::try_from).transpose()
        })
    }

    fn list_all(&self) -> RepositoryFuture<Vec<Job>> {
        let pool = self.pool.clone();
        Box::pin(async move {
            let records = sqlx::query_as::<_, JobRecord>(
                r#"SELECT id, title, description, salary, location_formatted_address,
                          location_place_id, location_lat, location_lng, posted_by,
                          created_at, updated_at
                   FROM jobs ORDER BY created_at ASC"#,
            )
            .fetch_all(&pool)
            .await
            .map_err(map_sqlx_err)?;

            records.into_iter().map(Job::try_from).collect()
        })
    }
}

#[derive(Clone)]
pub struct PgJobApplicationRepository {
    pool: PgPool,
}

impl PgJobApplicationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl JobApplicationRepository for PgJobApplicationRepository {
    fn create(&self, application: JobApplication) -> RepositoryFuture<JobApplication> {
        let pool = self.pool.clone();
        Box::pin(async move {
            let record = sqlx::query_as::<_, ApplicationRecord>(
                r#"
                INSERT INTO applications (id, job_id, applicant_id, cover_letter, created_at)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id, job_id, applicant_id, cover_letter, created_at
                "#,
            )
            .bind(Uuid::from(application.id))
            .bind(Uuid::from(application.job_id))
            .bind(Uuid::from(application.applicant_id))
            .bind(&application.cover_letter)
            .bind(application.created_at)
            .fetch_one(&pool)
            .await
            .map_err(map_sqlx_err)?;

            Ok(JobApplication::from(record))
        })
    }

    fn find_by_job_and_applicant(
        &self,
        job_id: JobId,
        applicant_id: UserId,
    ) -> RepositoryFuture<Option<JobApplication>> {
        let pool = self.pool.clone();
        Box::pin(async move {
            let record = sqlx::query_as::<_, ApplicationRecord>(
                r#"SELECT id, job_id, applicant_id, cover_letter, created_at
                   FROM applications WHERE job_id = $1 AND applicant_id = $2"#,
            )
            .bind(Uuid::from(job_id))
            .bind(Uuid::from(applicant_id))
            .fetch_optional(&pool)
            .await
            .map_err(map_sqlx_err)?;

            Ok(record.map(JobApplication::from))
        })
    }

    fn list_by_job(&self, job_id: JobId) -> RepositoryFuture<Vec<JobApplication>> {
        let pool = self.pool.clone();
        Box::pin(async move {
            let records = sqlx::query_as::<_, ApplicationRecord>(
                r#"SELECT id, job_id, applicant_id, cover_letter, created_at
                   FROM applications WHERE job_id = $1 ORDER BY created_at ASC"#,
            )
            .bind(Uuid::from(job_id))
            .fetch_all(&pool)
            .await
            .map_err(map_sqlx_err)?;

            Ok(records.into_iter().map(JobApplication::from).collect())
        })
    }

    fn count_by_job(&self, job_id: JobId) -> RepositoryFuture<u64> {
        let pool = self.pool.clone();
        Box::pin(async move {
            let count: i64 =
                sqlx::query_scalar(r#"SELECT COUNT(*) FROM applications WHERE job_id = $1"#)
                    .bind(Uuid::from(job_id))
                    .fetch_one(&pool)
                    .await
                    .map_err(map_sqlx_err)?;

            Ok(count as u64)
        })
    }
}

#[derive(Clone)]
pub struct PgRatingRepository {
    pool: PgPool,
}

impl PgRatingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl RatingRepository for PgRatingRepository {
    fn create(&self, rating: Rating) -> RepositoryFuture<Rating> {
        let pool = self.pool.clone();
        Box::pin(async move {
            let record = sqlx::query_as::<_, RatingRecord>(
                r#"
                INSERT INTO ratings (id, rated_user_id, rater_id, score, comment, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING id, rated_user_id, rater_id, score, comment, created_at, updated_at
                "#,
            )
            .bind(Uuid::from(rating.id))
            .bind(Uuid::from(rating.rated_user_id))
            .bind(Uuid::from(rating.rater_id))
            .bind(rating.score.value())
            .bind(&rating.comment)
            .bind(rating.created_at)
            .bind(rating.updated_at)
            .fetch_one(&pool)
            .await
            .map_err(map_sqlx_err)?;

            Rating::try_from(record)
        })
    }

    fn update(&self, rating: Rating) -> RepositoryFuture<Rating> {
        let pool = self.pool.clone();
        Box::pin(async move {
            let record = sqlx::query_as::<_, RatingRecord>(
                r#"
                UPDATE ratings
                SET score = $2, comment = $3, updated_at = $4
                WHERE id = $1
                RETURNING id, rated_user_id, rater_id, score, comment, created_at, updated_at
                "#,
            )
            .bind(Uuid::from(rating.id))
            .bind(rating.score.value())
            .bind(&rating.comment)
            .bind(rating.updated_at)
            .fetch_one(&pool)
            .await
            .map_err(map_sqlx_err)?;

            Rating::try_from(record)
        })
    }

    fn delete(&self, id: RatingId) -> RepositoryFuture<()> {
        let pool = self.pool.clone();
        Box::pin(async move {
            let result = sqlx::query("DELETE FROM ratings WHERE id = $1")
                .bind(Uuid::from(id))
                .execute(&pool)
                .await
                .map_err(map_sqlx_err)?;

            if result.rows_affected() == 0 {
                return Err(RepositoryError::NotFound);
            }
            Ok(())
        })
    }

    fn find_by_id(&self, id: RatingId) -> RepositoryFuture<Option<Rating>> {
        let pool = self.pool.clone();
        Box::pin(async move {
            let record = sqlx::query_as::<_, RatingRecord>(
                r#"SELECT id, rated_user_id, rater_id, score, comment, created_at, updated_at
                   FROM ratings WHERE id = $1"#,
            )
            .bind(Uuid::from(id))
            .fetch_optional(&pool)
            .await
            .map_err(map_sqlx_err)?;

            record.map(Rating::try_from).transpose()
        })
    }

    fn find_by_rated_and_rater(
        &self,
        rated_user_id: UserId,
        rater_id: UserId,
    ) -> RepositoryFuture<Option<Rating>> {
        let pool = self.pool.clone();
        Box::pin(async move {
            let record = sqlx::query_as::<_, RatingRecord>(
                r#"SELECT id, rated_user_id, rater_id, score, comment, created_at, updated_at
                   FROM ratings WHERE rated_user_id = $1 AND rater_id = $2"#,
            )
            .bind(Uuid::from(rated_user_id))
            .bind(Uuid::from(rater_id))
            .fetch_optional(&pool)
            .await
            .map_err(map_sqlx_err)?;

            record.map(Rating::try_from).transpose()
        })
    }

    fn list_by_rated_user(&self, rated_user_id: UserId) -> RepositoryFuture<Vec<Rating>> {
        let pool = self.pool.clone();
        Box::pin(async move {
            let records = sqlx::query_as::<_, RatingRecord>(
                r#"SELECT id, rated_user_id, rater_id, score, comment, created_at, updated_at
                   FROM ratings WHERE rated_user_id = $1 ORDER BY created_at ASC"#,
            )
            .bind(Uuid::from(rated_user_id))
            .fetch_all(&pool)
            .await
            .map_err(map_sqlx_err)?;

            records.into_iter().map(Rating::try_from).collect()
        })
    }
}

#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl MessageRepository for PgMessageRepository {
    fn create(&self, message: Message) -> RepositoryFuture<Message> {
        let pool = self.pool.clone();
        Box::pin(async move {
            let record = sqlx::query_as::<_, MessageRecord>(
                r#"
                INSERT INTO messages (id, sender_id, recipient_id, content, created_at)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id, sender_id, recipient_id, content, created_at
                "#,
            )
            .bind(Uuid::from(message.id))
            .bind(Uuid::from(message.sender_id))
            .bind(Uuid::from(message.recipient_id))
            .bind(message.content.as_str())
            .bind(message.created_at)
            .fetch_one(&pool)
            .await
            .map_err(map_sqlx_err)?;

            Message::try_from(record)
        })
    }

    fn list_conversation(
        &self,
        user_id: UserId,
        other_user_id: UserId,
    ) -> RepositoryFuture<Vec<Message>> {
        let pool = self.pool.clone();
        Box::pin(async move {
            let records = sqlx::query_as::<_, MessageRecord>(
                r#"SELECT id, sender_id, recipient_id, content, created_at
                   FROM messages
                   WHERE (sender_id = $1 AND recipient_id = $2)
                      OR (sender_id = $2 AND recipient_id = $1)
                   ORDER BY created_at ASC"#,
            )
            .bind(Uuid::from(user_id))
            .bind(Uuid::from(other_user_id))
            .fetch_all(&pool)
            .await
            .map_err(map_sqlx_err)?;

            records.into_iter().map(Message::try_from).collect()
        })
    }
}

#[derive(Clone)]
pub struct PgStorage {
    pub pool: PgPool,
    pub user_repository: Arc<PgUserRepository>,
    pub job_repository: Arc<PgJobRepository>,
    pub application_repository: Arc<PgJobApplicationRepository>,
    pub rating_repository: Arc<PgRatingRepository>,
    pub message_repository: Arc<PgMessageRepository>,
}

impl PgStorage {
    pub fn new(pool: PgPool) -> Self {
        Self {
            user_repository: Arc::new(PgUserRepository::new(pool.clone())),
            job_repository: Arc::new(PgJobRepository::new(pool.clone())),
            application_repository: Arc::new(PgJobApplicationRepository::new(pool.clone())),
            rating_repository: Arc::new(PgRatingRepository::new(pool.clone())),
            message_repository: Arc::new(PgMessageRepository::new(pool.clone())),
            pool,
        }
    }
}

pub async fn create_pg_pool(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job_record(
        address: Option<&str>,
        place_id: Option<&str>,
        lat: Option<f64>,
        lng: Option<f64>,
    ) -> JobRecord {
        JobRecord {
            id: Uuid::new_v4(),
            title: "Software Engineer".to_string(),
            description: "Develop cool features".to_string(),
            salary: Some(120_000),
            location_formatted_address: address.map(str::to_owned),
            location_place_id: place_id.map(str::to_owned),
            location_lat: lat,
            location_lng: lng,
            posted_by: Uuid::new_v4(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_job_record_without_location() {
        let job = Job::try_from(job_record(None, None, None, None)).unwrap();
        assert!(job.location.is_none());
    }

    #[test]
    fn test_job_record_with_full_location() {
        let job = Job::try_from(job_record(
            Some("1 Main St, Springfield"),
            Some("place-123"),
            Some(37.4),
            Some(-122.1),
        ))
        .unwrap();
        let location = job.location.unwrap();
        assert_eq!(location.place_id, "place-123");
    }

    #[test]
    fn test_job_record_with_partial_location_is_invalid() {
        // 部分填充的地点列是数据损坏，必须拒绝
        let result = Job::try_from(job_record(Some("1 Main St"), None, Some(37.4), None));
        assert!(result.is_err());
    }

    #[test]
    fn test_rating_record_out_of_range_is_invalid() {
        let record = RatingRecord {
            id: Uuid::new_v4(),
            rated_user_id: Uuid::new_v4(),
            rater_id: Uuid::new_v4(),
            score: 9,
            comment: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert!(Rating::try_from(record).is_err());
    }
}
