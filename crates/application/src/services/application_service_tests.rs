//! 投递服务单元测试
//!
//! 覆盖 (职位, 申请人) 唯一性、发布者限定的投递列表、公开计数，
//! 以及职位删除后投递记录成为孤儿的既有行为。

#[cfg(test)]
mod application_service_tests {
    use std::sync::Arc;

    use domain::{DomainError, PasswordHash, User, UserEmail, UserId, UserRepository};
    use uuid::Uuid;

    use crate::clock::SystemClock;
    use crate::error::ApplicationError;
    use crate::memory::{
        InMemoryJobApplicationRepository, InMemoryJobRepository, InMemoryUserRepository,
    };
    use crate::services::{
        ApplicationService, ApplicationServiceDependencies, ApplyRequest, JobService,
        JobServiceDependencies, PostJobRequest, UpdateProfileRequest, UserService,
        UserServiceDependencies,
    };

    struct TestContext {
        user_repository: Arc<InMemoryUserRepository>,
        jobs: JobService,
        applications: ApplicationService,
    }

    fn create_context() -> TestContext {
        let user_repository = Arc::new(InMemoryUserRepository::new());
        let job_repository = Arc::new(InMemoryJobRepository::new());
        let application_repository = Arc::new(InMemoryJobApplicationRepository::new());
        let clock = Arc::new(SystemClock);

        let jobs = JobService::new(JobServiceDependencies {
            job_repository: job_repository.clone(),
            clock: clock.clone(),
        });
        let applications = ApplicationService::new(ApplicationServiceDependencies {
            application_repository,
            job_repository,
            user_repository: user_repository.clone(),
            clock,
        });

        TestContext {
            user_repository,
            jobs,
            applications,
        }
    }

    /// 直接向存储写入一个用户，返回其 ID
    async fn seed_user(repository: &InMemoryUserRepository, name: &str, email: &str) -> Uuid {
        let user = User::register(
            UserId::from(Uuid::new_v4()),
            name,
            UserEmail::parse(email).unwrap(),
            PasswordHash::new("hashed:password123").unwrap(),
            chrono::Utc::now(),
        )
        .unwrap();
        let stored = repository.create(user).await.unwrap();
        Uuid::from(stored.id)
    }

    async fn seed_job(jobs: &JobService, poster: Uuid) -> Uuid {
        jobs.post_job(
            PostJobRequest {
                title: "Software Engineer".to_string(),
                description: "Develop cool features".to_string(),
                salary: Some(120_000),
                location: None,
            },
            poster,
        )
        .await
        .unwrap()
        .id
    }

    #[tokio::test]
    async fn test_apply_to_job() {
        let ctx = create_context();
        let poster = seed_user(&ctx.user_repository, "Poster", "poster@test.com").await;
        let applicant = seed_user(&ctx.user_repository, "Applicant", "applicant@test.com").await;
        let job_id = seed_job(&ctx.jobs, poster).await;

        let application = ctx
            .applications
            .apply(
                ApplyRequest {
                    job_id,
                    cover_letter: Some("I would love this role".to_string()),
                },
                applicant,
            )
            .await
            .unwrap();

        assert_eq!(application.job_id, job_id);
        assert_eq!(application.applicant_id, applicant);
        assert_eq!(
            application.cover_letter.as_deref(),
            Some("I would love this role")
        );
    }

    #[tokio::test]
    async fn test_apply_twice_conflict() {
        let ctx = create_context();
        let poster = seed_user(&ctx.user_repository, "Poster", "poster@test.com").await;
        let applicant = seed_user(&ctx.user_repository, "Applicant", "applicant@test.com").await;
        let job_id = seed_job(&ctx.jobs, poster).await;

        ctx.applications
            .apply(
                ApplyRequest {
                    job_id,
                    cover_letter: None,
                },
                applicant,
            )
            .await
            .unwrap();

        // 同一 (职位, 申请人) 的第二次投递必须失败
        let result = ctx
            .applications
            .apply(
                ApplyRequest {
                    job_id,
                    cover_letter: Some("second try".to_string()),
                },
                applicant,
            )
            .await;

        assert!(result.is_err());
        match result.err().unwrap() {
            ApplicationError::Domain(DomainError::AlreadyApplied) => {}
            other => panic!("Expected AlreadyApplied error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_apply_to_missing_job_not_found() {
        let ctx = create_context();
        let applicant = seed_user(&ctx.user_repository, "Applicant", "applicant@test.com").await;

        let result = ctx
            .applications
            .apply(
                ApplyRequest {
                    job_id: Uuid::new_v4(),
                    cover_letter: None,
                },
                applicant,
            )
            .await;

        match result.err().unwrap() {
            ApplicationError::Domain(DomainError::JobNotFound) => {}
            other => panic!("Expected JobNotFound error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_list_for_job_poster_only() {
        let ctx = create_context();
        let poster = seed_user(&ctx.user_repository, "Poster", "poster@test.com").await;
        let applicant = seed_user(&ctx.user_repository, "Applicant", "applicant@test.com").await;
        let stranger = seed_user(&ctx.user_repository, "Stranger", "stranger@test.com").await;
        let job_id = seed_job(&ctx.jobs, poster).await;

        // 给投递人配置句柄，验证联结字段
        let users = UserService::new(UserServiceDependencies {
            user_repository: ctx.user_repository.clone(),
            password_hasher: Arc::new(NoopHasher),
            clock: Arc::new(SystemClock),
        });
        users
            .update_profile(
                applicant,
                UpdateProfileRequest {
                    name: None,
                    handle: Some("applicant-42".to_string()),
                },
            )
            .await
            .unwrap();

        ctx.applications
            .apply(
                ApplyRequest {
                    job_id,
                    cover_letter: Some("pick me".to_string()),
                },
                applicant,
            )
            .await
            .unwrap();

        // 非发布者被拒绝
        let result = ctx.applications.list_for_job(job_id, stranger).await;
        match result.err().unwrap() {
            ApplicationError::Domain(DomainError::PermissionDenied { .. }) => {}
            other => panic!("Expected PermissionDenied error, got {other:?}"),
        }

        // 发布者能看到带投递人摘要的列表
        let views = ctx.applications.list_for_job(job_id, poster).await.unwrap();
        assert_eq!(views.len(), 1);
        let profile = views[0].applicant.as_ref().expect("applicant joined");
        assert_eq!(profile.id, applicant);
        assert_eq!(profile.name, "Applicant");
        assert_eq!(profile.email, "applicant@test.com");
        assert_eq!(profile.handle.as_deref(), Some("applicant-42"));
    }

    #[tokio::test]
    async fn test_list_for_missing_job_not_found() {
        let ctx = create_context();
        let requester = seed_user(&ctx.user_repository, "Poster", "poster@test.com").await;

        let result = ctx
            .applications
            .list_for_job(Uuid::new_v4(), requester)
            .await;

        match result.err().unwrap() {
            ApplicationError::Domain(DomainError::JobNotFound) => {}
            other => panic!("Expected JobNotFound error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_count_for_job() {
        let ctx = create_context();
        let poster = seed_user(&ctx.user_repository, "Poster", "poster@test.com").await;
        let job_id = seed_job(&ctx.jobs, poster).await;

        // 不存在的职位计数为 0，不报错
        assert_eq!(
            ctx.applications.count_for_job(Uuid::new_v4()).await.unwrap(),
            0
        );
        assert_eq!(ctx.applications.count_for_job(job_id).await.unwrap(), 0);

        // N 个不同申请人投递后计数恰为 N
        for i in 0..3 {
            let applicant = seed_user(
                &ctx.user_repository,
                &format!("Applicant {i}"),
                &format!("applicant{i}@test.com"),
            )
            .await;
            ctx.applications
                .apply(
                    ApplyRequest {
                        job_id,
                        cover_letter: None,
                    },
                    applicant,
                )
                .await
                .unwrap();
        }
        assert_eq!(ctx.applications.count_for_job(job_id).await.unwrap(), 3);

        // 只读操作可重复
        assert_eq!(ctx.applications.count_for_job(job_id).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_apply_to_own_job_is_allowed() {
        // 现网未限制发布者投递自己的职位，保留该宽松行为
        let ctx = create_context();
        let poster = seed_user(&ctx.user_repository, "Poster", "poster@test.com").await;
        let job_id = seed_job(&ctx.jobs, poster).await;

        let application = ctx
            .applications
            .apply(
                ApplyRequest {
                    job_id,
                    cover_letter: None,
                },
                poster,
            )
            .await
            .unwrap();
        assert_eq!(application.applicant_id, poster);
    }

    #[tokio::test]
    async fn test_removing_job_leaves_applications_orphaned() {
        // 职位删除不级联：投递记录保留并继续计入计数
        let ctx = create_context();
        let poster = seed_user(&ctx.user_repository, "Poster", "poster@test.com").await;
        let applicant = seed_user(&ctx.user_repository, "Applicant", "applicant@test.com").await;
        let job_id = seed_job(&ctx.jobs, poster).await;

        ctx.applications
            .apply(
                ApplyRequest {
                    job_id,
                    cover_letter: None,
                },
                applicant,
            )
            .await
            .unwrap();

        ctx.jobs.remove_job(job_id, poster).await.unwrap();

        assert_eq!(ctx.applications.count_for_job(job_id).await.unwrap(), 1);

        // 而按职位列投递需要职位存在
        let result = ctx.applications.list_for_job(job_id, poster).await;
        match result.err().unwrap() {
            ApplicationError::Domain(DomainError::JobNotFound) => {}
            other => panic!("Expected JobNotFound error, got {other:?}"),
        }
    }

    /// 本测试文件不触发任何哈希路径
    struct NoopHasher;

    #[async_trait::async_trait]
    impl crate::password::PasswordHasher for NoopHasher {
        async fn hash(
            &self,
            plaintext: &str,
        ) -> Result<PasswordHash, crate::password::PasswordHasherError> {
            PasswordHash::new(plaintext.to_string())
                .map_err(|err| crate::password::PasswordHasherError::hash_error(err.to_string()))
        }

        async fn verify(
            &self,
            _plaintext: &str,
            _hashed: &PasswordHash,
        ) -> Result<bool, crate::password::PasswordHasherError> {
            Ok(true)
        }
    }
}
