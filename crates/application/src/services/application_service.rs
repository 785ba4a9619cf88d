//! 职位投递用例服务
//!
//! 投递、投递人列表（仅发布者可见）与公开的投递计数。

use std::collections::HashMap;
use std::sync::Arc;

use domain::{
    ApplicationId, DomainError, JobApplication, JobApplicationRepository, JobId, JobRepository,
    RepositoryError, UserId, UserRepository,
};
use tracing::info;
use uuid::Uuid;

use crate::{
    clock::Clock,
    dto::{ApplicantProfile, ApplicationDto, JobApplicationView},
    error::ApplicationError,
};

#[derive(Debug, Clone)]
pub struct ApplyRequest {
    pub job_id: Uuid,
    pub cover_letter: Option<String>,
}

pub struct ApplicationServiceDependencies {
    pub application_repository: Arc<dyn JobApplicationRepository>,
    pub job_repository: Arc<dyn JobRepository>,
    pub user_repository: Arc<dyn UserRepository>,
    pub clock: Arc<dyn Clock>,
}

pub struct ApplicationService {
    deps: ApplicationServiceDependencies,
}

impl ApplicationService {
    pub fn new(deps: ApplicationServiceDependencies) -> Self {
        Self { deps }
    }

    /// 投递职位；同一 (职位, 申请人) 至多一条
    pub async fn apply(
        &self,
        request: ApplyRequest,
        applicant: Uuid,
    ) -> Result<ApplicationDto, ApplicationError> {
        let job_id = JobId::from(request.job_id);
        let applicant_id = UserId::from(applicant);

        self.deps
            .job_repository
            .find_by_id(job_id)
            .await?
            .ok_or(ApplicationError::Domain(DomainError::JobNotFound))?;

        if self
            .deps
            .application_repository
            .find_by_job_and_applicant(job_id, applicant_id)
            .await?
            .is_some()
        {
            return Err(ApplicationError::Domain(DomainError::AlreadyApplied));
        }

        let application = JobApplication::submit(
            ApplicationId::from(Uuid::new_v4()),
            job_id,
            applicant_id,
            request.cover_letter,
            self.deps.clock.now(),
        );

        // 预检之后仍可能输掉唯一索引竞争
        let stored = self
            .deps
            .application_repository
            .create(application)
            .await
            .map_err(|err| match err {
                RepositoryError::Conflict => ApplicationError::Domain(DomainError::AlreadyApplied),
                other => ApplicationError::Repository(other),
            })?;

        info!(job_id = %stored.job_id, applicant_id = %stored.applicant_id, "职位投递成功");
        Ok(ApplicationDto::from(&stored))
    }

    /// 投递人列表：仅职位发布者可见，联结投递人的姓名/邮箱/句柄
    pub async fn list_for_job(
        &self,
        job_id: Uuid,
        requester: Uuid,
    ) -> Result<Vec<JobApplicationView>, ApplicationError> {
        let job = self
            .deps
            .job_repository
            .find_by_id(JobId::from(job_id))
            .await?
            .ok_or(ApplicationError::Domain(DomainError::JobNotFound))?;

        if !job.is_posted_by(UserId::from(requester)) {
            return Err(ApplicationError::Domain(DomainError::permission_denied(
                "view the applicants for this job",
            )));
        }

        let applications = self
            .deps
            .application_repository
            .list_by_job(job.id)
            .await?;

        // 读侧联结：取出原始记录后按 ID 批量查投递人
        let applicant_ids: Vec<UserId> = applications
            .iter()
            .map(|application| application.applicant_id)
            .collect();
        let applicants: HashMap<UserId, ApplicantProfile> = self
            .deps
            .user_repository
            .find_by_ids(applicant_ids)
            .await?
            .iter()
            .map(|user| (user.id, ApplicantProfile::from(user)))
            .collect();

        Ok(applications
            .iter()
            .map(|application| JobApplicationView {
                id: Uuid::from(application.id),
                job_id: Uuid::from(application.job_id),
                cover_letter: application.cover_letter.clone(),
                created_at: application.created_at,
                applicant: applicants.get(&application.applicant_id).cloned(),
            })
            .collect())
    }

    /// 公开的投递计数；职位不存在时返回 0 而不报错
    pub async fn count_for_job(&self, job_id: Uuid) -> Result<u64, ApplicationError> {
        let count = self
            .deps
            .application_repository
            .count_by_job(JobId::from(job_id))
            .await?;
        Ok(count)
    }
}
