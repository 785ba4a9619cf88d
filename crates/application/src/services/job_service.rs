//! 职位发布用例服务
//!
//! 职位的发布、查询、修改与删除；修改和删除仅限发布者本人。

use std::sync::Arc;

use domain::{DomainError, Job, JobId, JobLocation, JobPatch, JobRepository, UserId};
use tracing::info;
use uuid::Uuid;

use crate::{clock::Clock, dto::JobDto, error::ApplicationError};

/// 地点输入：四个字段在类型上整体出现或整体缺失
#[derive(Debug, Clone)]
pub struct LocationRequest {
    pub formatted_address: String,
    pub place_id: String,
    pub lat: f64,
    pub lng: f64,
}

impl LocationRequest {
    fn into_location(self) -> Result<JobLocation, DomainError> {
        JobLocation::new(self.formatted_address, self.place_id, self.lat, self.lng)
    }
}

#[derive(Debug, Clone)]
pub struct PostJobRequest {
    pub title: String,
    pub description: String,
    pub salary: Option<i64>,
    pub location: Option<LocationRequest>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateJobRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub salary: Option<i64>,
    pub location: Option<LocationRequest>,
}

pub struct JobServiceDependencies {
    pub job_repository: Arc<dyn JobRepository>,
    pub clock: Arc<dyn Clock>,
}

pub struct JobService {
    deps: JobServiceDependencies,
}

impl JobService {
    pub fn new(deps: JobServiceDependencies) -> Self {
        Self { deps }
    }

    /// 公开列表：返回全部职位，不做过滤
    pub async fn list_jobs(&self) -> Result<Vec<JobDto>, ApplicationError> {
        let jobs = self.deps.job_repository.list_all().await?;
        Ok(jobs.iter().map(JobDto::from).collect())
    }

    pub async fn get_job(&self, job_id: Uuid) -> Result<JobDto, ApplicationError> {
        let job = self
            .deps
            .job_repository
            .find_by_id(JobId::from(job_id))
            .await?
            .ok_or(ApplicationError::Domain(DomainError::JobNotFound))?;
        Ok(JobDto::from(&job))
    }

    /// 发布职位；`posted_by` 无条件取当前操作者
    pub async fn post_job(
        &self,
        request: PostJobRequest,
        actor: Uuid,
    ) -> Result<JobDto, ApplicationError> {
        let location = request
            .location
            .map(LocationRequest::into_location)
            .transpose()?;

        let job = Job::post(
            JobId::from(Uuid::new_v4()),
            request.title,
            request.description,
            request.salary,
            location,
            UserId::from(actor),
            self.deps.clock.now(),
        )?;

        let stored = self.deps.job_repository.create(job).await?;
        info!(job_id = %stored.id, posted_by = %stored.posted_by, "职位发布成功");
        Ok(JobDto::from(&stored))
    }

    pub async fn update_job(
        &self,
        job_id: Uuid,
        request: UpdateJobRequest,
        actor: Uuid,
    ) -> Result<JobDto, ApplicationError> {
        let mut job = self
            .deps
            .job_repository
            .find_by_id(JobId::from(job_id))
            .await?
            .ok_or(ApplicationError::Domain(DomainError::JobNotFound))?;

        // 所有权检查先于补丁内容检查
        if !job.is_posted_by(UserId::from(actor)) {
            return Err(ApplicationError::Domain(DomainError::permission_denied(
                "update this job",
            )));
        }

        let location = request
            .location
            .map(LocationRequest::into_location)
            .transpose()?;

        job.apply_patch(
            JobPatch {
                title: request.title,
                description: request.description,
                salary: request.salary,
                location,
            },
            self.deps.clock.now(),
        )?;

        let stored = self.deps.job_repository.update(job).await?;
        Ok(JobDto::from(&stored))
    }

    /// 删除职位。不级联删除投递记录，留下的记录指向已不存在的职位。
    pub async fn remove_job(&self, job_id: Uuid, actor: Uuid) -> Result<(), ApplicationError> {
        let job = self
            .deps
            .job_repository
            .find_by_id(JobId::from(job_id))
            .await?
            .ok_or(ApplicationError::Domain(DomainError::JobNotFound))?;

        if !job.is_posted_by(UserId::from(actor)) {
            return Err(ApplicationError::Domain(DomainError::permission_denied(
                "delete this job",
            )));
        }

        self.deps.job_repository.delete(job.id).await?;
        info!(%job_id, "职位已删除");
        Ok(())
    }
}
