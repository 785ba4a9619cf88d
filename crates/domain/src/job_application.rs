use crate::value_objects::{ApplicationId, JobId, Timestamp, UserId};

/// 职位投递记录
///
/// 每个 (职位, 申请人) 组合至多存在一条记录；创建后不再修改。
/// 职位被删除时投递记录原样保留（无级联删除）。
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct JobApplication {
    pub id: ApplicationId,
    pub job_id: JobId,
    pub applicant_id: UserId,
    pub cover_letter: Option<String>,
    pub created_at: Timestamp,
}

impl JobApplication {
    pub fn submit(
        id: ApplicationId,
        job_id: JobId,
        applicant_id: UserId,
        cover_letter: Option<String>,
        now: Timestamp,
    ) -> Self {
        Self {
            id,
            job_id,
            applicant_id,
            cover_letter,
            created_at: now,
        }
    }
}
