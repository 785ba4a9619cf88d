use crate::errors::{DomainError, DomainResult};
use crate::value_objects::{JobId, Timestamp, UserId};

/// 职位地点
///
/// 四个字段要么全部出现，要么整体缺失；不存在部分填充的地点。
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct JobLocation {
    pub formatted_address: String,
    pub place_id: String,
    pub lat: f64,
    pub lng: f64,
}

impl JobLocation {
    pub fn new(
        formatted_address: impl Into<String>,
        place_id: impl Into<String>,
        lat: f64,
        lng: f64,
    ) -> DomainResult<Self> {
        let formatted_address = formatted_address.into().trim().to_owned();
        if formatted_address.is_empty() {
            return Err(DomainError::invalid_argument(
                "formatted_address",
                "cannot be empty",
            ));
        }
        let place_id = place_id.into().trim().to_owned();
        if place_id.is_empty() {
            return Err(DomainError::invalid_argument("place_id", "cannot be empty"));
        }
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(DomainError::invalid_argument("lat", "out of range"));
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(DomainError::invalid_argument("lng", "out of range"));
        }
        Ok(Self {
            formatted_address,
            place_id,
            lat,
            lng,
        })
    }
}

/// 职位发布
///
/// `posted_by` 在创建后不可变更，是唯一有权修改和删除该职位的所有者。
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub description: String,
    pub salary: Option<i64>,
    pub location: Option<JobLocation>,
    pub posted_by: UserId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// 职位补丁：仅列出允许修改的字段，`posted_by` 不在其中
#[derive(Debug, Clone, Default)]
pub struct JobPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub salary: Option<i64>,
    pub location: Option<JobLocation>,
}

impl Job {
    pub fn post(
        id: JobId,
        title: impl Into<String>,
        description: impl Into<String>,
        salary: Option<i64>,
        location: Option<JobLocation>,
        posted_by: UserId,
        now: Timestamp,
    ) -> DomainResult<Self> {
        let title = title.into().trim().to_owned();
        if title.is_empty() {
            return Err(DomainError::invalid_argument("title", "cannot be empty"));
        }
        let description = description.into().trim().to_owned();
        if description.is_empty() {
            return Err(DomainError::invalid_argument(
                "description",
                "cannot be empty",
            ));
        }

        Ok(Self {
            id,
            title,
            description,
            salary,
            location,
            posted_by,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn is_posted_by(&self, actor: UserId) -> bool {
        self.posted_by == actor
    }

    /// 部分合并补丁字段；地点作为整体替换
    pub fn apply_patch(&mut self, patch: JobPatch, now: Timestamp) -> DomainResult<()> {
        if let Some(title) = patch.title {
            let title = title.trim().to_owned();
            if title.is_empty() {
                return Err(DomainError::invalid_argument("title", "cannot be empty"));
            }
            self.title = title;
        }
        if let Some(description) = patch.description {
            let description = description.trim().to_owned();
            if description.is_empty() {
                return Err(DomainError::invalid_argument(
                    "description",
                    "cannot be empty",
                ));
            }
            self.description = description;
        }
        if let Some(salary) = patch.salary {
            self.salary = Some(salary);
        }
        if let Some(location) = patch.location {
            self.location = Some(location);
        }
        self.updated_at = now;
        Ok(())
    }
}
