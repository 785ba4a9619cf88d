//! 用户评价用例服务
//!
//! 每个评价人对同一用户至多一条评价；修改与删除仅限原评价人。

use std::collections::HashMap;
use std::sync::Arc;

use domain::{
    DomainError, Rating, RatingId, RatingPatch, RatingRepository, RatingScore, RepositoryError,
    UserId, UserRepository,
};
use tracing::info;
use uuid::Uuid;

use crate::{
    clock::Clock,
    dto::{RaterProfile, RatingDto, RatingView},
    error::ApplicationError,
};

#[derive(Debug, Clone)]
pub struct RateUserRequest {
    pub rating: i16,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateRatingRequest {
    pub rating: Option<i16>,
    pub comment: Option<String>,
}

pub struct RatingServiceDependencies {
    pub rating_repository: Arc<dyn RatingRepository>,
    pub user_repository: Arc<dyn UserRepository>,
    pub clock: Arc<dyn Clock>,
}

pub struct RatingService {
    deps: RatingServiceDependencies,
}

impl RatingService {
    pub fn new(deps: RatingServiceDependencies) -> Self {
        Self { deps }
    }

    /// 创建评价；重复评价提示改用更新接口
    pub async fn rate_user(
        &self,
        rated_user_id: Uuid,
        rater_id: Uuid,
        request: RateUserRequest,
    ) -> Result<RatingDto, ApplicationError> {
        // 评分区间在领域类型构造时再次断言
        let score = RatingScore::new(request.rating)?;
        let rated = UserId::from(rated_user_id);
        let rater = UserId::from(rater_id);

        if self
            .deps
            .rating_repository
            .find_by_rated_and_rater(rated, rater)
            .await?
            .is_some()
        {
            return Err(ApplicationError::Domain(DomainError::AlreadyRated));
        }

        let rating = Rating::submit(
            RatingId::from(Uuid::new_v4()),
            rated,
            rater,
            score,
            request.comment,
            self.deps.clock.now(),
        );

        // 预检之后仍可能输掉唯一索引竞争
        let stored = self
            .deps
            .rating_repository
            .create(rating)
            .await
            .map_err(|err| match err {
                RepositoryError::Conflict => ApplicationError::Domain(DomainError::AlreadyRated),
                other => ApplicationError::Repository(other),
            })?;

        info!(rated_user_id = %stored.rated_user_id, rater_id = %stored.rater_id, "评价创建成功");
        Ok(RatingDto::from(&stored))
    }

    pub async fn update_rating(
        &self,
        rating_id: Uuid,
        rater_id: Uuid,
        request: UpdateRatingRequest,
    ) -> Result<RatingDto, ApplicationError> {
        let mut rating = self
            .deps
            .rating_repository
            .find_by_id(RatingId::from(rating_id))
            .await?
            .ok_or(ApplicationError::Domain(DomainError::RatingNotFound))?;

        if !rating.is_rated_by(UserId::from(rater_id)) {
            return Err(ApplicationError::Domain(DomainError::permission_denied(
                "modify this rating",
            )));
        }

        let score = request.rating.map(RatingScore::new).transpose()?;
        rating.apply_patch(
            RatingPatch {
                score,
                comment: request.comment,
            },
            self.deps.clock.now(),
        );

        let stored = self.deps.rating_repository.update(rating).await?;
        Ok(RatingDto::from(&stored))
    }

    pub async fn remove_rating(
        &self,
        rating_id: Uuid,
        rater_id: Uuid,
    ) -> Result<(), ApplicationError> {
        let rating = self
            .deps
            .rating_repository
            .find_by_id(RatingId::from(rating_id))
            .await?
            .ok_or(ApplicationError::Domain(DomainError::RatingNotFound))?;

        if !rating.is_rated_by(UserId::from(rater_id)) {
            return Err(ApplicationError::Domain(DomainError::permission_denied(
                "remove this rating",
            )));
        }

        self.deps.rating_repository.delete(rating.id).await?;
        info!(%rating_id, "评价已删除");
        Ok(())
    }

    /// 公开查询：某用户收到的全部评价，联结评价人的姓名/邮箱
    pub async fn list_for_user(
        &self,
        rated_user_id: Uuid,
    ) -> Result<Vec<RatingView>, ApplicationError> {
        let ratings = self
            .deps
            .rating_repository
            .list_by_rated_user(UserId::from(rated_user_id))
            .await?;

        let rater_ids: Vec<UserId> = ratings.iter().map(|rating| rating.rater_id).collect();
        let raters: HashMap<UserId, RaterProfile> = self
            .deps
            .user_repository
            .find_by_ids(rater_ids)
            .await?
            .iter()
            .map(|user| (user.id, RaterProfile::from(user)))
            .collect();

        Ok(ratings
            .iter()
            .map(|rating| RatingView {
                id: Uuid::from(rating.id),
                rated_user_id: Uuid::from(rating.rated_user_id),
                rating: rating.score.value(),
                comment: rating.comment.clone(),
                created_at: rating.created_at,
                updated_at: rating.updated_at,
                rater: raters.get(&rating.rater_id).cloned(),
            })
            .collect())
    }
}
