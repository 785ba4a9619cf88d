use crate::value_objects::{RatingId, RatingScore, Timestamp, UserId};

/// 用户间评价
///
/// 每个 (被评价人, 评价人) 组合至多存在一条记录；
/// 只有原评价人可以修改或删除自己的评价。
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rating {
    pub id: RatingId,
    pub rated_user_id: UserId,
    pub rater_id: UserId,
    pub score: RatingScore,
    pub comment: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// 评价补丁：缺省字段保持原值
#[derive(Debug, Clone, Default)]
pub struct RatingPatch {
    pub score: Option<RatingScore>,
    pub comment: Option<String>,
}

impl Rating {
    pub fn submit(
        id: RatingId,
        rated_user_id: UserId,
        rater_id: UserId,
        score: RatingScore,
        comment: Option<String>,
        now: Timestamp,
    ) -> Self {
        Self {
            id,
            rated_user_id,
            rater_id,
            score,
            comment,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_rated_by(&self, actor: UserId) -> bool {
        self.rater_id == actor
    }

    /// 部分合并补丁字段，评分值已由 `RatingScore` 保证在 [1, 5] 内
    pub fn apply_patch(&mut self, patch: RatingPatch, now: Timestamp) {
        if let Some(score) = patch.score {
            self.score = score;
        }
        if let Some(comment) = patch.comment {
            self.comment = Some(comment);
        }
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn test_patch_merges_partially() {
        let rater = UserId::from(Uuid::new_v4());
        let mut rating = Rating::submit(
            RatingId::from(Uuid::new_v4()),
            UserId::from(Uuid::new_v4()),
            rater,
            RatingScore::new(4).unwrap(),
            Some("solid work".to_owned()),
            Utc::now(),
        );

        rating.apply_patch(
            RatingPatch {
                score: Some(RatingScore::new(5).unwrap()),
                comment: None,
            },
            Utc::now(),
        );

        assert_eq!(rating.score.value(), 5);
        // 未提供的评论保持原值
        assert_eq!(rating.comment.as_deref(), Some("solid work"));
        assert!(rating.is_rated_by(rater));
    }
}
