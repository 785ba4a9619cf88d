use crate::errors::{DomainError, DomainResult};
use crate::value_objects::{Handle, PasswordHash, Timestamp, UserEmail, UserId};

/// 用户实体
///
/// 档案字段（姓名、句柄）与偏好设置（主题）只允许本人修改；
/// 凭据只以单向哈希保存，永远不会被序列化输出。
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: UserEmail,
    #[serde(skip_serializing)] // 密码字段不暴露给客户端
    pub password: PasswordHash,
    pub name: String,
    pub handle: Option<Handle>,
    pub theme: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// 用户档案补丁：缺省字段保持原值
#[derive(Debug, Clone, Default)]
pub struct UserProfilePatch {
    pub name: Option<String>,
    pub handle: Option<Handle>,
}

/// 用户偏好设置补丁
#[derive(Debug, Clone, Default)]
pub struct UserSettingsPatch {
    pub theme: Option<String>,
}

impl User {
    pub fn register(
        id: UserId,
        name: impl Into<String>,
        email: UserEmail,
        password: PasswordHash,
        now: Timestamp,
    ) -> DomainResult<Self> {
        let name = name.into().trim().to_owned();
        if name.is_empty() {
            return Err(DomainError::invalid_argument("name", "cannot be empty"));
        }

        Ok(Self {
            id,
            email,
            password,
            name,
            handle: None,
            theme: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// 部分合并档案字段，未提供的字段保持不变
    pub fn update_profile(&mut self, patch: UserProfilePatch, now: Timestamp) -> DomainResult<()> {
        if let Some(name) = patch.name {
            let name = name.trim().to_owned();
            if name.is_empty() {
                return Err(DomainError::invalid_argument("name", "cannot be empty"));
            }
            self.name = name;
        }
        if let Some(handle) = patch.handle {
            self.handle = Some(handle);
        }
        self.updated_at = now;
        Ok(())
    }

    /// 部分合并偏好设置
    pub fn update_settings(&mut self, patch: UserSettingsPatch, now: Timestamp) {
        if let Some(theme) = patch.theme {
            self.theme = Some(theme);
        }
        self.updated_at = now;
    }

    pub fn set_password(&mut self, password: PasswordHash, now: Timestamp) {
        self.password = password;
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn sample_user() -> User {
        User::register(
            UserId::from(Uuid::new_v4()),
            "Alice Doe",
            UserEmail::parse("alice@example.com").unwrap(),
            PasswordHash::new("$2b$12$hash").unwrap(),
            Utc::now(),
        )
        .unwrap()
    }

    #[test]
    fn test_register_rejects_blank_name() {
        let result = User::register(
            UserId::from(Uuid::new_v4()),
            "   ",
            UserEmail::parse("alice@example.com").unwrap(),
            PasswordHash::new("$2b$12$hash").unwrap(),
            Utc::now(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_update_profile_merges_partially() {
        let mut user = sample_user();
        let original_handle = user.handle.clone();

        user.update_profile(
            UserProfilePatch {
                name: Some("Alice Smith".to_owned()),
                handle: None,
            },
            Utc::now(),
        )
        .unwrap();

        // 未提供的字段保持原值
        assert_eq!(user.name, "Alice Smith");
        assert_eq!(user.handle, original_handle);

        user.update_profile(
            UserProfilePatch {
                name: None,
                handle: Some(Handle::parse("alice-smith").unwrap()),
            },
            Utc::now(),
        )
        .unwrap();

        assert_eq!(user.name, "Alice Smith");
        assert_eq!(user.handle, Some(Handle::parse("alice-smith").unwrap()));
    }

    #[test]
    fn test_update_settings_keeps_theme_when_absent() {
        let mut user = sample_user();
        user.update_settings(
            UserSettingsPatch {
                theme: Some("dark".to_owned()),
            },
            Utc::now(),
        );
        assert_eq!(user.theme.as_deref(), Some("dark"));

        user.update_settings(UserSettingsPatch { theme: None }, Utc::now());
        assert_eq!(user.theme.as_deref(), Some("dark"));
    }

    #[test]
    fn test_password_never_serialized() {
        let user = sample_user();
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("$2b$12$hash"));
    }
}
