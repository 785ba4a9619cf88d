//! 用户与凭据用例服务
//!
//! 注册、登录校验、改密以及档案/偏好设置的本人维护。

use std::sync::Arc;

use domain::{
    DomainError, Handle, RepositoryError, User, UserEmail, UserId, UserProfilePatch,
    UserRepository, UserSettingsPatch,
};
use tracing::info;
use uuid::Uuid;

use crate::{clock::Clock, dto::UserDto, error::ApplicationError, password::PasswordHasher};

#[derive(Debug, Clone)]
pub struct RegisterUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct AuthenticateUserRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub handle: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateSettingsRequest {
    pub theme: Option<String>,
}

pub struct UserServiceDependencies {
    pub user_repository: Arc<dyn UserRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub clock: Arc<dyn Clock>,
}

pub struct UserService {
    deps: UserServiceDependencies,
}

impl UserService {
    pub fn new(deps: UserServiceDependencies) -> Self {
        Self { deps }
    }

    pub async fn register(&self, request: RegisterUserRequest) -> Result<User, ApplicationError> {
        let email = UserEmail::parse(request.email)?;

        if request.password.trim().is_empty() {
            return Err(ApplicationError::Domain(DomainError::invalid_argument(
                "password",
                "cannot be empty",
            )));
        }

        if self
            .deps
            .user_repository
            .find_by_email(email.clone())
            .await?
            .is_some()
        {
            return Err(ApplicationError::Domain(DomainError::EmailTaken));
        }

        let password_hash = self.deps.password_hasher.hash(&request.password).await?;

        let now = self.deps.clock.now();
        let user = User::register(
            UserId::from(Uuid::new_v4()),
            request.name,
            email,
            password_hash,
            now,
        )?;

        // 预检之后仍可能输掉唯一索引竞争，统一上报为邮箱冲突
        let stored = self
            .deps
            .user_repository
            .create(user)
            .await
            .map_err(|err| match err {
                RepositoryError::Conflict => ApplicationError::Domain(DomainError::EmailTaken),
                other => ApplicationError::Repository(other),
            })?;

        info!(user_id = %stored.id, "用户注册成功");
        Ok(stored)
    }

    pub async fn authenticate(
        &self,
        request: AuthenticateUserRequest,
    ) -> Result<User, ApplicationError> {
        let email = UserEmail::parse(request.email)?;
        let user = self
            .deps
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(ApplicationError::Authentication)?;

        let password_ok = self
            .deps
            .password_hasher
            .verify(&request.password, &user.password)
            .await?;
        if !password_ok {
            return Err(ApplicationError::Authentication);
        }

        Ok(user)
    }

    pub async fn change_password(
        &self,
        user_id: Uuid,
        request: ChangePasswordRequest,
    ) -> Result<(), ApplicationError> {
        let mut user = self
            .deps
            .user_repository
            .find_by_id(UserId::from(user_id))
            .await?
            .ok_or(ApplicationError::Domain(DomainError::UserNotFound))?;

        let current_ok = self
            .deps
            .password_hasher
            .verify(&request.current_password, &user.password)
            .await?;
        if !current_ok {
            return Err(ApplicationError::Authentication);
        }

        if request.new_password.trim().is_empty() {
            return Err(ApplicationError::Domain(DomainError::invalid_argument(
                "new_password",
                "cannot be empty",
            )));
        }

        let password_hash = self.deps.password_hasher.hash(&request.new_password).await?;
        user.set_password(password_hash, self.deps.clock.now());
        self.deps.user_repository.update(user).await?;

        info!(%user_id, "用户密码已更新");
        Ok(())
    }

    pub async fn get_profile(&self, user_id: Uuid) -> Result<UserDto, ApplicationError> {
        let user = self
            .deps
            .user_repository
            .find_by_id(UserId::from(user_id))
            .await?
            .ok_or(ApplicationError::Domain(DomainError::UserNotFound))?;
        Ok(UserDto::from(&user))
    }

    pub async fn get_by_handle(&self, handle: &str) -> Result<UserDto, ApplicationError> {
        let handle = Handle::parse(handle)?;
        let user = self
            .deps
            .user_repository
            .find_by_handle(handle)
            .await?
            .ok_or(ApplicationError::Domain(DomainError::UserNotFound))?;
        Ok(UserDto::from(&user))
    }

    pub async fn update_profile(
        &self,
        user_id: Uuid,
        request: UpdateProfileRequest,
    ) -> Result<UserDto, ApplicationError> {
        let mut user = self
            .deps
            .user_repository
            .find_by_id(UserId::from(user_id))
            .await?
            .ok_or(ApplicationError::Domain(DomainError::UserNotFound))?;

        let handle = request.handle.map(Handle::parse).transpose()?;
        if let Some(handle) = &handle {
            let existing = self
                .deps
                .user_repository
                .find_by_handle(handle.clone())
                .await?;
            if existing.is_some_and(|other| other.id != user.id) {
                return Err(ApplicationError::Domain(DomainError::HandleTaken));
            }
        }

        user.update_profile(
            UserProfilePatch {
                name: request.name,
                handle,
            },
            self.deps.clock.now(),
        )?;

        let stored = self
            .deps
            .user_repository
            .update(user)
            .await
            .map_err(|err| match err {
                RepositoryError::Conflict => ApplicationError::Domain(DomainError::HandleTaken),
                other => ApplicationError::Repository(other),
            })?;
        Ok(UserDto::from(&stored))
    }

    pub async fn update_settings(
        &self,
        user_id: Uuid,
        request: UpdateSettingsRequest,
    ) -> Result<UserDto, ApplicationError> {
        let mut user = self
            .deps
            .user_repository
            .find_by_id(UserId::from(user_id))
            .await?
            .ok_or(ApplicationError::Domain(DomainError::UserNotFound))?;

        user.update_settings(
            UserSettingsPatch {
                theme: request.theme,
            },
            self.deps.clock.now(),
        );

        let stored = self.deps.user_repository.update(user).await?;
        Ok(UserDto::from(&stored))
    }
}
