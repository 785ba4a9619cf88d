//! 主应用程序入口
//!
//! 装配配置、数据库连接、仓储与用例服务，启动 Axum Web API 服务。

use std::sync::Arc;

use application::{
    ApplicationService, ApplicationServiceDependencies, JobService, JobServiceDependencies,
    MessageService, MessageServiceDependencies, RatingService, RatingServiceDependencies,
    SystemClock, UserService, UserServiceDependencies,
};
use config::AppConfig;
use infrastructure::{create_pg_pool, BcryptPasswordHasher, PgStorage};
use tracing_subscriber::EnvFilter;
use web_api::{router, AppState, JwtService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // 加载并校验配置
    let config = AppConfig::from_env_with_defaults();
    config.validate()?;

    tracing::info!(
        "连接数据库: {}",
        config.database.url.split('@').next_back().unwrap_or("unknown")
    );

    let pg_pool = create_pg_pool(&config.database.url, config.database.max_connections).await?;

    // 运行迁移
    sqlx::migrate!("../../migrations").run(&pg_pool).await?;

    let storage = PgStorage::new(pg_pool);

    let password_hasher: Arc<dyn application::PasswordHasher> =
        Arc::new(BcryptPasswordHasher::new(config.server.bcrypt_cost));
    let clock: Arc<dyn application::Clock> = Arc::new(SystemClock);

    // 装配应用层服务
    let user_service = Arc::new(UserService::new(UserServiceDependencies {
        user_repository: storage.user_repository.clone(),
        password_hasher,
        clock: clock.clone(),
    }));

    let job_service = Arc::new(JobService::new(JobServiceDependencies {
        job_repository: storage.job_repository.clone(),
        clock: clock.clone(),
    }));

    let application_service = Arc::new(ApplicationService::new(ApplicationServiceDependencies {
        application_repository: storage.application_repository.clone(),
        job_repository: storage.job_repository.clone(),
        user_repository: storage.user_repository.clone(),
        clock: clock.clone(),
    }));

    let rating_service = Arc::new(RatingService::new(RatingServiceDependencies {
        rating_repository: storage.rating_repository.clone(),
        user_repository: storage.user_repository.clone(),
        clock: clock.clone(),
    }));

    let message_service = Arc::new(MessageService::new(MessageServiceDependencies {
        message_repository: storage.message_repository.clone(),
        clock,
    }));

    // JWT 服务
    let jwt_service = Arc::new(JwtService::new(config.jwt.clone()));

    let state = AppState::new(
        user_service,
        job_service,
        application_service,
        rating_service,
        message_service,
        jwt_service,
    );

    // 启动 Web 服务器
    let app = router(state);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("招聘平台服务器启动在 http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
