//! Web API 层。
//!
//! 提供 Axum 路由，将 HTTP 请求解析为显式的操作者身份后委托给
//! 应用层的用例服务；错误种类到状态码的映射只发生在这一层。

mod auth;
mod error;
mod routes;
mod state;

pub use auth::{JwtService, LoginResponse};
pub use config::JwtConfig;
pub use error::ApiError;
pub use routes::router;
pub use state::AppState;
