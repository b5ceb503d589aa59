//! # 产品 REST API
//!
//! 一个小型产品服务：创建、按 id 查询、列表和健康检查。
//! 查询单个产品需要 `X-API-Key` 请求头。
//!
//! 分层：
//! - `app`：产品请求校验、业务服务、响应结构、处理器
//! - `core`：错误转换、响应信封、提取器、中间件
//! - `infrastructure`：产品存储（内存、PostgreSQL）与日志
//! - `config`：服务配置

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use app::build_router;
pub use config::AppConfig;
