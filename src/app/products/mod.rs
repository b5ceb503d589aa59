//! 产品模块：请求校验、业务服务、响应结构和 HTTP 处理器

pub mod handler;
pub mod model;
pub mod request;
pub mod response;
pub mod routes;
pub mod service;
