//! Pootle - 在线翻译管理服务
//!
//! 基于 Actix Web 构建的本地化管理服务端，提供按语言浏览、翻译、导出和权限管理的页面。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `middlewares`: 认证、语言解析与权限中间件
//! - `models`: 数据模型定义
//! - `render`: Tera 模板渲染
//! - `routes`: 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod config;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod render;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
