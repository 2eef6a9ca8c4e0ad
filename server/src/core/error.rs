//! 启动阶段错误
//!
//! 请求处理期间的错误走 [`crate::utils::AppError`] 和
//! [`crate::booking::BookingError`]；这里只覆盖启动 / 关闭路径
//! (打开数据库、应用迁移、绑定端口)。

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),

    #[error("数据库迁移失败: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
}

/// 启动路径的 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
