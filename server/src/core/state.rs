use std::path::Path;

use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;

/// 服务器状态 - 持有配置和数据库连接池
///
/// ServerState 通过 axum 的 `State` extractor 注入所有 handler。
/// SqlitePool 内部是 Arc，Clone 成本极低。
///
/// # 使用示例
///
/// ```ignore
/// let state = ServerState::initialize(&config).await;
/// let app = api::router().with_state(state);
/// ```
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// SQLite 连接池
    pub db: SqlitePool,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize`] 代替；测试可以用
    /// [`DbService::in_memory`] 的池直接构造。
    pub fn new(config: Config, db: SqlitePool) -> Self {
        Self { config, db }
    }

    /// 初始化服务器状态
    ///
    /// 确保数据库目录存在，打开连接池并应用迁移。
    ///
    /// # Panics
    ///
    /// 数据库初始化失败时 panic
    pub async fn initialize(config: &Config) -> Self {
        // Ensure the database directory exists
        if let Some(parent) = Path::new(&config.database_path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).expect("Failed to create database directory");
        }

        let db_service = DbService::new(&config.database_path)
            .await
            .expect("Failed to initialize database");

        Self::new(config.clone(), db_service.pool)
    }
}
