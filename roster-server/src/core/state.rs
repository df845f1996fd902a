use std::path::PathBuf;
use std::sync::Arc;

use shared::models::Role;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::Store;
use crate::db::repository::{RepoError, identity};
use crate::utils::AppError;

/// 服务器状态 - 持有所有服务的单例引用
///
/// ServerState 是核心数据结构，持有所有服务的共享引用。
/// 使用 Arc 实现浅拷贝，所有权成本极低。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | store | Arc<Store> | 进程内存储 |
/// | jwt_service | Arc<JwtService> | JWT 认证服务 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 进程内存储
    pub store: Arc<Store>,
    /// JWT 认证服务 (Arc 共享所有权)
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构 (确保上传目录存在)
    /// 2. 存储与 JWT 服务
    /// 3. 种子管理员身份
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        config.ensure_work_dir_structure().map_err(|e| {
            AppError::internal(format!("Failed to create work directory structure: {}", e))
        })?;

        let store = Arc::new(Store::new());
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        let state = Self {
            config: config.clone(),
            store,
            jwt_service,
        };

        state.seed_admin().await?;

        Ok(state)
    }

    /// 注册种子管理员身份
    ///
    /// 这是系统中唯一的管理员创建途径：任何 API 操作都不会再产生
    /// admin 角色的身份。
    async fn seed_admin(&self) -> Result<(), AppError> {
        match identity::register(
            &self.store,
            &self.config.admin_email,
            &self.config.admin_password,
            Role::Admin,
        )
        .await
        {
            Ok(_) => {
                tracing::info!(email = %self.config.admin_email, "Seeded admin identity");
                Ok(())
            }
            // Already seeded (re-initialization with a shared store)
            Err(RepoError::Duplicate(_)) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// 获取 JWT 服务
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    /// 获取工作目录
    pub fn work_dir(&self) -> PathBuf {
        PathBuf::from(&self.config.work_dir)
    }
}
