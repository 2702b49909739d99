use serde::Deserialize;

use crate::models::users::entities::UserRole;

/// 创建用户请求（注册 / 启动种子账号）
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    /// 已经过哈希处理的密码
    pub password: String,
    pub role: UserRole,
}
