use serde::Serialize;

/// 登录日志条目（教师端活动面板）
#[derive(Debug, Serialize)]
pub struct LoginLogEntry {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub login_time: chrono::DateTime<chrono::Utc>,
}

/// 登录日志响应
#[derive(Debug, Serialize)]
pub struct LoginLogListResponse {
    pub items: Vec<LoginLogEntry>,
}
