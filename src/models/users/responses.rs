use serde::Serialize;

/// 用户摘要（嵌入在提交列表等响应中）
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub id: i64,
    pub name: String,
    pub email: String,
}
