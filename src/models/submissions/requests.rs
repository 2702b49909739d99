use serde::Deserialize;

use crate::models::common::pagination::PaginationQuery;
use crate::models::submissions::entities::SubmissionStatus;

/// 批阅请求
#[derive(Debug, Deserialize)]
pub struct ReviewSubmissionRequest {
    /// 目标状态，只接受 approved / rejected
    pub status: SubmissionStatus,
    /// 教师评语（可选）
    pub comment: Option<String>,
}

/// 提交列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub assignment_id: Option<i64>,
    pub status: Option<SubmissionStatus>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct SubmissionListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub assignment_id: Option<i64>,
    /// 学生视角固定为本人，教师视角为 None（全部）
    pub student_id: Option<i64>,
    pub status: Option<SubmissionStatus>,
}

/// 存储层创建提交所需的全部字段
#[derive(Debug, Clone)]
pub struct CreateSubmissionRecord {
    pub assignment_id: i64,
    pub student_id: i64,
    pub file_name: String,
    pub original_name: String,
    pub file_size: i64,
}
