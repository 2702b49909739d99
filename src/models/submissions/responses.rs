use serde::Serialize;

use crate::models::PaginationInfo;
use crate::models::submissions::entities::SubmissionStatus;
use crate::models::users::responses::UserSummary;

/// 提交关联的作业信息
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionAssignmentInfo {
    pub id: i64,
    pub title: String,
    pub deadline: chrono::DateTime<chrono::Utc>,
}

/// 提交列表项（包含提交者与作业信息）
#[derive(Debug, Serialize)]
pub struct SubmissionListItem {
    pub id: i64,
    pub assignment_id: i64,
    pub student: UserSummary,
    pub original_name: String,
    pub file_size: i64,
    pub status: SubmissionStatus,
    pub faculty_comment: Option<String>,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    pub reviewed_at: Option<chrono::DateTime<chrono::Utc>>,
    pub is_late: bool,
    pub assignment: SubmissionAssignmentInfo,
}

/// 提交列表响应
#[derive(Debug, Serialize)]
pub struct SubmissionListResponse {
    pub items: Vec<SubmissionListItem>,
    pub pagination: PaginationInfo,
}

/// 上传成功响应
#[derive(Debug, Serialize)]
pub struct SubmissionUploadResponse {
    pub id: i64,
    pub assignment_id: i64,
    pub original_name: String,
    pub file_size: i64,
    pub status: SubmissionStatus,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    pub is_late: bool,
}
