use crate::models::common::pagination::PaginationQuery;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// 创建作业请求
#[derive(Debug, Deserialize)]
pub struct CreateAssignmentRequest {
    pub title: String,
    pub description: String,
    pub deadline: DateTime<Utc>, // ISO 8601 格式，如 "2026-03-05T23:59:00Z"
}

/// 作业列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize)]
pub struct AssignmentListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct AssignmentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
}

impl From<AssignmentListParams> for AssignmentListQuery {
    fn from(params: AssignmentListParams) -> Self {
        Self {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            search: params.search,
        }
    }
}
