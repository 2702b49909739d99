use serde::Serialize;

use crate::models::PaginationInfo;
use crate::models::assignments::entities::Assignment;

/// 作业列表响应
#[derive(Debug, Serialize)]
pub struct AssignmentListResponse {
    pub items: Vec<Assignment>,
    pub pagination: PaginationInfo,
}
