use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode};

use super::AssignmentService;

pub async fn handle_get_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_assignment_by_id(assignment_id).await {
        Ok(Some(assignment)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(assignment, "查询成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AssignmentNotFound,
            "Assignment not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询作业失败: {e}"),
            )),
        ),
    }
}
