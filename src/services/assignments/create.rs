use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::models::{ApiResponse, ErrorCode};

use super::AssignmentService;

pub async fn handle_create_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    created_by: i64,
    create_request: CreateAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 字段校验
    let title = create_request.title.trim().to_string();
    if title.is_empty() || create_request.description.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Title and description are required",
        )));
    }

    // 标题唯一性检查
    match storage.get_assignment_by_title(&title).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::AssignmentTitleExists,
                "Assignment title already exists",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询作业失败: {e}"),
                )),
            );
        }
    }

    let create_request = CreateAssignmentRequest {
        title,
        description: create_request.description.trim().to_string(),
        deadline: create_request.deadline,
    };

    match storage.create_assignment(created_by, create_request).await {
        Ok(assignment) => {
            tracing::info!(
                "Assignment '{}' created by user {}",
                assignment.title,
                created_by
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(assignment, "Assignment created")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建作业失败: {e}"),
            )),
        ),
    }
}
