use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::assignments::requests::AssignmentListQuery;
use crate::models::{ApiResponse, ErrorCode};

use super::AssignmentService;

pub async fn handle_list_assignments(
    service: &AssignmentService,
    request: &HttpRequest,
    query: AssignmentListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_assignments_with_pagination(query).await {
        Ok(resp) => Ok(HttpResponse::Ok().json(ApiResponse::success(resp, "获取作业列表成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取作业列表失败: {e}"),
            )),
        ),
    }
}
