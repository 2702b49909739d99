use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::middlewares::RequireJWT;
use crate::models::submissions::requests::{SubmissionListParams, SubmissionListQuery};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_list_submissions(
    service: &SubmissionService,
    request: &HttpRequest,
    params: SubmissionListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    // 学生只能看到自己的提交，教师可以看到全部
    let student_id = match current_user.role {
        UserRole::Student => Some(current_user.id),
        UserRole::Faculty => None,
    };

    let query = SubmissionListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        assignment_id: params.assignment_id,
        student_id,
        status: params.status,
    };

    match storage.list_submissions_with_pagination(query).await {
        Ok(resp) => Ok(HttpResponse::Ok().json(ApiResponse::success(resp, "获取提交列表成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取提交列表失败: {e}"),
            )),
        ),
    }
}
