use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::middlewares::RequireJWT;
use crate::models::submissions::requests::ReviewSubmissionRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 批阅提交，状态只能落到 approved / rejected
/// PUT /submissions/{id}/review
pub async fn handle_review_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: i64,
    review_request: ReviewSubmissionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 路由层已挂 RequireRole(Faculty)，这里取批阅人 ID
    let reviewer_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    if !review_request.status.is_review_target() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidReviewAction,
            "Review status must be approved or rejected",
        )));
    }

    // 空白评语视为未填写
    let comment = review_request
        .comment
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty());

    match storage
        .review_submission(submission_id, &review_request.status, comment, reviewer_id)
        .await
    {
        Ok(Some(submission)) => {
            tracing::info!(
                "Submission {} reviewed as {} by faculty {}",
                submission.id,
                submission.status,
                reviewer_id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(submission, "Review saved")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubmissionNotFound,
            "提交不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("批阅提交失败: {e}"),
            )),
        ),
    }
}
