use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::fs;

use super::SubmissionService;
use crate::middlewares::RequireJWT;
use crate::models::submissions::entities::SubmissionStatus;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_delete_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    let submission = match storage.get_submission_by_id(submission_id).await {
        Ok(Some(sub)) => sub,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubmissionNotFound,
                "提交不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询提交失败: {e}"),
                )),
            );
        }
    };

    // 只能删除本人的提交
    if submission.student_id != current_user.id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "没有删除该提交的权限",
        )));
    }

    // 已批阅的提交不可删除
    if submission.status != SubmissionStatus::Pending {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::SubmissionNotPending,
            "只能删除待批阅的提交",
        )));
    }

    // 清理磁盘文件，文件缺失不阻塞删除
    let file_path = format!("{}/{}", config.upload.dir, submission.file_name);
    if let Err(e) = fs::remove_file(&file_path)
        && e.kind() != std::io::ErrorKind::NotFound
    {
        tracing::warn!("Failed to remove submission file {}: {}", file_path, e);
    }

    match storage.delete_submission(submission_id).await {
        Ok(true) => {
            tracing::info!(
                "Submission {} deleted by student {}",
                submission_id,
                current_user.id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty("Submission deleted")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubmissionNotFound,
            "提交不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除提交失败: {e}"),
            )),
        ),
    }
}
