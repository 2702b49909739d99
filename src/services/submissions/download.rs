use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::header};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::SubmissionService;
use crate::errors::PortalError;
use crate::middlewares::RequireJWT;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 下载提交文件，仅提交者本人或教师可访问
pub async fn handle_download(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

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

    // 文件归属校验：学生只能取自己的文件
    if current_user.role != UserRole::Faculty && submission.student_id != current_user.id {
        tracing::info!(
            "User {} denied access to submission file {} (owner: {})",
            current_user.id,
            submission.id,
            submission.student_id
        );
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "没有访问该文件的权限",
        )));
    }

    let config = service.get_config();
    let upload_dir = &config.upload.dir;
    let file_path = format!("{}/{}", upload_dir, submission.file_name);

    if !Path::new(&file_path).exists() {
        return Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::FileNotFound, "文件不存在")));
    }

    let mut file = match File::open(&file_path) {
        Ok(f) => f,
        Err(e) => {
            tracing::error!("{:?}", PortalError::file_operation(format!("{e:?}")));
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "File open failed",
                )),
            );
        }
    };

    let mut buf = Vec::new();
    if file.read_to_end(&mut buf).is_err() {
        tracing::error!("{:?}", PortalError::file_operation("File read failed"));
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "File read failed",
            )),
        );
    }

    // 使用数据库中的原始文件名
    Ok(HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, "application/pdf"))
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", submission.original_name),
        ))
        .body(buf))
}
