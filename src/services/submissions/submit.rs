use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use futures_util::TryStreamExt;
use futures_util::stream::StreamExt;
use std::fs;
use std::io::Write;
use std::{fs::File, path::Path};
use uuid::Uuid;

use super::SubmissionService;
use crate::errors::PortalError;
use crate::middlewares::RequireJWT;
use crate::models::ErrorCode;
use crate::models::submissions::requests::CreateSubmissionRecord;
use crate::models::submissions::responses::SubmissionUploadResponse;
use crate::models::{ApiResponse, submissions::entities::SubmissionStatus};
use crate::utils::validate_magic_bytes;

pub async fn handle_submit(
    service: &SubmissionService,
    req: &HttpRequest,
    mut payload: Multipart,
) -> ActixResult<HttpResponse> {
    let config = service.get_config();
    let upload_dir = &config.upload.dir;
    let max_size = config.upload.max_size;
    let allowed_types = &config.upload.allowed_types;

    let student_id = match RequireJWT::extract_user_id(req) {
        Some(id) => id,
        None => {
            return Ok(
                HttpResponse::Unauthorized().json(ApiResponse::<()>::error_empty(
                    ErrorCode::Unauthorized,
                    "用户未登录",
                )),
            );
        }
    };

    // 确保上传目录存在
    if !Path::new(upload_dir).exists()
        && let Err(e) = fs::create_dir_all(upload_dir)
    {
        tracing::error!("{}", PortalError::file_operation(format!("{e}")));
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error_empty(
                ErrorCode::FileUploadFailed,
                "创建上传目录失败",
            )),
        );
    }

    // 表单字段
    let mut assignment_id: Option<i64> = None;
    let mut original_name = String::new();
    let mut file_size: i64 = 0;
    let mut file_uploaded = false;
    let mut stored_name = String::new();

    while let Ok(Some(mut field)) = payload.try_next().await {
        let content_disposition = field.content_disposition();
        let name = content_disposition
            .and_then(|cd| cd.get_name())
            .unwrap_or_default()
            .to_string();

        if name == "assignment_id" {
            // 文本字段：目标作业 ID
            let mut raw = Vec::new();
            while let Some(chunk) = field.next().await {
                raw.extend_from_slice(&chunk?);
            }
            assignment_id = String::from_utf8_lossy(&raw).trim().parse::<i64>().ok();
        } else if name == "file" {
            if file_uploaded {
                if !stored_name.is_empty() {
                    let _ = fs::remove_file(format!("{upload_dir}/{stored_name}"));
                }
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::MultifileUploadNotAllowed,
                    "Only one file can be uploaded at a time",
                )));
            }
            file_uploaded = true;

            // 先获取原始文件名
            original_name = content_disposition
                .and_then(|cd| cd.get_filename())
                .map(|s| s.to_string())
                .unwrap_or_default();

            // 提取扩展名并校验
            let extension = Path::new(&original_name)
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| format!(".{}", ext.to_lowercase()))
                .unwrap_or_default();

            if !allowed_types.iter().any(|t| t.to_lowercase() == extension) {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::FileTypeNotAllowed,
                    "File type not allowed",
                )));
            }

            stored_name = format!(
                "{}-{}{}",
                chrono::Utc::now().timestamp(),
                Uuid::new_v4(),
                extension
            );
            let file_path = format!("{upload_dir}/{stored_name}");
            let mut f = match File::create(&file_path) {
                Ok(file) => file,
                Err(e) => {
                    tracing::error!("{}", PortalError::file_operation(format!("{e}")));
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::<()>::error_empty(ErrorCode::FileUploadFailed, "文件创建失败"),
                    ));
                }
            };

            let mut total_size: usize = 0;
            let mut first_chunk = true;
            while let Some(chunk) = field.next().await {
                let data = chunk?;

                // 第一个 chunk 时验证魔术字节
                if first_chunk {
                    first_chunk = false;
                    if !validate_magic_bytes(&data, &extension) {
                        let _ = fs::remove_file(&file_path);
                        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                            ErrorCode::FileTypeNotAllowed,
                            "文件内容与扩展名不匹配",
                        )));
                    }
                }

                total_size += data.len();
                // 校验大小
                if total_size > max_size {
                    let _ = fs::remove_file(&file_path);
                    return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                        ErrorCode::FileSizeExceeded,
                        "File size exceeds the limit",
                    )));
                }
                f.write_all(&data)?;
            }
            file_size = total_size as i64;
        }
    }

    if !file_uploaded {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::FileNotFound,
            "No file found in upload payload",
        )));
    }

    let remove_stored = || {
        let _ = fs::remove_file(format!("{upload_dir}/{stored_name}"));
    };

    let assignment_id = match assignment_id {
        Some(id) => id,
        None => {
            remove_stored();
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                "Missing or invalid assignment_id field",
            )));
        }
    };

    let storage = service.get_storage(req);

    // 目标作业必须存在
    let assignment = match storage.get_assignment_by_id(assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            remove_stored();
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                "Assignment not found",
            )));
        }
        Err(e) => {
            remove_stored();
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询作业失败: {e}"),
                )),
            );
        }
    };

    // 重新提交会替换本人同作业下的待批阅提交（旧文件与记录一并清理）
    match storage
        .get_pending_submission(assignment_id, student_id)
        .await
    {
        Ok(Some(old)) => {
            let old_path = format!("{}/{}", upload_dir, old.file_name);
            if let Err(e) = fs::remove_file(&old_path)
                && e.kind() != std::io::ErrorKind::NotFound
            {
                tracing::warn!("Failed to remove replaced submission file {}: {}", old_path, e);
            }
            if let Err(e) = storage.delete_submission(old.id).await {
                remove_stored();
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("替换旧提交失败: {e}"),
                    )),
                );
            }
        }
        Ok(None) => {}
        Err(e) => {
            remove_stored();
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询旧提交失败: {e}"),
                )),
            );
        }
    }

    let record = CreateSubmissionRecord {
        assignment_id,
        student_id,
        file_name: stored_name.clone(),
        original_name: original_name.clone(),
        file_size,
    };

    match storage.create_submission(record).await {
        Ok(submission) => {
            tracing::info!(
                "Submission {} created by student {} for assignment {}",
                submission.id,
                student_id,
                assignment_id
            );
            let response = SubmissionUploadResponse {
                id: submission.id,
                assignment_id: submission.assignment_id,
                original_name: submission.original_name,
                file_size: submission.file_size,
                status: SubmissionStatus::Pending,
                submitted_at: submission.submitted_at,
                is_late: assignment.is_past_deadline(submission.submitted_at),
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Assignment submitted")))
        }
        Err(e) => {
            remove_stored();
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::FileUploadFailed,
                    format!("Failed to store submission: {e}"),
                )),
            )
        }
    }
}
