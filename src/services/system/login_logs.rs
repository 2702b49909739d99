use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SystemService;
use crate::models::system::responses::LoginLogListResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 教师端登录活动面板，固定取最近 50 条
const LOGIN_LOG_LIMIT: u64 = 50;

pub async fn handle_list_login_logs(
    service: &SystemService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_login_logs(LOGIN_LOG_LIMIT).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            LoginLogListResponse { items },
            "获取登录日志成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("获取登录日志失败: {e}"),
            )),
        ),
    }
}
