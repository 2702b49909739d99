//! 请求参数错误处理器
//!
//! 把 actix 的 Json / Query 反序列化错误重写为统一的 ApiResponse 信封。

use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::{Error, HttpRequest, HttpResponse};

use crate::models::{ApiResponse, ErrorCode};

/// JSON 请求体解析错误处理器
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    let detail = err.to_string();
    let response = HttpResponse::BadRequest().json(ApiResponse::<()>::error_empty(
        ErrorCode::BadRequest,
        format!("Invalid JSON payload: {detail}"),
    ));
    InternalError::from_response(err, response).into()
}

/// 查询参数解析错误处理器
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> Error {
    let detail = err.to_string();
    let response = HttpResponse::BadRequest().json(ApiResponse::<()>::error_empty(
        ErrorCode::BadRequest,
        format!("Invalid query parameters: {detail}"),
    ));
    InternalError::from_response(err, response).into()
}
