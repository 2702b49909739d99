//! 路径参数安全提取器
//!
//! 直接用 `web::Path<i64>` 时，非法路径段会返回 actix 默认的纯文本 400。
//! 这里的提取器把解析失败统一包装成 ApiResponse 信封。

use actix_web::dev::Payload;
use actix_web::error::ErrorBadRequest;
use actix_web::{Error, FromRequest, HttpRequest};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

/// 从路径 `{id}` 段提取 i64
pub struct SafeIDI64(pub i64);

impl FromRequest for SafeIDI64 {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let raw = req.match_info().query("id");
        ready(match raw.parse::<i64>() {
            Ok(id) if id > 0 => Ok(SafeIDI64(id)),
            _ => Err(ErrorBadRequest(
                serde_json::to_string(&ApiResponse::<()>::error_empty(
                    ErrorCode::BadRequest,
                    format!("Invalid id in path: '{raw}'"),
                ))
                .unwrap_or_default(),
            )),
        })
    }
}
