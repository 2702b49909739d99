//! 数据模型定义
//!
//! 按领域划分：auth / users / assignments / submissions / system，
//! common 下是跨领域的响应信封与分页模型。

pub mod assignments;
pub mod auth;
pub mod common;
pub mod submissions;
pub mod system;
pub mod users;

pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// 业务错误码，随 ApiResponse 一起返回
///
/// 0 表示成功；4xx/5xx 与 HTTP 状态对应；1xxx 为领域细分错误。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 400,
    Unauthorized = 401,
    Forbidden = 403,
    NotFound = 404,
    RateLimitExceeded = 429,
    InternalServerError = 500,

    AuthFailed = 1001,
    UserAlreadyExists = 1002,
    UserNotFound = 1003,

    AssignmentNotFound = 1101,
    AssignmentTitleExists = 1102,

    SubmissionNotFound = 1201,
    SubmissionNotPending = 1202,
    InvalidReviewAction = 1203,

    FileNotFound = 1301,
    FileUploadFailed = 1302,
    FileTypeNotAllowed = 1303,
    FileSizeExceeded = 1304,
    MultifileUploadNotAllowed = 1305,
}

/// 程序启动时间，注入 app_data 供运行时信息使用
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::Unauthorized as i32, 401);
        assert_eq!(ErrorCode::Forbidden as i32, 403);
        assert_eq!(ErrorCode::FileSizeExceeded as i32, 1304);
    }
}
