use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::auth::RegisterRequest;
use crate::models::users::{entities::UserRole, requests::CreateUserRequest};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_name, validate_password};

use super::AuthService;

/// 学生自助注册。教师账号由启动期种子流程创建，不开放注册。
pub async fn handle_register(
    service: &AuthService,
    register_request: RegisterRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 1. 字段校验
    if let Err(msg) = validate_name(&register_request.name) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    let email = register_request.email.trim().to_lowercase();
    if let Err(msg) = validate_email(&email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    let password_check = validate_password(&register_request.password);
    if !password_check.is_valid {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            password_check.error_message(),
        )));
    }

    // 2. 邮箱唯一性检查
    match storage.get_user_by_email(&email).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::UserAlreadyExists,
                "Email already exists",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Registration failed: {e}"),
                )),
            );
        }
    }

    // 3. 哈希密码
    let password_hash = match hash_password(&register_request.password) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!("Password hashing failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Registration failed",
                )),
            );
        }
    };

    // 4. 创建学生账号
    let create_request = CreateUserRequest {
        name: register_request.name.trim().to_string(),
        email,
        password: password_hash,
        role: UserRole::Student,
    };

    match storage.create_user(create_request).await {
        Ok(user) => {
            tracing::info!("Student account created: {} ({})", user.name, user.email);
            Ok(HttpResponse::Ok().json(ApiResponse::success(user, "Student account created")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Registration failed: {e}"),
            )),
        ),
    }
}
