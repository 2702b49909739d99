use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireJWT};
use crate::models::assignments::requests::{AssignmentListParams, CreateAssignmentRequest};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::AssignmentService;
use crate::utils::SafeIDI64;

// 懒加载的全局 AssignmentService 实例
static ASSIGNMENT_SERVICE: Lazy<AssignmentService> = Lazy::new(AssignmentService::new_lazy);

// 列出作业
pub async fn list_assignments(
    req: HttpRequest,
    query: web::Query<AssignmentListParams>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .list_assignments(&req, query.into_inner().into())
        .await
}

// 创建作业
pub async fn create_assignment(
    req: HttpRequest,
    body: web::Json<CreateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    let user_id = match RequireJWT::extract_user_id(&req) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    };

    ASSIGNMENT_SERVICE
        .create_assignment(&req, user_id, body.into_inner())
        .await
}

// 获取作业详情
pub async fn get_assignment(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.get_assignment(&req, path.0).await
}

// 配置路由
pub fn configure_assignments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/assignments")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 列出作业 - 所有登录用户可访问
                    .route(web::get().to(list_assignments))
                    // 创建作业 - 仅教师
                    .route(
                        web::post()
                            .to(create_assignment)
                            .wrap(middlewares::RequireRole::new(&UserRole::Faculty)),
                    ),
            )
            // 获取作业详情 - 所有登录用户可访问
            .service(web::resource("/{id}").route(web::get().to(get_assignment))),
    );
}
