use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::entities::UserRole;
use crate::services::SystemService;

// 懒加载的全局 SystemService 实例
static SYSTEM_SERVICE: Lazy<SystemService> = Lazy::new(SystemService::new_lazy);

// 最近登录日志
pub async fn list_login_logs(request: HttpRequest) -> ActixResult<HttpResponse> {
    SYSTEM_SERVICE.list_login_logs(&request).await
}

// 配置路由
pub fn configure_system_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/system")
            .wrap(middlewares::RequireJWT)
            // 登录活动 - 仅教师
            .service(
                web::resource("/login-logs")
                    .wrap(middlewares::RequireRole::new(&UserRole::Faculty))
                    .route(web::get().to(list_login_logs)),
            ),
    );
}
