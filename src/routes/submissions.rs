use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RateLimit};
use crate::models::submissions::requests::{ReviewSubmissionRequest, SubmissionListParams};
use crate::models::users::entities::UserRole;
use crate::services::SubmissionService;
use crate::utils::SafeIDI64;

// 懒加载的全局 SubmissionService 实例
static SUBMISSION_SERVICE: Lazy<SubmissionService> = Lazy::new(SubmissionService::new_lazy);

// 上传提交
pub async fn submit(
    request: HttpRequest,
    payload: actix_multipart::Multipart,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE.submit(&request, payload).await
}

// 列出提交
pub async fn list_submissions(
    req: HttpRequest,
    query: web::Query<SubmissionListParams>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .list_submissions(&req, query.into_inner())
        .await
}

// 获取提交详情
pub async fn get_submission(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE.get_submission(&req, path.0).await
}

// 删除提交
pub async fn delete_submission(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE.delete_submission(&req, path.0).await
}

// 批阅提交
pub async fn review_submission(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<ReviewSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .review_submission(&req, path.0, body.into_inner())
        .await
}

// 下载提交文件
pub async fn download_submission_file(
    req: HttpRequest,
    path: SafeIDI64,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .download_submission_file(&req, path.0)
        .await
}

// 配置路由
pub fn configure_submissions_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/submissions")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 列出提交 - 业务层按角色过滤（学生只见本人）
                    .route(web::get().to(list_submissions))
                    // 上传提交 - 仅学生
                    .route(
                        web::post()
                            .to(submit)
                            .wrap(RateLimit::file_upload())
                            .wrap(middlewares::RequireRole::new(&UserRole::Student)),
                    ),
            )
            .service(
                web::resource("/{id}")
                    // 获取提交详情 - 业务层校验归属（本人或教师）
                    .route(web::get().to(get_submission))
                    // 删除提交 - 仅学生本人，且待批阅
                    .route(
                        web::delete()
                            .to(delete_submission)
                            .wrap(middlewares::RequireRole::new(&UserRole::Student)),
                    ),
            )
            // 批阅提交 - 仅教师
            .service(
                web::resource("/{id}/review").route(
                    web::put()
                        .to(review_submission)
                        .wrap(middlewares::RequireRole::new(&UserRole::Faculty)),
                ),
            )
            // 下载提交文件 - 业务层校验归属（本人或教师）
            .service(
                web::resource("/{id}/file").route(web::get().to(download_submission_file)),
            ),
    );
}
