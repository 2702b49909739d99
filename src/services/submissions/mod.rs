pub mod delete;
pub mod detail;
pub mod download;
pub mod list;
pub mod review;
pub mod submit;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::submissions::requests::{ReviewSubmissionRequest, SubmissionListParams};
use crate::storage::Storage;

pub struct SubmissionService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubmissionService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    // 上传提交（仅学生，multipart）
    pub async fn submit(
        &self,
        request: &HttpRequest,
        payload: Multipart,
    ) -> ActixResult<HttpResponse> {
        submit::handle_submit(self, request, payload).await
    }

    // 列出提交（学生看自己的，教师看全部）
    pub async fn list_submissions(
        &self,
        request: &HttpRequest,
        params: SubmissionListParams,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_submissions(self, request, params).await
    }

    // 获取提交详情（本人或教师）
    pub async fn get_submission(
        &self,
        request: &HttpRequest,
        submission_id: i64,
    ) -> ActixResult<HttpResponse> {
        detail::handle_get_submission(self, request, submission_id).await
    }

    // 删除提交（仅本人，且状态为待批阅）
    pub async fn delete_submission(
        &self,
        request: &HttpRequest,
        submission_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::handle_delete_submission(self, request, submission_id).await
    }

    // 批阅提交（仅教师）
    pub async fn review_submission(
        &self,
        request: &HttpRequest,
        submission_id: i64,
        review_request: ReviewSubmissionRequest,
    ) -> ActixResult<HttpResponse> {
        review::handle_review_submission(self, request, submission_id, review_request).await
    }

    // 下载提交文件（本人或教师）
    pub async fn download_submission_file(
        &self,
        request: &HttpRequest,
        submission_id: i64,
    ) -> ActixResult<HttpResponse> {
        download::handle_download(self, request, submission_id).await
    }
}
