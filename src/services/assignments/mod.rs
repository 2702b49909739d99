pub mod create;
pub mod detail;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::assignments::requests::{AssignmentListQuery, CreateAssignmentRequest};
use crate::storage::Storage;

pub struct AssignmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl AssignmentService {
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

    // 创建作业（仅教师）
    pub async fn create_assignment(
        &self,
        request: &HttpRequest,
        created_by: i64,
        create_request: CreateAssignmentRequest,
    ) -> ActixResult<HttpResponse> {
        create::handle_create_assignment(self, request, created_by, create_request).await
    }

    // 列出作业
    pub async fn list_assignments(
        &self,
        request: &HttpRequest,
        query: AssignmentListQuery,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_assignments(self, request, query).await
    }

    // 获取作业详情
    pub async fn get_assignment(
        &self,
        request: &HttpRequest,
        assignment_id: i64,
    ) -> ActixResult<HttpResponse> {
        detail::handle_get_assignment(self, request, assignment_id).await
    }
}
