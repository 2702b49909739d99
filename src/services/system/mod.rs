pub mod login_logs;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct SystemService {
    storage: Option<Arc<dyn Storage>>,
}

impl SystemService {
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

    // 最近登录日志（仅教师）
    pub async fn list_login_logs(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        login_logs::handle_list_login_logs(self, request).await
    }
}
