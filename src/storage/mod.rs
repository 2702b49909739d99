use std::sync::Arc;

use crate::models::{
    assignments::{
        entities::Assignment,
        requests::{AssignmentListQuery, CreateAssignmentRequest},
        responses::AssignmentListResponse,
    },
    submissions::{
        entities::{Submission, SubmissionStatus},
        requests::{CreateSubmissionRecord, SubmissionListQuery},
        responses::SubmissionListResponse,
    },
    system::responses::LoginLogEntry,
    users::{entities::User, requests::CreateUserRequest},
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 统计用户数量
    async fn count_users(&self) -> Result<u64>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 写入登录日志
    async fn record_login(&self, user_id: i64) -> Result<()>;
    // 最近登录日志（带用户信息）
    async fn list_login_logs(&self, limit: u64) -> Result<Vec<LoginLogEntry>>;

    /// 作业管理方法
    // 创建作业
    async fn create_assignment(
        &self,
        created_by: i64,
        assignment: CreateAssignmentRequest,
    ) -> Result<Assignment>;
    // 通过ID获取作业信息
    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>>;
    // 通过标题获取作业信息（标题唯一）
    async fn get_assignment_by_title(&self, title: &str) -> Result<Option<Assignment>>;
    // 列出作业（按截止时间升序）
    async fn list_assignments_with_pagination(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse>;

    /// 提交管理方法
    // 创建提交记录
    async fn create_submission(&self, record: CreateSubmissionRecord) -> Result<Submission>;
    // 通过ID获取提交
    async fn get_submission_by_id(&self, id: i64) -> Result<Option<Submission>>;
    // 获取学生在某作业下的待批阅提交
    async fn get_pending_submission(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>>;
    // 删除提交记录
    async fn delete_submission(&self, id: i64) -> Result<bool>;
    // 批阅提交：写状态、评语、批阅时间与批阅人
    async fn review_submission(
        &self,
        id: i64,
        status: &SubmissionStatus,
        comment: Option<String>,
        reviewer_id: i64,
    ) -> Result<Option<Submission>>;
    // 列出提交（带提交者与作业信息）
    async fn list_submissions_with_pagination(
        &self,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
