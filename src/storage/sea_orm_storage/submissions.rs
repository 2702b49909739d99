//! 提交存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::assignments::{Column as AssignmentColumn, Entity as Assignments};
use crate::entity::submissions::{ActiveModel, Column, Entity as Submissions};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{PortalError, Result};
use crate::models::{
    PaginationInfo,
    submissions::{
        entities::{Submission, SubmissionStatus},
        requests::{CreateSubmissionRecord, SubmissionListQuery},
        responses::{SubmissionAssignmentInfo, SubmissionListItem, SubmissionListResponse},
    },
    users::responses::UserSummary,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建提交记录（初始状态为待批阅）
    pub async fn create_submission_impl(
        &self,
        record: CreateSubmissionRecord,
    ) -> Result<Submission> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            assignment_id: Set(record.assignment_id),
            student_id: Set(record.student_id),
            file_name: Set(record.file_name),
            original_name: Set(record.original_name),
            file_size: Set(record.file_size),
            status: Set(SubmissionStatus::Pending.to_string()),
            submitted_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("创建提交失败: {e}")))?;

        Ok(result.into_submission())
    }

    /// 通过 ID 获取提交
    pub async fn get_submission_by_id_impl(&self, id: i64) -> Result<Option<Submission>> {
        let result = Submissions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 获取学生在某作业下的待批阅提交
    pub async fn get_pending_submission_impl(
        &self,
        assignment_id: i64,
        student_id: i64,
    ) -> Result<Option<Submission>> {
        let result = Submissions::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::Status.eq(SubmissionStatus::Pending.to_string()))
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询待批阅提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 删除提交记录
    pub async fn delete_submission_impl(&self, id: i64) -> Result<bool> {
        let result = Submissions::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("删除提交失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 批阅提交：写状态、评语、批阅时间与批阅人
    pub async fn review_submission_impl(
        &self,
        id: i64,
        status: &SubmissionStatus,
        comment: Option<String>,
        reviewer_id: i64,
    ) -> Result<Option<Submission>> {
        // 先检查提交是否存在
        let existing = self.get_submission_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(id),
            status: Set(status.to_string()),
            faculty_comment: Set(comment),
            reviewed_at: Set(Some(now)),
            reviewed_by: Set(Some(reviewer_id)),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("批阅提交失败: {e}")))?;

        self.get_submission_by_id_impl(id).await
    }

    /// 列出提交（分页，带提交者与作业信息）
    pub async fn list_submissions_with_pagination_impl(
        &self,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Submissions::find();

        // 作业筛选
        if let Some(assignment_id) = query.assignment_id {
            select = select.filter(Column::AssignmentId.eq(assignment_id));
        }

        // 提交者筛选（学生视角固定为本人）
        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        // 状态筛选
        if let Some(ref status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        // 排序
        select = select.order_by_desc(Column::SubmittedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询提交总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询提交页数失败: {e}")))?;

        let submissions = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询提交列表失败: {e}")))?;

        // 批量查询用户信息
        let student_ids: Vec<i64> = submissions
            .iter()
            .map(|s| s.student_id)
            .collect::<std::collections::HashSet<_>>()
            .into_iter()
            .collect();

        let users = Users::find()
            .filter(UserColumn::Id.is_in(student_ids))
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询用户信息失败: {e}")))?;

        let user_map: HashMap<i64, _> = users.into_iter().map(|u| (u.id, u)).collect();

        // 批量查询作业信息
        let assignment_ids: Vec<i64> = submissions
            .iter()
            .map(|s| s.assignment_id)
            .collect::<std::collections::HashSet<_>>()
            .into_iter()
            .collect();

        let assignments = Assignments::find()
            .filter(AssignmentColumn::Id.is_in(assignment_ids))
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询作业信息失败: {e}")))?;

        let assignment_map: HashMap<i64, _> =
            assignments.into_iter().map(|a| (a.id, a)).collect();

        // 组装 SubmissionListItem
        let items = submissions
            .into_iter()
            .map(|s| {
                let student = user_map.get(&s.student_id);
                let assignment = assignment_map.get(&s.assignment_id);
                let deadline = assignment.map(|a| a.deadline).unwrap_or(i64::MAX);

                SubmissionListItem {
                    id: s.id,
                    assignment_id: s.assignment_id,
                    student: UserSummary {
                        id: student.map(|u| u.id).unwrap_or(s.student_id),
                        name: student
                            .map(|u| u.name.clone())
                            .unwrap_or_else(|| "未知用户".to_string()),
                        email: student.map(|u| u.email.clone()).unwrap_or_default(),
                    },
                    original_name: s.original_name,
                    file_size: s.file_size,
                    status: s
                        .status
                        .parse::<SubmissionStatus>()
                        .unwrap_or(SubmissionStatus::Pending),
                    faculty_comment: s.faculty_comment,
                    submitted_at: chrono::DateTime::from_timestamp(s.submitted_at, 0)
                        .unwrap_or_default(),
                    reviewed_at: s
                        .reviewed_at
                        .and_then(|ts| chrono::DateTime::from_timestamp(ts, 0)),
                    is_late: s.submitted_at > deadline,
                    assignment: SubmissionAssignmentInfo {
                        id: s.assignment_id,
                        title: assignment
                            .map(|a| a.title.clone())
                            .unwrap_or_else(|| "未知作业".to_string()),
                        deadline: chrono::DateTime::from_timestamp(deadline, 0)
                            .unwrap_or_default(),
                    },
                }
            })
            .collect();

        Ok(SubmissionListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }
}
