//! 作业存储操作

use super::SeaOrmStorage;
use crate::entity::assignments::{ActiveModel, Column, Entity as Assignments};
use crate::errors::{PortalError, Result};
use crate::models::{
    PaginationInfo,
    assignments::{
        entities::Assignment,
        requests::{AssignmentListQuery, CreateAssignmentRequest},
        responses::AssignmentListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建作业
    pub async fn create_assignment_impl(
        &self,
        created_by: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            title: Set(req.title),
            description: Set(req.description),
            deadline: Set(req.deadline.timestamp()),
            created_by: Set(created_by),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("创建作业失败: {e}")))?;

        Ok(result.into_assignment())
    }

    /// 通过 ID 获取作业
    pub async fn get_assignment_by_id_impl(&self, id: i64) -> Result<Option<Assignment>> {
        let result = Assignments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询作业失败: {e}")))?;

        Ok(result.map(|m| m.into_assignment()))
    }

    /// 通过标题获取作业（标题唯一）
    pub async fn get_assignment_by_title_impl(&self, title: &str) -> Result<Option<Assignment>> {
        let result = Assignments::find()
            .filter(Column::Title.eq(title))
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询作业失败: {e}")))?;

        Ok(result.map(|m| m.into_assignment()))
    }

    /// 分页列出作业（按截止时间升序）
    pub async fn list_assignments_with_pagination_impl(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Assignments::find();

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Title.contains(&escaped))
                    .add(Column::Description.contains(&escaped)),
            );
        }

        // 排序
        select = select.order_by_asc(Column::Deadline);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询作业总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| PortalError::database_operation(format!("查询作业页数失败: {e}")))?;

        let assignments = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询作业列表失败: {e}")))?;

        Ok(AssignmentListResponse {
            items: assignments
                .into_iter()
                .map(|m| m.into_assignment())
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }
}
