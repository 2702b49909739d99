//! 登录日志存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::login_logs::{ActiveModel, Column, Entity as LoginLogs};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{PortalError, Result};
use crate::models::system::responses::LoginLogEntry;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set};

impl SeaOrmStorage {
    /// 写入登录日志
    pub async fn record_login_impl(&self, user_id: i64) -> Result<()> {
        let model = ActiveModel {
            user_id: Set(user_id),
            login_time: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("写入登录日志失败: {e}")))?;

        Ok(())
    }

    /// 最近登录日志（带用户信息，按时间倒序）
    pub async fn list_login_logs_impl(&self, limit: u64) -> Result<Vec<LoginLogEntry>> {
        let logs = LoginLogs::find()
            .order_by_desc(Column::LoginTime)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询登录日志失败: {e}")))?;

        // 批量查询用户信息
        let user_ids: Vec<i64> = logs
            .iter()
            .map(|l| l.user_id)
            .collect::<std::collections::HashSet<_>>()
            .into_iter()
            .collect();

        let users = Users::find()
            .filter(UserColumn::Id.is_in(user_ids))
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询用户信息失败: {e}")))?;

        let user_map: HashMap<i64, _> = users.into_iter().map(|u| (u.id, u)).collect();

        let entries = logs
            .into_iter()
            .map(|l| {
                let user = user_map.get(&l.user_id);
                LoginLogEntry {
                    user_id: l.user_id,
                    name: user
                        .map(|u| u.name.clone())
                        .unwrap_or_else(|| "未知用户".to_string()),
                    email: user.map(|u| u.email.clone()).unwrap_or_default(),
                    role: user.map(|u| u.role.clone()).unwrap_or_default(),
                    login_time: chrono::DateTime::from_timestamp(l.login_time, 0)
                        .unwrap_or_default(),
                }
            })
            .collect();

        Ok(entries)
    }
}
