//! 提交实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "submissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub assignment_id: i64,
    pub student_id: i64,
    #[sea_orm(unique)]
    pub file_name: String,
    pub original_name: String,
    pub file_size: i64,
    pub status: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub faculty_comment: Option<String>,
    pub submitted_at: i64,
    pub reviewed_at: Option<i64>,
    pub reviewed_by: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::assignments::Entity",
        from = "Column::AssignmentId",
        to = "super::assignments::Column::Id"
    )]
    Assignment,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::StudentId",
        to = "super::users::Column::Id"
    )]
    Student,
}

impl Related<super::assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignment.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_submission(self) -> crate::models::submissions::entities::Submission {
        use crate::models::submissions::entities::{Submission, SubmissionStatus};
        use chrono::{DateTime, Utc};

        Submission {
            id: self.id,
            assignment_id: self.assignment_id,
            student_id: self.student_id,
            file_name: self.file_name,
            original_name: self.original_name,
            file_size: self.file_size,
            status: self
                .status
                .parse::<SubmissionStatus>()
                .unwrap_or(SubmissionStatus::Pending),
            faculty_comment: self.faculty_comment,
            submitted_at: DateTime::<Utc>::from_timestamp(self.submitted_at, 0).unwrap_or_default(),
            reviewed_at: self
                .reviewed_at
                .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0)),
            reviewed_by: self.reviewed_by,
        }
    }
}
