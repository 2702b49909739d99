use serde::{Deserialize, Serialize};

// 作业实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub deadline: chrono::DateTime<chrono::Utc>,
    pub created_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Assignment {
    /// 判断给定时刻是否已过截止时间
    pub fn is_past_deadline(&self, at: chrono::DateTime<chrono::Utc>) -> bool {
        at > self.deadline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn assignment_due(deadline: chrono::DateTime<chrono::Utc>) -> Assignment {
        Assignment {
            id: 1,
            title: "Data Structures - Week 1".to_string(),
            description: "Implement stack and queue operations.".to_string(),
            deadline,
            created_by: 1,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_past_deadline() {
        let deadline = Utc::now();
        let a = assignment_due(deadline);
        assert!(!a.is_past_deadline(deadline));
        assert!(!a.is_past_deadline(deadline - Duration::minutes(1)));
        assert!(a.is_past_deadline(deadline + Duration::seconds(1)));
    }
}
