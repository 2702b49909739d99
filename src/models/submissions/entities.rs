use serde::{Deserialize, Serialize};

// 提交状态
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Pending,  // 待批阅
    Approved, // 已通过
    Rejected, // 已退回
}

impl SubmissionStatus {
    pub const PENDING: &'static str = "pending";
    pub const APPROVED: &'static str = "approved";
    pub const REJECTED: &'static str = "rejected";

    /// 批阅动作只允许落到这两个终态
    pub fn is_review_target(&self) -> bool {
        matches!(self, SubmissionStatus::Approved | SubmissionStatus::Rejected)
    }
}

impl<'de> Deserialize<'de> for SubmissionStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            SubmissionStatus::PENDING => Ok(SubmissionStatus::Pending),
            SubmissionStatus::APPROVED => Ok(SubmissionStatus::Approved),
            SubmissionStatus::REJECTED => Ok(SubmissionStatus::Rejected),
            _ => Err(serde::de::Error::custom(format!(
                "无效的提交状态: '{s}'. 支持的状态: pending, approved, rejected"
            ))),
        }
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionStatus::Pending => write!(f, "{}", SubmissionStatus::PENDING),
            SubmissionStatus::Approved => write!(f, "{}", SubmissionStatus::APPROVED),
            SubmissionStatus::Rejected => write!(f, "{}", SubmissionStatus::REJECTED),
        }
    }
}

impl std::str::FromStr for SubmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(SubmissionStatus::Pending),
            "approved" => Ok(SubmissionStatus::Approved),
            "rejected" => Ok(SubmissionStatus::Rejected),
            _ => Err(format!("Invalid submission status: {s}")),
        }
    }
}

// 提交实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub id: i64,
    pub assignment_id: i64,
    pub student_id: i64,
    /// 上传目录下的存储文件名
    pub file_name: String,
    /// 学生上传时的原始文件名
    pub original_name: String,
    pub file_size: i64,
    pub status: SubmissionStatus,
    pub faculty_comment: Option<String>,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    pub reviewed_at: Option<chrono::DateTime<chrono::Utc>>,
    pub reviewed_by: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_status_round_trip() {
        for s in ["pending", "approved", "rejected"] {
            assert_eq!(SubmissionStatus::from_str(s).unwrap().to_string(), s);
        }
        assert!(SubmissionStatus::from_str("late").is_err());
    }

    #[test]
    fn test_review_targets() {
        assert!(!SubmissionStatus::Pending.is_review_target());
        assert!(SubmissionStatus::Approved.is_review_target());
        assert!(SubmissionStatus::Rejected.is_review_target());
    }

    #[test]
    fn test_status_deserialize_rejects_unknown() {
        assert!(serde_json::from_str::<SubmissionStatus>("\"approved\"").is_ok());
        assert!(serde_json::from_str::<SubmissionStatus>("\"Approved\"").is_err());
    }
}
