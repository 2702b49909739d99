//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_portal_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum PortalError {
            $($variant(String),)*
        }

        impl PortalError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(PortalError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(PortalError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(PortalError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl PortalError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        PortalError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_portal_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    FileOperation("E004", "File Operation Error"),
    Validation("E005", "Validation Error"),
    NotFound("E006", "Resource Not Found"),
    Serialization("E007", "Serialization Error"),
    DateParse("E008", "Date Parse Error"),
    Authentication("E009", "Authentication Error"),
    Authorization("E010", "Authorization Error"),
}

impl PortalError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for PortalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for PortalError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for PortalError {
    fn from(err: sea_orm::DbErr) -> Self {
        PortalError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for PortalError {
    fn from(err: std::io::Error) -> Self {
        PortalError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for PortalError {
    fn from(err: serde_json::Error) -> Self {
        PortalError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for PortalError {
    fn from(err: chrono::ParseError) -> Self {
        PortalError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PortalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(PortalError::database_config("test").code(), "E001");
        assert_eq!(PortalError::validation("test").code(), "E005");
        assert_eq!(PortalError::authentication("test").code(), "E009");
        assert_eq!(PortalError::authorization("test").code(), "E010");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            PortalError::file_operation("test").error_type(),
            "File Operation Error"
        );
        assert_eq!(
            PortalError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = PortalError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = PortalError::not_found("submission 42");
        let formatted = err.format_simple();
        assert!(formatted.contains("Resource Not Found"));
        assert!(formatted.contains("submission 42"));
    }
}
