use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

pub fn validate_name(name: &str) -> Result<(), &'static str> {
    // 姓名长度校验：2 <= x <= 64
    let trimmed = name.trim();
    if trimmed.len() < 2 || trimmed.len() > 64 {
        return Err("Name length must be between 2 and 64 characters");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 密码策略验证结果
#[derive(Debug, Clone)]
pub struct PasswordValidationResult {
    pub is_valid: bool,
    pub errors: Vec<&'static str>,
}

impl PasswordValidationResult {
    pub fn error_message(&self) -> String {
        self.errors.join("; ")
    }
}

/// 验证密码是否符合安全策略
///
/// 策略要求：
/// - 最小长度：8 字符
/// - 必须包含：字母 + 数字
pub fn validate_password(password: &str) -> PasswordValidationResult {
    let mut errors = Vec::new();

    // 1. 长度检查：至少 8 个字符
    if password.len() < 8 {
        errors.push("Password must be at least 8 characters long");
    }

    // 2. 字母检查
    if !password.chars().any(|c| c.is_ascii_alphabetic()) {
        errors.push("Password must contain at least one letter");
    }

    // 3. 数字检查
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one digit");
    }

    PasswordValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("arun@student.edu").is_ok());
        assert!(validate_email("faculty@college.edu").is_ok());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("missing@tld").is_err());
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Arun Student").is_ok());
        assert!(validate_name("A").is_err());
        assert!(validate_name(&"x".repeat(65)).is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("student123").is_valid);
        assert!(!validate_password("short1").is_valid);
        assert!(!validate_password("lettersonly").is_valid);
        assert!(!validate_password("12345678").is_valid);
    }

    #[test]
    fn test_password_error_message_joined() {
        let result = validate_password("abc");
        assert!(!result.is_valid);
        assert!(result.error_message().contains("; "));
    }
}
