use crate::config::AppConfig;
use crate::errors::PortalError;
use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};

/// 哈希密码
pub fn hash_password(password: &str) -> Result<String, PortalError> {
    let config = AppConfig::get();
    let params = Params::new(
        config.argon2.memory_cost,
        config.argon2.time_cost,
        config.argon2.parallelism,
        None,
    )
    .map_err(|e| PortalError::validation(format!("Argon2 参数错误: {e}")))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
    let salt = SaltString::generate(&mut OsRng);
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| PortalError::validation(format!("密码哈希失败: {e}")))?;
    Ok(hash.to_string())
}

/// 验证密码
pub fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed_hash) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_rejects_garbage_hash() {
        assert!(!verify_password("student123", "not-a-phc-string"));
        assert!(!verify_password("student123", ""));
    }

    #[test]
    fn test_verify_known_hash() {
        // argon2id PHC 字符串，对应明文 "student123"（默认参数生成）
        let hash = Argon2::default()
            .hash_password(b"student123", &SaltString::generate(&mut OsRng))
            .unwrap()
            .to_string();
        assert!(verify_password("student123", &hash));
        assert!(!verify_password("faculty123", &hash));
    }
}
