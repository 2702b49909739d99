use crate::models::users::entities::UserRole;
use crate::models::users::requests::CreateUserRequest;
use crate::storage::Storage;
use crate::utils::password::hash_password;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 生成随机密码
fn generate_random_password(length: usize) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%";
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// 初始化默认教师账号
/// 如果数据库中没有任何用户，则创建一个默认的教师账号
async fn seed_faculty(storage: &Arc<dyn Storage>) {
    // 检查是否已有用户
    match storage.count_users().await {
        Ok(count) if count > 0 => {
            debug!(
                "Database already has {} user(s), skipping faculty seed",
                count
            );
            return;
        }
        Ok(_) => {
            info!("No users found in database, creating default faculty account...");
        }
        Err(e) => {
            warn!("Failed to count users: {}, skipping faculty seed", e);
            return;
        }
    }

    let email =
        std::env::var("FACULTY_EMAIL").unwrap_or_else(|_| "faculty@college.edu".to_string());

    // 获取密码：优先从环境变量，否则生成随机密码
    let password = std::env::var("FACULTY_PASSWORD").unwrap_or_else(|_| {
        let pwd = generate_random_password(16);
        warn!("==========================================================");
        warn!("  FACULTY PASSWORD NOT SET - USING GENERATED PASSWORD");
        warn!("  Generated faculty password: {}", pwd);
        warn!("  Please save this password or set FACULTY_PASSWORD env var");
        warn!("==========================================================");
        pwd
    });

    // 哈希密码
    let password_hash = match hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => {
            warn!("Failed to hash faculty password: {}, skipping faculty seed", e);
            return;
        }
    };

    // 创建教师账号
    let faculty_request = CreateUserRequest {
        name: "Faculty".to_string(),
        email,
        password: password_hash,
        role: UserRole::Faculty,
    };

    match storage.create_user(faculty_request).await {
        Ok(user) => {
            info!(
                "Default faculty account created successfully (ID: {}, email: {})",
                user.id, user.email
            );
        }
        Err(e) => {
            warn!("Failed to create faculty account: {}", e);
        }
    }
}

/// 准备服务器启动的上下文
/// 包括存储初始化与种子账号
pub async fn prepare_server_startup() -> StartupContext {
    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    // 初始化默认教师账号（如果需要）
    seed_faculty(&storage).await;

    StartupContext { storage }
}
