use serde::Deserialize;

// 用户登录请求（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// 邮箱
    pub email: String,
    /// 密码
    pub password: String,
    /// 是否记住我
    #[serde(default)]
    pub remember_me: bool,
}

// 学生注册请求（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// 姓名
    pub name: String,
    /// 邮箱
    pub email: String,
    /// 明文密码，入库前哈希
    pub password: String,
}
