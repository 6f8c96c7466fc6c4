use uuid::Uuid;

/// 生成参与者的私有访问令牌
pub fn generate_token() -> Uuid {
    Uuid::new_v4()
}

/// 拼接参与者查看抽签结果的链接
pub fn assignment_url(base_url: &str, token: &Uuid) -> String {
    format!("{}/assignment?token={}", base_url.trim_end_matches('/'), token)
}
