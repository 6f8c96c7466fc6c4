use crate::error::{AppError, AppResult};
use bcrypt::{DEFAULT_COST, hash, verify};

/// 校验管理 PIN 格式（4-8位数字）
pub fn validate_pin(pin: &str) -> AppResult<()> {
    if pin.len() < 4 || pin.len() > 8 || !pin.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::ValidationError(
            "PIN must be 4-8 digits".to_string(),
        ));
    }
    Ok(())
}

/// 对 PIN 进行哈希后入库
pub fn hash_pin(pin: &str) -> AppResult<String> {
    hash(pin, DEFAULT_COST).map_err(AppError::from)
}

/// 校验 PIN
pub fn verify_pin(pin: &str, pin_hash: &str) -> AppResult<bool> {
    verify(pin, pin_hash).map_err(AppError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_pin() {
        assert!(validate_pin("1234").is_ok());
        assert!(validate_pin("12345678").is_ok());
        assert!(validate_pin("123").is_err()); // 太短
        assert!(validate_pin("123456789").is_err()); // 太长
        assert!(validate_pin("12a4").is_err()); // 非数字
    }

    #[test]
    fn test_hash_and_verify_pin() {
        let hashed = hash_pin("4711").unwrap();
        assert!(verify_pin("4711", &hashed).unwrap());
        assert!(!verify_pin("0000", &hashed).unwrap());
    }
}
