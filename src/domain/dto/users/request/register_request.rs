use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// bcrypt가 실제로 사용하는 최대 입력 길이(바이트)
pub const MAX_PASSWORD_BYTES: usize = 72;

/// 회원가입 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 50, message = "이름은 1-50자 사이여야 합니다"))]
    pub name: String,

    #[validate(length(min = 3, max = 30, message = "사용자명은 3-30자 사이여야 합니다"))]
    #[validate(custom(function = "validate_username"))]
    pub username: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 6, message = "비밀번호는 최소 6자 이상이어야 합니다"))]
    #[validate(custom(function = "validate_password_bytes"))]
    pub password: String,

    #[serde(default)]
    #[validate(length(max = 500, message = "자기소개는 500자 이하여야 합니다"))]
    pub description: String,
}

/// 알파벳, 숫자, 언더스코어만 허용
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if !username.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Err(ValidationError::new("invalid_username")
            .with_message("사용자명은 알파벳, 숫자, 언더스코어만 사용 가능합니다".into()));
    }
    Ok(())
}

/// 72바이트를 넘는 비밀번호는 뒷부분이 무시되므로 거절
pub fn validate_password_bytes(password: &str) -> Result<(), ValidationError> {
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(ValidationError::new("password_too_long")
            .with_message("비밀번호는 72바이트를 넘을 수 없습니다".into()));
    }
    Ok(())
}
