//! 로그인 요청 DTO
use serde::Deserialize;
use validator::Validate;

/// 로그인 요청 구조체
///
/// `usernameOrEmail` 하나로 사용자명과 이메일을 모두 받습니다.
#[derive(Debug, Deserialize, Validate)]
pub struct SignInRequest {
    #[serde(rename = "usernameOrEmail", alias = "username_or_email")]
    #[validate(length(min = 1, message = "사용자명 또는 이메일을 입력해주세요"))]
    pub username_or_email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}
