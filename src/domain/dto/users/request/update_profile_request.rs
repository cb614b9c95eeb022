use serde::Deserialize;
use validator::Validate;

use crate::domain::dto::users::request::register_request::validate_username;
use crate::utils::string_utils::deserialize_optional_string;

/// 부분 프로필 수정 요청
///
/// 모든 필드가 선택입니다. 빈 문자열이나 공백만 있는 값은 "전달되지 않음"과
/// 동일하게 취급되므로 필드를 빈 값으로 비우는 방법은 없습니다.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 50, message = "이름은 50자 이하여야 합니다"))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(min = 3, max = 30, message = "사용자명은 3-30자 사이여야 합니다"))]
    #[validate(custom(function = "validate_username"))]
    pub username: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 500, message = "자기소개는 500자 이하여야 합니다"))]
    pub description: Option<String>,
}

impl UpdateProfileRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.username.is_none()
            && self.email.is_none()
            && self.description.is_none()
    }
}
