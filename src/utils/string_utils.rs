//! # 문자열 유틸리티
//!
//! 요청 필드 정리에 쓰는 공통 함수들입니다. 부분 수정 요청에서는
//! 빈 문자열과 공백 문자열을 "전달되지 않음"으로 취급합니다.

use serde::Deserialize;

use crate::core::errors::AppError;

/// 필수 문자열을 trim하고, 비어 있으면 ValidationError를 반환합니다.
///
/// ```rust,ignore
/// assert_eq!(validate_required_string("  rust ", "기술 이름")?, "rust");
/// assert!(validate_required_string("   ", "기술 이름").is_err());
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(format!(
            "{}은(는) 비어 있을 수 없습니다",
            field_name
        )));
    }
    Ok(trimmed.to_string())
}

/// `None`, 빈 문자열, 공백 문자열은 모두 `None`이 됩니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 선택 필드용 serde deserializer
///
/// `#[serde(default, deserialize_with = "deserialize_optional_string")]`와 함께 사용합니다.
/// `null`, `""`, `"   "`는 `None`으로, 나머지는 trim된 `Some`으로 역직렬화됩니다.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}
