use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::entities::profiles::SocialLink;
use crate::utils::string_utils::deserialize_optional_string;

/// 아바타 변경 요청 (`null` 또는 빈 값이면 아바타 제거)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAvatarRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 2048, message = "아바타 참조가 너무 깁니다"))]
    pub avatar: Option<String>,
}

/// 소셜 링크 항목
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SocialLinkRequest {
    #[validate(length(min = 1, max = 32, message = "플랫폼 이름은 1-32자 사이여야 합니다"))]
    pub platform: String,

    /// 비어 있으면 해당 플랫폼 삭제
    #[serde(default)]
    #[validate(length(max = 2048, message = "URL이 너무 깁니다"))]
    pub url: String,
}

/// 소셜 링크 전체 교체 요청
#[derive(Debug, Deserialize, Validate)]
pub struct ReplaceSocialsRequest {
    #[serde(default)]
    #[validate(nested)]
    pub links: Vec<SocialLinkRequest>,
}

impl ReplaceSocialsRequest {
    pub fn into_links(self) -> Vec<SocialLink> {
        self.links
            .into_iter()
            .map(|l| SocialLink {
                platform: l.platform,
                url: l.url,
            })
            .collect()
    }
}

/// 연락처 전체 교체 요청
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ReplaceContactRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 32, message = "전화번호가 너무 깁니다"))]
    pub phone: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(url(message = "유효한 URL을 입력해주세요"))]
    pub website: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 100, message = "위치는 100자 이하여야 합니다"))]
    pub location: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub public_email: Option<String>,
}

/// 학력 항목 요청
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_year_order"))]
pub struct EducationRequest {
    #[validate(length(min = 1, max = 50, message = "학력 구분은 1-50자 사이여야 합니다"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub level: String,

    #[validate(length(min = 1, max = 100, message = "학교 이름은 1-100자 사이여야 합니다"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub school_name: String,

    #[serde(default)]
    #[validate(length(max = 100, message = "전공은 100자 이하여야 합니다"))]
    pub subject: String,

    #[validate(range(min = 1900, max = 2100, message = "시작 연도가 올바르지 않습니다"))]
    pub from_year: i32,

    #[serde(default)]
    #[validate(range(min = 1900, max = 2100, message = "종료 연도가 올바르지 않습니다"))]
    pub to_year: Option<i32>,
}

/// 공백만 있는 값은 trim 후 빈 문자열이 되므로 거부합니다.
fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank")
            .with_message("공백만으로 이루어질 수 없습니다".into()));
    }
    Ok(())
}

fn validate_year_order(req: &EducationRequest) -> Result<(), ValidationError> {
    if let Some(to) = req.to_year {
        if req.from_year > to {
            return Err(ValidationError::new("invalid_year_range")
                .with_message("종료 연도는 시작 연도보다 빠를 수 없습니다".into()));
        }
    }
    Ok(())
}

/// 학력 목록 전체 교체 요청
#[derive(Debug, Deserialize, Validate)]
pub struct ReplaceEducationRequest {
    #[serde(default)]
    #[validate(nested)]
    pub education: Vec<EducationRequest>,
}

/// 기술 추가 요청
#[derive(Debug, Deserialize, Validate)]
pub struct AddSkillRequest {
    #[validate(length(min = 1, max = 50, message = "기술 이름은 1-50자 사이여야 합니다"))]
    pub skill: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_education_year_order_is_validated() {
        let valid: EducationRequest = serde_json::from_str(
            r#"{"level":"Bachelor","school_name":"KAIST","subject":"CS","from_year":2015,"to_year":2019}"#,
        )
        .expect("json");
        assert!(valid.validate().is_ok());

        let reversed = EducationRequest {
            to_year: Some(2010),
            ..valid
        };
        assert!(reversed.validate().is_err());
    }

    #[test]
    fn test_replace_education_validates_every_entry() {
        let req: ReplaceEducationRequest = serde_json::from_str(
            r#"{"education":[
                {"level":"High School","school_name":"Seoul HS","from_year":2008,"to_year":2011},
                {"level":"","school_name":"KAIST","from_year":2012}
            ]}"#,
        )
        .expect("json");
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_whitespace_only_education_fields_are_rejected() {
        let blank_level: EducationRequest = serde_json::from_str(
            r#"{"level":"   ","school_name":"KAIST","from_year":2015}"#,
        )
        .expect("json");
        assert!(blank_level.validate().is_err());

        let blank_school: EducationRequest = serde_json::from_str(
            r#"{"level":"Bachelor","school_name":" \t ","from_year":2015}"#,
        )
        .expect("json");
        assert!(blank_school.validate().is_err());

        let replace: ReplaceEducationRequest = serde_json::from_str(
            r#"{"education":[{"level":"  ","school_name":"  ","from_year":2015}]}"#,
        )
        .expect("json");
        assert!(replace.validate().is_err());
    }

    #[test]
    fn test_contact_fields_are_optional_and_validated() {
        let empty: ReplaceContactRequest = serde_json::from_str("{}").expect("json");
        assert!(empty.validate().is_ok());
        assert!(empty.phone.is_none());

        let bad = ReplaceContactRequest {
            public_email: Some("nope".to_string()),
            ..Default::default()
        };
        assert!(bad.validate().is_err());
    }
}
