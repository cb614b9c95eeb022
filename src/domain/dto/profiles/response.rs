use serde::{Deserialize, Serialize};

use crate::domain::dto::users::response::UserResponse;
use crate::domain::entities::profiles::{Contact, Education, SocialLink, Socials, Skills};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SocialsResponse {
    pub links: Vec<SocialLink>,
}

impl From<Socials> for SocialsResponse {
    fn from(socials: Socials) -> Self {
        Self {
            links: socials.links,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactResponse {
    pub phone: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub public_email: Option<String>,
}

impl From<Contact> for ContactResponse {
    fn from(contact: Contact) -> Self {
        Self {
            phone: contact.phone,
            website: contact.website,
            location: contact.location,
            public_email: contact.public_email,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EducationResponse {
    pub id: String,
    pub level: String,
    pub school_name: String,
    pub subject: String,
    pub from_year: i32,
    pub to_year: Option<i32>,
}

impl From<Education> for EducationResponse {
    fn from(education: Education) -> Self {
        Self {
            id: education.id.map(|id| id.to_hex()).unwrap_or_default(),
            level: education.level,
            school_name: education.school_name,
            subject: education.subject,
            from_year: education.from_year,
            to_year: education.to_year,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillsResponse {
    pub skills: Vec<String>,
}

impl From<Skills> for SkillsResponse {
    fn from(skills: Skills) -> Self {
        Self {
            skills: skills.skills,
        }
    }
}

/// 공개 프로필 (비로그인 조회용 집계 응답)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicProfileResponse {
    pub user: UserResponse,
    pub socials: Vec<SocialLink>,
    pub education: Vec<EducationResponse>,
    pub skills: Vec<String>,
}
