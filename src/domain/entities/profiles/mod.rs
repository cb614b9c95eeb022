//! 프로필 하위 문서
//!
//! 모두 `user_id`로 소유 사용자를 참조하며 독립적인 생명주기가 없습니다.
//! `Socials`, `Contact`는 사용자당 1개, `Education`은 여러 개,
//! `Skills`는 사용자당 1개 문서 안의 집합입니다.

pub mod contact;
pub mod education;
pub mod skills;
pub mod socials;

pub use contact::Contact;
pub use education::Education;
pub use skills::Skills;
pub use socials::{SocialLink, Socials};
