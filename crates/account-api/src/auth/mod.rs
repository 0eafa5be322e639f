//! 인증 및 권한 부여.
//!
//! JWT 발급/검증, Argon2 비밀번호 해싱, Axum 인증 추출기를 제공합니다.
//! 역할별 접근 정책은 [`account_core::policy`]에 있습니다.
//!
//! # 구성 요소
//!
//! - [`TokenIssuer`]: 서명 키와 만료 시간을 보관하는 토큰 발급기/검증기
//! - [`Claims`]: JWT 페이로드 구조체
//! - [`CurrentAccount`]: 보호된 핸들러용 인증 계정 추출기
//! - [`hash_password`] / [`verify_password`]: 비밀번호 해싱

mod extract;
mod jwt;
mod password;

pub use extract::{AuthRejection, CurrentAccount};
pub use jwt::{Claims, TokenError, TokenIssuer};
pub use password::{hash_password, verify_password, PasswordError};
