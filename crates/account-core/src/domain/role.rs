//! 계정 역할.
//!
//! 시스템에서 계정의 신뢰 등급을 정의합니다. 역할은 닫힌 열거형이며
//! 서열 비교가 아니라 작업별 허용 집합으로만 사용됩니다
//! ([`crate::policy`] 참고).

use serde::{Deserialize, Serialize};

/// 계정 역할.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// 관리자 - 계정 수정/삭제 및 목록 조회
    Admin,
    /// 운영진 - 계정 목록 조회만 가능
    Management,
    /// 일반 사용자
    User,
}

impl Role {
    /// 저장소 표현 문자열로 변환.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Management => "management",
            Self::User => "user",
        }
    }

    /// 문자열에서 역할 파싱.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "management" => Some(Role::Management),
            "user" => Some(Role::User),
            _ => None,
        }
    }
}

impl Default for Role {
    /// 역할을 지정하지 않고 생성된 계정은 일반 사용자입니다.
    fn default() -> Self {
        Self::User
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
