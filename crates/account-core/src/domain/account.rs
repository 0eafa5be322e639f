//! 계정 레코드.
//!
//! accounts 테이블의 도메인 표현과 생성/수정 입력 타입을 정의합니다.

use serde::Serialize;

use super::Role;

/// 계정 레코드.
///
/// `password_hash`는 직렬화 대상에서 제외됩니다. 평문 비밀번호는
/// 이 타입 어디에도 존재하지 않습니다.
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    /// 고유 숫자 id
    pub id: i64,
    /// 이메일 (유니크, 대소문자 구분)
    pub email: String,
    /// PHC 형식 비밀번호 해시
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// 역할
    pub role: Role,
}

/// 새 계정 삽입 입력.
///
/// 비밀번호는 이미 해싱된 상태로 전달되어야 합니다.
#[derive(Debug, Clone)]
pub struct NewAccountRecord {
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// 계정 부분 수정 입력.
///
/// `None`인 필드는 변경하지 않습니다. `password_hash`는 해싱 완료된
/// 값이어야 합니다.
#[derive(Debug, Clone, Default)]
pub struct AccountChanges {
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<Role>,
}

impl AccountChanges {
    /// 변경할 필드가 하나도 없는지 확인.
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password_hash.is_none() && self.role.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_serialization_omits_hash() {
        let account = Account {
            id: 1,
            email: "a@example.com".to_string(),
            password_hash: "$argon2id$v=19$secret".to_string(),
            role: Role::User,
        };

        let json = serde_json::to_string(&account).unwrap();
        assert!(json.contains("a@example.com"));
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("argon2id"));
    }

    #[test]
    fn test_account_changes_is_empty() {
        assert!(AccountChanges::default().is_empty());

        let changes = AccountChanges {
            role: Some(Role::Admin),
            ..Default::default()
        };
        assert!(!changes.is_empty());
    }
}
