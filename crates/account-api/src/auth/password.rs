//! 비밀번호 해싱.
//!
//! Argon2id 기반 단방향 해싱 및 검증을 제공합니다. 평문 비밀번호는
//! 이 모듈의 함수 인자로만 존재하며 로그나 저장소에 남지 않습니다.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// 비밀번호 처리 에러.
#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("비밀번호 해싱 실패")]
    HashingFailed,
    /// 비밀번호 불일치. 저장된 해시의 형식 오류도 이 에러로 수렴하여
    /// 호출자가 두 경우를 구분할 수 없습니다.
    #[error("비밀번호가 일치하지 않습니다")]
    VerificationFailed,
}

/// 비밀번호 해싱.
///
/// 호출마다 새 솔트를 생성하므로 같은 평문도 매번 다른 해시가 됩니다.
///
/// # Returns
///
/// 솔트를 포함한 PHC 형식 문자열 (`$argon2id$v=19$...`)
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| PasswordError::HashingFailed)?;

    Ok(hash.to_string())
}

/// 비밀번호 검증.
///
/// 저장된 해시와 입력된 비밀번호를 비교합니다. 불일치와 해시 형식
/// 오류 모두 `VerificationFailed`입니다.
pub fn verify_password(password: &str, hash: &str) -> Result<(), PasswordError> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|_| PasswordError::VerificationFailed)?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| PasswordError::VerificationFailed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("correct horse battery").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("correct horse battery", &hash).is_ok());
        assert!(verify_password("wrong horse battery", &hash).is_err());
    }

    #[test]
    fn test_same_password_different_hashes() {
        let hash1 = hash_password("pw1").unwrap();
        let hash2 = hash_password("pw1").unwrap();

        // 솔트가 매번 달라지므로 해시도 달라진다
        assert_ne!(hash1, hash2);
        assert!(verify_password("pw1", &hash1).is_ok());
        assert!(verify_password("pw1", &hash2).is_ok());
    }

    #[test]
    fn test_malformed_hash_fails_like_mismatch() {
        let malformed = verify_password("pw1", "definitely-not-a-phc-string");
        let hash = hash_password("pw1").unwrap();
        let mismatch = verify_password("pw2", &hash);

        assert!(matches!(malformed, Err(PasswordError::VerificationFailed)));
        assert!(matches!(mismatch, Err(PasswordError::VerificationFailed)));
    }

    #[test]
    fn test_empty_password_still_hashes() {
        // 빈 비밀번호 차단은 입력 경계의 책임이다
        let hash = hash_password("").unwrap();
        assert!(verify_password("", &hash).is_ok());
        assert!(verify_password("x", &hash).is_err());
    }
}
