//! JWT 토큰 발급/검증.
//!
//! HS256 서명 토큰을 발급하고 검증합니다. 서명 시크릿은 프로세스 시작
//! 시 설정에서 한 번 주입되며 런타임에 교체되지 않습니다. 시크릿을
//! 교체하면 발급된 모든 토큰이 무효화됩니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use account_core::AuthConfig;

/// JWT 페이로드.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - 계정 이메일
    pub sub: String,
    /// Issued At (Unix timestamp)
    pub iat: i64,
    /// Expiration (Unix timestamp)
    pub exp: i64,
    /// JWT ID - 토큰 고유 식별자
    pub jti: String,
}

impl Claims {
    /// 새 Claims 생성.
    ///
    /// # Arguments
    ///
    /// * `subject` - 계정 이메일
    /// * `ttl_minutes` - 만료 시간 (분)
    pub fn new(subject: impl Into<String>, ttl_minutes: i64) -> Self {
        let now = Utc::now();
        Self {
            sub: subject.into(),
            iat: now.timestamp(),
            exp: (now + Duration::minutes(ttl_minutes)).timestamp(),
            jti: uuid::Uuid::new_v4().to_string(),
        }
    }
}

/// 토큰 에러.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// 검증 실패. 서명 불일치, 형식 오류, sub 누락, 만료를 구분하지
    /// 않습니다. 실패 원인은 debug 로그로만 남습니다.
    #[error("유효하지 않은 토큰")]
    Invalid,
    /// 발급 실패 (내부 에러)
    #[error("토큰 인코딩 실패: {0}")]
    Encoding(jsonwebtoken::errors::Error),
}

/// 토큰 발급기/검증기.
///
/// 프로세스 전역 서명 키와 만료 시간을 보관합니다. 검증은 부수 효과가
/// 없는 순수 계산이므로 어느 태스크에서나 호출할 수 있습니다.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_minutes: i64,
}

impl TokenIssuer {
    /// 시크릿과 만료 시간으로 발급기 생성.
    pub fn new(secret: &SecretString, ttl_minutes: i64) -> Self {
        let bytes = secret.expose_secret().as_bytes();
        let mut validation = Validation::default();
        validation.validate_exp = true;

        Self {
            encoding_key: EncodingKey::from_secret(bytes),
            decoding_key: DecodingKey::from_secret(bytes),
            validation,
            ttl_minutes,
        }
    }

    /// 인증 설정에서 발급기 생성.
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(&config.jwt_secret, config.access_token_ttl_minutes)
    }

    /// 토큰 유효 시간 (초).
    pub fn ttl_secs(&self) -> i64 {
        self.ttl_minutes * 60
    }

    /// subject에 대한 토큰 발급.
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        let claims = Claims::new(subject, self.ttl_minutes);
        encode(&Header::default(), &claims, &self.encoding_key).map_err(TokenError::Encoding)
    }

    /// 토큰 검증 후 subject 반환.
    ///
    /// 모든 실패가 [`TokenError::Invalid`] 하나로 수렴합니다.
    pub fn verify(&self, token: &str) -> Result<String, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            tracing::debug!(kind = ?e.kind(), "토큰 검증 실패");
            TokenError::Invalid
        })?;

        if data.claims.sub.is_empty() {
            return Err(TokenError::Invalid);
        }

        Ok(data.claims.sub)
    }
}
