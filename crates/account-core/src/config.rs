//! 설정 관리.
//!
//! 기본값 → 선택적 TOML 파일 → `ACCOUNT__` 접두사 환경 변수 순서로
//! 설정을 로드합니다. `DATABASE_URL`, `JWT_SECRET`, `PORT` 같은 관례적
//! 환경 변수도 마지막에 오버라이드로 적용됩니다.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;

/// 개발 환경용 기본 서명 시크릿. 운영 환경에서는 반드시 교체해야 합니다.
const DEV_JWT_SECRET: &str = "dev-secret-key-change-in-production";

/// 애플리케이션 설정.
#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// 서버 설정
    pub server: ServerConfig,
    /// 데이터베이스 설정
    pub database: DatabaseConfig,
    /// 인증 설정
    pub auth: AuthConfig,
    /// 로깅 설정
    pub logging: LoggingConfig,
}

/// 서버 설정.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 바인딩할 호스트
    pub host: String,
    /// 리스닝할 포트
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

impl ServerConfig {
    /// 소켓 주소 반환.
    ///
    /// # Errors
    /// `host:port` 형식이 유효하지 않으면 `AddrParseError`를 반환합니다.
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

/// 데이터베이스 설정.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Postgres 접속 URL
    pub url: String,
    /// 최대 연결 수
    pub max_connections: u32,
    /// 커넥션 획득 타임아웃 (초)
    pub acquire_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "postgres://localhost:5432/accounts".to_string(),
            max_connections: 10,
            acquire_timeout_secs: 10,
        }
    }
}

/// 인증 설정.
#[derive(Debug, Deserialize)]
pub struct AuthConfig {
    /// JWT 서명 시크릿. 프로세스 시작 시 한 번 로드되며 런타임에
    /// 교체되지 않습니다. 교체하면 발급된 모든 토큰이 무효화됩니다.
    pub jwt_secret: SecretString,
    /// access token 유효 시간 (분)
    pub access_token_ttl_minutes: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: SecretString::new(DEV_JWT_SECRET.into()),
            access_token_ttl_minutes: 30,
        }
    }
}

impl AuthConfig {
    /// 기본 개발용 시크릿을 그대로 쓰고 있는지 확인.
    pub fn is_dev_secret(&self) -> bool {
        self.jwt_secret.expose_secret() == DEV_JWT_SECRET
    }
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl AppConfig {
    /// 파일(선택)과 환경 변수에서 설정을 로드합니다.
    pub fn load<P: AsRef<Path>>(path: Option<P>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            // 기본값으로 시작
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8000)?
            .set_default("database.url", "postgres://localhost:5432/accounts")?
            .set_default("database.max_connections", 10)?
            .set_default("database.acquire_timeout_secs", 10)?
            .set_default("auth.jwt_secret", DEV_JWT_SECRET)?
            .set_default("auth.access_token_ttl_minutes", 30)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?;

        // 파일에서 로드 (있는 경우)
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path.as_ref()));
        }

        // ACCOUNT__ 접두사 환경 변수로 오버라이드
        let mut builder = builder.add_source(
            config::Environment::with_prefix("ACCOUNT")
                .separator("__")
                .try_parsing(true),
        );

        // 관례적 환경 변수는 접두사 형식보다 우선한다
        if let Ok(url) = std::env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", url)?;
        }
        if let Ok(secret) = std::env::var("JWT_SECRET") {
            builder = builder.set_override("auth.jwt_secret", secret)?;
        }
        if let Ok(port) = std::env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// 기본 경로에서 설정을 로드합니다.
    ///
    /// `config/default.toml`이 있으면 함께 읽고, 없으면 기본값과 환경
    /// 변수만 사용합니다.
    pub fn load_default() -> Result<Self, config::ConfigError> {
        let default_path = Path::new("config/default.toml");
        if default_path.exists() {
            Self::load(Some(default_path))
        } else {
            Self::load(None::<&Path>)
        }
    }
}
