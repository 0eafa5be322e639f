//! 비즈니스 로직 서비스.
//!
//! 저장소, 접근 정책, 해셔, 토큰 발급기를 조합하는 계층입니다. 전송
//! 계층(HTTP)을 알지 못하며 요청 간 상태를 갖지 않습니다.

pub mod accounts;

pub use accounts::{AccountService, AccountUpdate, IssuedToken};
