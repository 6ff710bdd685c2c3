//! 썸네일 다운로드 포트.
//!
//! 구현: `tarot-network` crate (reqwest)

use async_trait::async_trait;

use crate::error::CoreError;

/// 썸네일 바이트 다운로더 (HTTP GET)
#[async_trait]
pub trait ThumbnailFetcher: Send + Sync {
    /// URL의 원시 바이트 반환. 네트워크 실패는 `CoreError::Network`.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, CoreError>;
}
