//! HTTP 썸네일 다운로더.
//!
//! `ThumbnailFetcher` 포트 구현. 재시도 없음 — 실패는 해당 카드에만 영향을 준다.

use async_trait::async_trait;
use std::time::Duration;
use tarot_core::config::NetworkConfig;
use tarot_core::error::CoreError;
use tarot_core::ports::fetcher::ThumbnailFetcher;
use tracing::debug;

/// reqwest 기반 썸네일 다운로더
pub struct HttpThumbnailFetcher {
    client: reqwest::Client,
}

impl HttpThumbnailFetcher {
    /// 새 다운로더 생성
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, CoreError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| CoreError::Network(format!("HTTP 클라이언트 빌드 실패: {}", e)))?;

        Ok(Self { client })
    }

    /// 네트워크 설정으로 생성
    pub fn from_config(config: &NetworkConfig) -> Result<Self, CoreError> {
        Self::new(
            Duration::from_millis(config.request_timeout_ms),
            &config.user_agent,
        )
    }
}

#[async_trait]
impl ThumbnailFetcher for HttpThumbnailFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, CoreError> {
        let parsed = url::Url::parse(url)
            .map_err(|e| CoreError::validation("thumbnail_url", format!("{url}: {e}")))?;

        let resp = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| CoreError::Network(format!("썸네일 요청 실패: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CoreError::Network(format!(
                "썸네일 응답 에러 ({status}): {url}"
            )));
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| CoreError::Network(format!("썸네일 본문 읽기 실패: {e}")))?;

        debug!("썸네일 수신: {url} ({} bytes)", bytes.len());
        Ok(bytes.to_vec())
    }
}
