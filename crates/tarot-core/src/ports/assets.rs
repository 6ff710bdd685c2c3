//! 번들 에셋 포트.
//!
//! 스타일 참조 이미지와 장식 프레임 이미지 같은 확장 로컬 리소스를 읽는다.

use async_trait::async_trait;

use crate::error::CoreError;

/// 번들 에셋 소스
#[async_trait]
pub trait AssetSource: Send + Sync {
    /// 에셋 바이트 로드
    async fn load(&self, name: &str) -> Result<Vec<u8>, CoreError>;

    /// 호스트 페이지에서 참조할 에셋 URL
    fn url_for(&self, name: &str) -> String;
}
