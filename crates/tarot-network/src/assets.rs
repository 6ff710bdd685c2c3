//! 번들 에셋 소스.
//!
//! 확장 로컬 리소스 디렉토리에서 스타일 참조 이미지와 프레임 이미지를 읽는다.

use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use tarot_core::error::CoreError;
use tarot_core::ports::assets::AssetSource;
use tracing::debug;

/// 디렉토리 기반 에셋 소스
#[derive(Debug, Clone)]
pub struct DirAssetSource {
    root: PathBuf,
    /// 호스트 페이지에서 참조할 URL 접두사 (예: `chrome-extension://<id>/`)
    url_base: String,
}

impl DirAssetSource {
    pub fn new(root: impl Into<PathBuf>, url_base: impl Into<String>) -> Self {
        let mut url_base = url_base.into();
        if !url_base.is_empty() && !url_base.ends_with('/') {
            url_base.push('/');
        }
        Self {
            root: root.into(),
            url_base,
        }
    }

    /// 에셋 이름을 루트 기준 경로로 변환 (상위 디렉토리 탈출 차단)
    fn resolve(&self, name: &str) -> Result<PathBuf, CoreError> {
        let relative = Path::new(name);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)));
        if name.is_empty() || escapes {
            return Err(CoreError::validation(
                "asset",
                format!("허용되지 않는 에셋 이름: {name}"),
            ));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl AssetSource for DirAssetSource {
    async fn load(&self, name: &str) -> Result<Vec<u8>, CoreError> {
        let path = self.resolve(name)?;
        let bytes = tokio::fs::read(&path).await?;
        debug!("에셋 로드: {} ({} bytes)", path.display(), bytes.len());
        Ok(bytes)
    }

    fn url_for(&self, name: &str) -> String {
        format!("{}{}", self.url_base, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_reads_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("tarot_frame.png"), b"frame").unwrap();

        let source = DirAssetSource::new(dir.path(), "chrome-extension://abc");
        assert_eq!(source.load("tarot_frame.png").await.unwrap(), b"frame");
    }

    #[tokio::test]
    async fn missing_asset_is_io_error() {
        let dir = TempDir::new().unwrap();
        let source = DirAssetSource::new(dir.path(), "");
        let result = source.load("tarot3_thesun.jpg").await;
        assert!(matches!(result, Err(CoreError::Io(_))));
    }

    #[tokio::test]
    async fn parent_traversal_is_rejected() {
        let dir = TempDir::new().unwrap();
        let source = DirAssetSource::new(dir.path(), "");
        for name in ["../secret", "/etc/passwd", ""] {
            let result = source.load(name).await;
            assert!(
                matches!(result, Err(CoreError::Validation { .. })),
                "{name} 는 거부되어야 함"
            );
        }
    }

    #[test]
    fn url_for_joins_base() {
        let source = DirAssetSource::new("/tmp", "chrome-extension://abc");
        assert_eq!(
            source.url_for("tarot_frame.png"),
            "chrome-extension://abc/tarot_frame.png"
        );
        let bare = DirAssetSource::new("/tmp", "");
        assert_eq!(bare.url_for("tarot_frame.png"), "tarot_frame.png");
    }
}
