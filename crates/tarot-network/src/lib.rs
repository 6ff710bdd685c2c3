//! # tarot-network
//!
//! 썸네일 다운로드와 번들 에셋 로딩 어댑터.
//! `ThumbnailFetcher` / `AssetSource` 포트를 구현한다.
//!
//! ## 사용 예시
//!
//! ```rust,ignore
//! use tarot_network::http_client::HttpThumbnailFetcher;
//! use tarot_network::thumbnail::thumbnail_url_for_id;
//!
//! let fetcher = HttpThumbnailFetcher::from_config(&config.network)?;
//! let bytes = fetcher.fetch(&thumbnail_url_for_id(&config.network.thumbnail_url_template, "abc")).await?;
//! ```

pub mod assets;
pub mod http_client;
pub mod thumbnail;
