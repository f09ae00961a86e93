//! # TabGen 共有ユーティリティ
//!
//! ビジネスロジックを含まない横断的なユーティリティを提供する。
//!
//! - [`health`] - ヘルスチェックのレスポンス型
//! - [`observability`] - トレーシング初期化と Request ID

pub mod health;
pub mod observability;

pub use health::HealthResponse;
