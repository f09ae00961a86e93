//! # HTTP エラーハンドリング
//!
//! ディスパッチ層のエラー定義と、axum レスポンスへの変換を行う。
//!
//! ## 設計方針
//!
//! - **RFC 7807 準拠**: Problem Details for HTTP APIs 仕様に従う
//! - **thiserror**: ドメインのエラーを `#[from]` で取り込み、`?` で伝播できるようにする
//! - **IntoResponse 実装**: axum との統合による自動レスポンス変換
//!
//! ## エラーの発生源
//!
//! ```text
//! パスがどのルートにも一致しない  → AppError::NotFound  → 404
//! テンプレートの欠落・描画失敗    → AppError::Render    → 500
//! ```
//!
//! ページハンドラ自身はエラーを作らない。どちらもコラボレーター
//! （ルーター、レンダラー）から伝播したものをここで HTTP に写す。

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use serde::Serialize;
use tabgen_domain::render::RenderError;
use thiserror::Error;

/// ディスパッチ層で発生するエラー
#[derive(Debug, Error)]
pub enum AppError {
   /// リクエストパスに一致するルートがない（404 Not Found）
   #[error("ページが見つかりません")]
   NotFound,

   /// テンプレートの描画に失敗した（500 Internal Server Error）
   #[error(transparent)]
   Render(#[from] RenderError),
}

/// RFC 7807 準拠のエラーレスポンス
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
   /// エラーの種類を識別する URI
   #[serde(rename = "type")]
   pub error_type: String,
   /// エラーの概要
   pub title:      String,
   /// HTTP ステータスコード
   pub status:     u16,
}

impl ErrorResponse {
   fn new(status: StatusCode, title: &str) -> Self {
      Self {
         error_type: "about:blank".to_string(),
         title:      title.to_string(),
         status:     status.as_u16(),
      }
   }
}

impl IntoResponse for AppError {
   /// | AppError | HTTP Status |
   /// |----------|-------------|
   /// | NotFound | 404 |
   /// | Render | 500 |
   fn into_response(self) -> Response {
      let (status, title) = match self {
         AppError::NotFound => (StatusCode::NOT_FOUND, "ページが見つかりません"),
         AppError::Render(err) => {
            // 描画エラーの詳細はログにのみ出力（テンプレート構成を外部に見せない）
            tracing::error!(error = %err, "テンプレートの描画に失敗しました");
            (StatusCode::INTERNAL_SERVER_ERROR, "内部サーバーエラー")
         }
      };

      (status, Json(ErrorResponse::new(status, title))).into_response()
   }
}
