//! # ヘルスチェックハンドラ
//!
//! ロードバランサーやコンテナオーケストレーターの liveness probe 用。
//!
//! ```text
//! GET /health
//! {"status":"healthy","version":"0.1.0"}
//! ```
//!
//! テンプレートの有無は確認しない。起動できた時点で描画の準備は終わっている。

use axum::Json;
use tabgen_shared::HealthResponse;

/// ヘルスチェックエンドポイント
///
/// 常に 200 OK を返す。
pub async fn health_check() -> Json<HealthResponse> {
   Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}
