//! # Observability 基盤
//!
//! トレーシング初期化とログ出力形式の設定、Request ID の生成を提供する。
//! 環境変数 `LOG_FORMAT` による JSON / Pretty 出力の切り替えに対応する。
//!
//! ## Request ID
//!
//! `tower-http` の `SetRequestIdLayer` に [`MakeRequestUuidV7`] を渡すと、
//! クライアントが `X-Request-Id` を送らなかったリクエストに UUID v7 を割り当てる。
//! [`make_request_span`] はその値をリクエストスパンに載せ、
//! ハンドラ内のすべてのログに `request_id` が付く。

use http::{HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Request ID のヘッダー名
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// ログ出力形式
///
/// 環境変数 `LOG_FORMAT` で切り替える。
/// 値が未設定または不正な場合は [`Pretty`](LogFormat::Pretty) にフォールバックする。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
   /// JSON 形式（本番環境向け）
   Json,
   /// 人間が読みやすい形式（開発環境向け）
   #[default]
   Pretty,
}

impl LogFormat {
   /// 文字列からログ形式をパースする
   ///
   /// 不正な値の場合は [`Pretty`](LogFormat::Pretty) にフォールバックし、
   /// stderr に警告を出力する（トレーシング初期化前に呼ばれるため）。
   pub fn parse(s: &str) -> Self {
      match s {
         "json" => Self::Json,
         "pretty" => Self::Pretty,
         other => {
            eprintln!("WARNING: unknown LOG_FORMAT={other:?}, falling back to pretty");
            Self::Pretty
         }
      }
   }

   /// 環境変数 `LOG_FORMAT` から読み取る
   pub fn from_env() -> Self {
      match std::env::var("LOG_FORMAT") {
         Ok(val) => Self::parse(&val),
         Err(_) => Self::default(),
      }
   }
}

/// トレーシング初期化設定
#[derive(Debug, Clone)]
pub struct TracingConfig {
   /// サービス名（起動ログのスパンに出力）
   pub service_name: String,
   /// ログ出力形式
   pub log_format:   LogFormat,
}

impl TracingConfig {
   pub fn new(service_name: impl Into<String>, log_format: LogFormat) -> Self {
      Self {
         service_name: service_name.into(),
         log_format,
      }
   }

   /// `LOG_FORMAT` 環境変数で出力形式を決定する
   pub fn from_env(service_name: impl Into<String>) -> Self {
      Self::new(service_name, LogFormat::from_env())
   }
}

/// トレーシングを初期化する
///
/// `RUST_LOG` 環境変数でログレベルを制御可能。
/// 未設定の場合は `"info,tabgen=debug"` をデフォルトとする。
///
/// 戻り値のスパンはサービス名を持つ。サーバー本体の future を
/// `instrument` すると、起動・停止ログにサービス名が付く。
pub fn init_tracing(config: &TracingConfig) -> tracing::Span {
   use tracing_subscriber::{Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

   let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
      .unwrap_or_else(|_| "info,tabgen=debug".into());

   let fmt_layer = match config.log_format {
      LogFormat::Json => tracing_subscriber::fmt::layer()
         .json()
         .flatten_event(true)
         .with_target(true)
         .with_current_span(true)
         .with_span_list(false)
         .boxed(),
      LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
   };

   tracing_subscriber::registry()
      .with(env_filter)
      .with(fmt_layer)
      .init();

   tracing::info_span!("app", service = %config.service_name)
}

/// UUID v7 で Request ID を生成する
///
/// UUID v7 は時刻順にソート可能なため、ログの時系列分析がしやすい。
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
   fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
      let value = HeaderValue::from_str(&Uuid::now_v7().to_string()).ok()?;
      Some(RequestId::new(value))
   }
}

/// リクエストごとのトレーシングスパンを作る
///
/// `TraceLayer::make_span_with` に渡す。`SetRequestIdLayer` より内側に置くこと
/// （外側だと `x-request-id` がまだ設定されていない）。
pub fn make_request_span<B>(request: &Request<B>) -> tracing::Span {
   let request_id = request
      .headers()
      .get(REQUEST_ID_HEADER)
      .and_then(|value| value.to_str().ok())
      .unwrap_or("-");

   tracing::info_span!(
      "request",
      method = %request.method(),
      uri = %request.uri(),
      request_id = %request_id
   )
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   // ===== LogFormat::parse テスト =====

   #[test]
   fn test_parse_jsonでjsonを返す() {
      assert_eq!(LogFormat::parse("json"), LogFormat::Json);
   }

   #[test]
   fn test_parse_prettyでprettyを返す() {
      assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
   }

   #[test]
   fn test_parse_不正な値でprettyにフォールバックする() {
      assert_eq!(LogFormat::parse("unknown"), LogFormat::Pretty);
      assert_eq!(LogFormat::parse(""), LogFormat::Pretty);
      assert_eq!(LogFormat::parse("JSON"), LogFormat::Pretty);
   }

   #[test]
   fn test_defaultでprettyを返す() {
      assert_eq!(LogFormat::default(), LogFormat::Pretty);
   }

   #[test]
   fn test_newでフィールドが正しく設定される() {
      let config = TracingConfig::new("web", LogFormat::Json);

      assert_eq!(config.service_name, "web");
      assert_eq!(config.log_format, LogFormat::Json);
   }

   // ===== MakeRequestUuidV7 テスト =====

   #[test]
   fn test_request_idはuuid_v7形式で生成される() {
      let request = Request::builder().uri("/").body(()).unwrap();

      let request_id = MakeRequestUuidV7.make_request_id(&request).unwrap();
      let value = request_id.header_value().to_str().unwrap();
      let uuid = Uuid::parse_str(value).unwrap();

      assert_eq!(uuid.get_version(), Some(uuid::Version::SortRand));
   }

   #[test]
   fn test_request_idは毎回異なる() {
      let request = Request::builder().uri("/").body(()).unwrap();
      let mut maker = MakeRequestUuidV7;

      let first = maker.make_request_id(&request).unwrap();
      let second = maker.make_request_id(&request).unwrap();

      assert_ne!(first.header_value(), second.header_value());
   }
}
