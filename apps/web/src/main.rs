//! # TabGen Web サーバー
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `WEB_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `WEB_PORT` | No | ポート番号（デフォルト: `8000`） |
//! | `TEMPLATE_DIR` | No | テンプレートディレクトリ（未指定時は埋め込み） |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env ファイルを使用、テンプレートはディスクから読む）
//! TEMPLATE_DIR=templates cargo run -p tabgen-web
//!
//! # 本番環境
//! WEB_PORT=80 LOG_FORMAT=json cargo run -p tabgen-web --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context as _;
use tabgen_domain::{render::TemplateRenderer, route_table::RouteTable};
use tabgen_shared::observability::{TracingConfig, init_tracing};
use tabgen_web::{
   app_builder::{build_app, load_renderer},
   config::AppConfig,
};
use tokio::net::TcpListener;
use tracing::Instrument as _;

/// Web サーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. ルートテーブルとレンダラーの構築
/// 5. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // 本番環境では .env ファイルは使用せず、環境変数を直接設定する
   dotenvy::dotenv().ok();

   let span = init_tracing(&TracingConfig::from_env("tabgen-web"));

   run().instrument(span).await
}

async fn run() -> anyhow::Result<()> {
   let config = AppConfig::from_env().context("設定の読み込みに失敗しました")?;

   tracing::info!(
      environment = %config.environment,
      "Web サーバーを起動します: {}:{}",
      config.server.host,
      config.server.port
   );

   // ルートテーブルはここで一度だけ構築し、以降は読み取り専用で共有する
   let table = Arc::new(RouteTable::app());

   let renderer = load_renderer(&config.templates, table.clone())?;

   let renderer: Arc<dyn TemplateRenderer> = Arc::new(renderer);
   let app = build_app(&table, renderer);

   let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
      .parse()
      .context("アドレスのパースに失敗しました")?;

   let listener = TcpListener::bind(addr).await?;
   tracing::info!("Web サーバーが起動しました: {}", addr);

   axum::serve(listener, app)
      .with_graceful_shutdown(shutdown_signal())
      .await?;

   tracing::info!("Web サーバーを停止しました");
   Ok(())
}

/// Ctrl-C または SIGTERM を待つ
async fn shutdown_signal() {
   let ctrl_c = async {
      if let Err(e) = tokio::signal::ctrl_c().await {
         tracing::error!("Ctrl-C ハンドラの登録に失敗しました: {e}");
         std::future::pending::<()>().await;
      }
   };

   #[cfg(unix)]
   let terminate = async {
      match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
         Ok(mut signal) => {
            signal.recv().await;
         }
         Err(e) => {
            tracing::error!("SIGTERM ハンドラの登録に失敗しました: {e}");
            std::future::pending::<()>().await;
         }
      }
   };

   #[cfg(not(unix))]
   let terminate = std::future::pending::<()>();

   tokio::select! {
      () = ctrl_c => {},
      () = terminate => {},
   }

   tracing::info!("シャットダウンシグナルを受信しました");
}
