//! # アプリケーション構築
//!
//! ルートテーブルを axum の `Router` に登録し、横断的なレイヤーを重ねる。
//! `main.rs` は設定読み込みとサーバー起動に集中する。
//!
//! ## ルーティング
//!
//! ```text
//! RouteTable ──register_into──▶ AxumDispatcher ──▶ Router
//!                                                  ├── /health   (ヘルスチェック)
//!                                                  └── fallback  (404)
//! ```
//!
//! ルートテーブルは axum を知らない。axum との接続は [`AxumDispatcher`] に閉じる。

use std::sync::Arc;

use anyhow::{Context as _, bail};
use axum::{
   Extension, Router,
   routing::{any, get},
};
use tabgen_domain::{
   dispatch::Dispatcher,
   render::TemplateRenderer,
   route::Route,
   route_table::RouteTable,
};
use tabgen_infra::TeraRenderer;
use tabgen_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
   request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
   trace::TraceLayer,
};

use crate::{
   config::TemplateConfig,
   handler::{PageState, health_check, not_found, render_page},
};

/// axum の `Router` を [`Dispatcher`] として扱うアダプタ
///
/// 登録された各ルートにページハンドラを束縛する。HTTP メソッドは問わない
/// （フォームの POST も同じテンプレートを描画する）。
pub struct AxumDispatcher {
   router: Router<Arc<PageState>>,
}

impl AxumDispatcher {
   pub fn new() -> Self {
      Self {
         router: Router::new(),
      }
   }

   pub fn into_router(self) -> Router<Arc<PageState>> {
      self.router
   }
}

impl Default for AxumDispatcher {
   fn default() -> Self {
      Self::new()
   }
}

impl Dispatcher for AxumDispatcher {
   fn register(self, route: &Route) -> Self {
      let path = route.path();
      let handler = any(render_page).layer(Extension(Arc::new(route.clone())));

      tracing::debug!(%path, route = %route.name(), template = %route.template(), "ルートを登録しました");
      Self {
         router: self.router.route(&path, handler),
      }
   }
}

/// ルートテーブルとレンダラーからアプリケーションの `Router` を構築する
///
/// # パニック
///
/// テーブルのパスが `/health` と衝突する場合（axum がルート重複でパニックする）。
pub fn build_app(table: &RouteTable, renderer: Arc<dyn TemplateRenderer>) -> Router {
   let state = Arc::new(PageState { renderer });

   table
      .register_into(AxumDispatcher::new())
      .into_router()
      .route("/health", get(health_check))
      .fallback(not_found)
      .with_state(state)
      // Request ID レイヤー（下に書いたものが外側）
      // 1. SetRequestIdLayer（最外）: UUID v7 を生成（またはクライアント提供値を使用）
      // 2. TraceLayer: スパンに request_id を含める
      // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
      .layer(PropagateRequestIdLayer::x_request_id())
      .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
      .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}

/// 設定に従ってテンプレートレンダラーを構築する
///
/// テーブルのルートのテンプレートが一つでも欠けていればエラーにする。
/// `TEMPLATE_DIR` の指定ミスはここで起動失敗として表面化する。
pub fn load_renderer(
   config: &TemplateConfig,
   table: Arc<RouteTable>,
) -> anyhow::Result<TeraRenderer> {
   let renderer = match &config.dir {
      Some(dir) => TeraRenderer::from_dir(dir, table.clone()).with_context(|| {
         format!("テンプレートディレクトリを読み込めません: {}", dir.display())
      })?,
      None => TeraRenderer::embedded(table.clone())
         .context("埋め込みテンプレートの読み込みに失敗しました")?,
   };

   let missing: Vec<&str> = renderer
      .missing_templates(&table)
      .into_iter()
      .map(|template| template.as_str())
      .collect();
   if !missing.is_empty() {
      bail!("テンプレートが見つかりません: {}", missing.join(", "));
   }

   Ok(renderer)
}

#[cfg(test)]
mod tests {
   use std::path::{Path, PathBuf};

   use rstest::{fixture, rstest};

   use super::*;

   #[fixture]
   fn routes() -> Arc<RouteTable> {
      Arc::new(RouteTable::app())
   }

   fn manifest_dir(relative: &str) -> PathBuf {
      Path::new(env!("CARGO_MANIFEST_DIR"))
         .join(relative)
         .canonicalize()
         .unwrap()
   }

   #[rstest]
   fn test_ディレクトリ未指定なら埋め込みテンプレートを使う(routes: Arc<RouteTable>) {
      let renderer = load_renderer(&TemplateConfig::default(), routes.clone()).unwrap();

      assert!(renderer.missing_templates(&routes).is_empty());
   }

   #[rstest]
   fn test_指定したディレクトリからテンプレートを読み込む(routes: Arc<RouteTable>) {
      let config = TemplateConfig {
         dir: Some(manifest_dir("../../templates")),
      };

      let renderer = load_renderer(&config, routes.clone()).unwrap();

      assert!(renderer.missing_templates(&routes).is_empty());
   }

   #[rstest]
   fn test_存在しないディレクトリは起動エラーになる(routes: Arc<RouteTable>) {
      let config = TemplateConfig {
         dir: Some(PathBuf::from("/nonexistent/tabgen-templates")),
      };

      let result = load_renderer(&config, routes);

      assert!(result.is_err());
   }

   #[rstest]
   fn test_テンプレートが欠けたディレクトリは起動エラーになる(routes: Arc<RouteTable>) {
      // ソースディレクトリは存在するが *.html を含まない
      let config = TemplateConfig {
         dir: Some(manifest_dir("src")),
      };

      let err = load_renderer(&config, routes).err().unwrap();

      let message = err.to_string();
      for template in ["app/index.html", "app/login/login.html", "app/login/logout.html"] {
         assert!(message.contains(template), "{template} が列挙されること: {message}");
      }
   }
}
