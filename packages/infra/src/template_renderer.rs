//! # テンプレートレンダラー
//!
//! tera テンプレートエンジンでページを描画する。
//!
//! ## 設計方針
//!
//! - **`include_str!` によるコンパイル時埋め込み**: 既定ではテンプレートはバイナリに埋め込まれる
//! - **ディレクトリ読み込み**: `TEMPLATE_DIR` 指定時はディスク上のテンプレートを使う（開発時の編集用）
//! - **`url` 関数**: テンプレートから `{{ url(name="app:login") }}` でルートテーブルを逆引きできる
//!
//! テンプレート ID は `templates/` からの相対パス（例: `app/login/login.html`）。

use std::{collections::HashMap, error::Error as _, path::Path, sync::Arc};

use tabgen_domain::{
   render::{PageContext, RenderError, TemplateRenderer},
   route::TemplateId,
   route_table::RouteTable,
};
use tera::{Context, Function, Tera, Value};

/// バイナリに埋め込むテンプレート
const EMBEDDED_TEMPLATES: [(&str, &str); 6] = [
   ("base.html", include_str!("../../../templates/base.html")),
   ("app/index.html", include_str!("../../../templates/app/index.html")),
   ("app/library.html", include_str!("../../../templates/app/library.html")),
   (
      "app/login/login.html",
      include_str!("../../../templates/app/login/login.html"),
   ),
   (
      "app/login/signup.html",
      include_str!("../../../templates/app/login/signup.html"),
   ),
   (
      "app/login/logout.html",
      include_str!("../../../templates/app/login/logout.html"),
   ),
];

/// tera を使ったテンプレートレンダラー
///
/// 構築後は読み取り専用。`Arc<dyn TemplateRenderer>` として全リクエストで共有する。
pub struct TeraRenderer {
   engine: Tera,
}

impl TeraRenderer {
   /// 埋め込みテンプレートでレンダラーを作成する
   pub fn embedded(routes: Arc<RouteTable>) -> Result<Self, RenderError> {
      Self::from_raw(EMBEDDED_TEMPLATES.to_vec(), routes)
   }

   /// `dir` 配下の `*.html` を読み込んでレンダラーを作成する
   ///
   /// `dir` がディレクトリでなければ [`RenderError::Failed`]。
   pub fn from_dir(dir: impl AsRef<Path>, routes: Arc<RouteTable>) -> Result<Self, RenderError> {
      let dir = dir.as_ref();
      if !dir.is_dir() {
         return Err(RenderError::Failed(format!(
            "テンプレートディレクトリが存在しません: {}",
            dir.display()
         )));
      }

      let glob = dir.join("**").join("*.html");
      let engine = Tera::new(&glob.to_string_lossy()).map_err(into_render_error)?;

      tracing::debug!(dir = %dir.display(), "テンプレートをディレクトリから読み込みました");
      Ok(Self::with_engine(engine, routes))
   }

   /// 名前と本文の組からレンダラーを作成する
   pub fn from_raw(
      templates: Vec<(&str, &str)>,
      routes: Arc<RouteTable>,
   ) -> Result<Self, RenderError> {
      let mut engine = Tera::default();
      engine
         .add_raw_templates(templates)
         .map_err(into_render_error)?;

      Ok(Self::with_engine(engine, routes))
   }

   fn with_engine(mut engine: Tera, routes: Arc<RouteTable>) -> Self {
      engine.register_function("url", UrlFunction { routes });
      Self { engine }
   }

   /// テーブル内のルートのうち、テンプレートが登録されていないもの
   ///
   /// 起動時の検査用。描画時には [`RenderError::TemplateNotFound`] になる。
   pub fn missing_templates<'a>(&self, table: &'a RouteTable) -> Vec<&'a TemplateId> {
      let names: Vec<&str> = self.engine.get_template_names().collect();
      table
         .iter()
         .map(|route| route.template())
         .filter(|template| !names.contains(&template.as_str()))
         .collect()
   }
}

impl TemplateRenderer for TeraRenderer {
   fn render(&self, template: &TemplateId, context: &PageContext) -> Result<String, RenderError> {
      let context = Context::from_value(context.clone().into_value()).map_err(into_render_error)?;

      self.engine
         .render(template.as_str(), &context)
         .map_err(into_render_error)
   }
}

/// `{{ url(name="app:login") }}` の実装
struct UrlFunction {
   routes: Arc<RouteTable>,
}

impl Function for UrlFunction {
   fn call(&self, args: &HashMap<String, Value>) -> tera::Result<Value> {
      let name = args
         .get("name")
         .and_then(Value::as_str)
         .ok_or_else(|| tera::Error::msg("url() には文字列の `name` 引数が必要です"))?;

      self.routes
         .reverse(name)
         .map(Value::String)
         .map_err(|e| tera::Error::msg(e.to_string()))
   }

   // パスはルート定義由来でエスケープ不要（`/` が `&#x2F;` になるのを防ぐ）
   fn is_safe(&self) -> bool {
      true
   }
}

/// tera のエラーを原因チェイン付きで変換する
fn into_render_error(err: tera::Error) -> RenderError {
   if let tera::ErrorKind::TemplateNotFound(name) = &err.kind {
      return RenderError::TemplateNotFound(name.clone());
   }

   let mut message = err.to_string();
   let mut source = err.source();
   while let Some(cause) = source {
      message.push_str(": ");
      message.push_str(&cause.to_string());
      source = cause.source();
   }
   RenderError::Failed(message)
}
