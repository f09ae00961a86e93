//! # ページハンドラ
//!
//! ルートテーブルの各エントリに束縛されるハンドラ。
//! 束縛されたルートは `Extension<Arc<Route>>` として渡され、
//! そのテンプレートを空のコンテキストで描画して返す。
//!
//! リクエストの内容（クエリ、ボディ、Cookie）は一切読まない。
//! ログイン・サインアップ・ログアウトも例外ではなく、ページを描画するだけである。

use std::sync::Arc;

use axum::{
   Extension,
   extract::State,
   http::Uri,
   response::Html,
};
use tabgen_domain::{
   render::{PageContext, TemplateRenderer},
   route::Route,
};

use crate::error::AppError;

/// ページハンドラの State
pub struct PageState {
   pub renderer: Arc<dyn TemplateRenderer>,
}

/// ルートのテンプレートを描画する
#[tracing::instrument(skip_all, fields(route = %route.name(), template = %route.template()))]
pub async fn render_page(
   State(state): State<Arc<PageState>>,
   Extension(route): Extension<Arc<Route>>,
) -> Result<Html<String>, AppError> {
   let body = state
      .renderer
      .render(route.template(), &PageContext::default())?;

   tracing::debug!(bytes = body.len(), "ページを描画しました");
   Ok(Html(body))
}

/// どのルートにも一致しなかったリクエスト
pub async fn not_found(uri: Uri) -> AppError {
   tracing::debug!(%uri, "一致するルートがありません");
   AppError::NotFound
}
