//! # テンプレートレンダリングのインターフェース
//!
//! ページハンドラはテンプレート ID とコンテキストをレンダラーに渡し、
//! 得られた文字列をレスポンスボディにする。
//! 実装（tera）は infra 層の `TeraRenderer`。

use serde_json::{Map, Value};
use thiserror::Error;

use crate::route::TemplateId;

/// テンプレートの描画に失敗した
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
   /// テンプレートが登録されていない
   #[error("テンプレートが見つかりません: {0}")]
   TemplateNotFound(String),

   /// 構文エラー、未定義変数など描画中の失敗
   #[error("テンプレートの描画に失敗しました: {0}")]
   Failed(String),
}

/// テンプレートに渡す変数の集合
///
/// ページハンドラは常に空のコンテキスト（[`PageContext::default`]）を渡す。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageContext(Map<String, Value>);

impl PageContext {
   pub fn new() -> Self {
      Self::default()
   }

   pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
      self.0.insert(key.into(), value.into());
   }

   pub fn is_empty(&self) -> bool {
      self.0.is_empty()
   }

   pub fn into_value(self) -> Value {
      Value::Object(self.0)
   }
}

/// テンプレートレンダラー
///
/// 複数の tokio タスクから同時に呼ばれるため `Send + Sync` を要求する。
/// 描画は読み取り専用で、呼び出し間で状態を変えてはならない。
pub trait TemplateRenderer: Send + Sync {
   fn render(&self, template: &TemplateId, context: &PageContext) -> Result<String, RenderError>;
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;
   use serde_json::json;

   use super::*;

   #[test]
   fn test_デフォルトのコンテキストは空() {
      let context = PageContext::default();

      assert!(context.is_empty());
      assert_eq!(context.into_value(), json!({}));
   }

   #[test]
   fn test_コンテキストに変数を追加する() {
      let mut context = PageContext::new();
      context.insert("title", "Library");

      assert_eq!(context.into_value(), json!({"title": "Library"}));
   }
}
