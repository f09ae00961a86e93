//! # ルーティングのエラー定義
//!
//! ルートテーブルの構築時と、ルート名からの逆引き時に発生するエラー。
//!
//! パスが一致しないこと自体はエラーではなく、[`RouteTable::match_path`] が
//! `None` を返す。Not Found への変換はディスパッチャの責務。
//!
//! [`RouteTable::match_path`]: crate::route_table::RouteTable::match_path

use thiserror::Error;

/// ルートテーブルの構築に失敗した
///
/// テーブルはプロセス起動時に一度だけ構築されるため、
/// このエラーは起動失敗として扱う。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
   /// 名前空間が空、または `:` を含む
   #[error("不正な名前空間です: {0:?}")]
   InvalidNamespace(String),

   /// ルート名が空、または `:` を含む
   #[error("不正なルート名です: {0:?}")]
   InvalidName(String),

   /// 同じ名前のルートが複数登録された
   #[error("ルート名が重複しています: {0}")]
   DuplicateName(String),

   /// 同じパスに一致するパターンが複数登録された
   #[error("パスパターンが重複しています: {0:?}")]
   OverlappingPattern(String),
}

/// ルート名からパスへの逆引きに失敗した
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReverseError {
   /// `namespace:name` 形式ではない
   #[error("ルート名は `namespace:name` 形式で指定してください: {0:?}")]
   Malformed(String),

   /// 該当するルートが存在しない（名前空間の不一致を含む）
   #[error("該当するルートがありません: {0}")]
   NoReverseMatch(String),
}
