//! # ディスパッチャへの登録インターフェース
//!
//! リクエストパスの照合とハンドラの呼び出しは HTTP フレームワークの責務。
//! ルートテーブルはこのトレイトを通じて自身を登録するだけで、
//! フレームワーク固有の制御フローを持たない。
//!
//! ```rust
//! use tabgen_domain::{dispatch::Dispatcher, route::Route, route_table::RouteTable};
//!
//! struct PathCollector(Vec<String>);
//!
//! impl Dispatcher for PathCollector {
//!     fn register(mut self, route: &Route) -> Self {
//!         self.0.push(route.path());
//!         self
//!     }
//! }
//!
//! let collected = RouteTable::app().register_into(PathCollector(Vec::new()));
//! assert_eq!(collected.0.len(), 5);
//! ```

use crate::route::Route;

/// ルートを受け取り、対応するハンドラを束縛するディスパッチャ
///
/// axum の `Router` のようにビルダーを値で受け渡す API に合わせ、
/// `self` を消費して登録後のディスパッチャを返す。
pub trait Dispatcher: Sized {
   fn register(self, route: &Route) -> Self;
}
