//! # TabGen ドメイン層
//!
//! ページルーティングの中核となるルートテーブルと、
//! 外部コラボレーター（ディスパッチャ・テンプレートレンダラー）とのインターフェースを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! web → infra → domain
//! ```
//!
//! ドメイン層は HTTP フレームワークやテンプレートエンジンに一切依存しない。
//! axum / tera との接続は [`dispatch::Dispatcher`] と [`render::TemplateRenderer`]
//! の実装側（web, infra）が担う。
//!
//! ## モジュール構成
//!
//! - [`error`] - ルートテーブル構築・逆引きのエラー
//! - [`route`] - ルートと値オブジェクト（名前空間、ルート名、パスパターン、テンプレート ID）
//! - [`route_table`] - 不変のルートテーブルとパス照合・逆引き
//! - [`dispatch`] - ディスパッチャへの登録インターフェース
//! - [`render`] - テンプレートレンダリングのインターフェース
//!
//! ## 使用例
//!
//! ```rust
//! use tabgen_domain::route_table::RouteTable;
//!
//! let table = RouteTable::app();
//!
//! let route = table.match_path("/login/").unwrap();
//! assert_eq!(route.template().as_str(), "app/login/login.html");
//!
//! assert_eq!(table.reverse("app:library").unwrap(), "/library/");
//! ```

pub mod dispatch;
pub mod error;
pub mod render;
pub mod route;
pub mod route_table;

pub use error::{ReverseError, RouteTableError};
