//! # TabGen Web サーバー
//!
//! ギタータブ生成アプリケーションのページを配信する HTTP サーバー。
//!
//! ## 配信するページ
//!
//! | パス | ルート名 | テンプレート |
//! |------|----------|--------------|
//! | `/` | `app:index` | `app/index.html` |
//! | `/library/` | `app:library` | `app/library.html` |
//! | `/login/` | `app:login` | `app/login/login.html` |
//! | `/signup/` | `app:signup` | `app/login/signup.html` |
//! | `/logout/` | `app:logout` | `app/login/logout.html` |
//!
//! ## モジュール構成
//!
//! - [`app_builder`] - ルートテーブルから `Router` を構築する
//! - [`config`] - アプリケーション設定（環境変数からの読み込み）
//! - [`error`] - HTTP エラー定義とレスポンスへの変換
//! - [`handler`] - HTTP リクエストハンドラ
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use tabgen_domain::route_table::RouteTable;
//! use tabgen_infra::TeraRenderer;
//! use tabgen_web::app_builder::build_app;
//!
//! let table = Arc::new(RouteTable::app());
//! let renderer = Arc::new(TeraRenderer::embedded(table.clone())?);
//! let app = build_app(&table, renderer);
//! ```

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
