//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ページハンドラはルートテーブルの 1 エントリを描画するだけで、状態を持たない
//!
//! ## モジュール構成
//!
//! ```text
//! handler.rs          # 親モジュール（re-export）
//! └── handler/
//!     ├── health.rs   # ヘルスチェックハンドラ
//!     └── page.rs     # テンプレート描画ハンドラと Not Found
//! ```

pub mod health;
pub mod page;

pub use health::health_check;
pub use page::{PageState, not_found, render_page};
