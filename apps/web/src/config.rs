//! # アプリケーション設定
//!
//! 環境変数からアプリケーション設定を読み込む。
//!
//! ## 設計方針
//!
//! [12-Factor App](https://12factor.net/ja/config) の原則に従い、
//! すべての設定を環境変数から読み込む。開発環境では `.env` ファイルを
//! `dotenvy` で読み込んでから [`AppConfig::from_env`] を呼ぶ。
//!
//! ## 環境変数一覧
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `WEB_HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `WEB_PORT` | No | `8000` | ポート番号 |
//! | `TEMPLATE_DIR` | No | - | 指定時はディスク上のテンプレートを使う（未指定時は埋め込み） |
//! | `ENVIRONMENT` | No | `development` | 実行環境（development/staging/production） |
//!
//! ログ関連（`LOG_FORMAT`, `RUST_LOG`）は `tabgen_shared::observability` が読む。

use std::{env, path::PathBuf};

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_ENVIRONMENT: &str = "development";

/// 設定の読み込みに失敗した
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
   #[error("WEB_PORT は有効なポート番号である必要があります: {0:?}")]
   InvalidPort(String),
}

/// HTTP サーバー設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
   /// バインドアドレス（例: `0.0.0.0`, `127.0.0.1`）
   pub host: String,
   /// ポート番号
   pub port: u16,
}

/// テンプレート設定
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateConfig {
   /// テンプレートディレクトリ。`None` なら埋め込みテンプレートを使う
   pub dir: Option<PathBuf>,
}

/// アプリケーション全体の設定
///
/// 起動時に一度だけ構築し、各コンポーネントに渡す。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
   pub server:      ServerConfig,
   pub templates:   TemplateConfig,
   /// 実行環境（`development`, `staging`, `production`）
   pub environment: String,
}

impl AppConfig {
   /// 環境変数から設定を読み込む
   pub fn from_env() -> Result<Self, ConfigError> {
      Self::from_lookup(|key| env::var(key).ok())
   }

   /// 任意のキー検索関数から設定を読み込む
   ///
   /// 空文字列は未設定として扱う。
   pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
      let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

      let port = match get("WEB_PORT") {
         Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidPort(value.clone()))?,
         None => DEFAULT_PORT,
      };

      Ok(Self {
         server:      ServerConfig {
            host: get("WEB_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
         },
         templates:   TemplateConfig {
            dir: get("TEMPLATE_DIR").map(PathBuf::from),
         },
         environment: get("ENVIRONMENT").unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
      })
   }
}
