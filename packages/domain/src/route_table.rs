//! # ルートテーブル
//!
//! 名前空間を共有するルートの、順序付きかつ不変のコレクション。
//!
//! ## 不変条件
//!
//! - ルート名は名前空間内で一意
//! - パスパターンは互いに素（同じパスに一致するパターンは 1 つだけ）
//! - 構築後は変更されない（`&self` のメソッドのみ公開する）
//!
//! 構築はプロセス起動時に一度だけ行い、`Arc` で共有して読み取り専用で使う。
//! 不変条件は [`RouteTable::new`] で検証するため、以降の照合・逆引きは失敗しない前提で書ける。
//!
//! ## アプリケーションのルート
//!
//! | パス | ルート名 | テンプレート |
//! |------|----------|--------------|
//! | `/` | `app:index` | `app/index.html` |
//! | `/library/` | `app:library` | `app/library.html` |
//! | `/login/` | `app:login` | `app/login/login.html` |
//! | `/signup/` | `app:signup` | `app/login/signup.html` |
//! | `/logout/` | `app:logout` | `app/login/logout.html` |

use std::collections::HashSet;

use crate::{
   ReverseError,
   RouteTableError,
   dispatch::Dispatcher,
   route::{NAMESPACE_SEPARATOR, Namespace, QualifiedName, Route},
};

/// アプリケーションの名前空間
pub const APP_NAMESPACE: &str = "app";

/// 不変のルートテーブル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
   namespace: Namespace,
   routes:    Vec<Route>,
}

impl RouteTable {
   /// 不変条件を検証してテーブルを構築する
   ///
   /// `routes` の順序がそのまま照合の優先順位になる。
   pub fn new(namespace: impl Into<String>, routes: Vec<Route>) -> Result<Self, RouteTableError> {
      let namespace = namespace.into();
      if namespace.is_empty() || namespace.contains(NAMESPACE_SEPARATOR) {
         return Err(RouteTableError::InvalidNamespace(namespace));
      }

      let mut names = HashSet::new();
      let mut paths = HashSet::new();
      for route in &routes {
         let name = route.name().as_str();
         if name.is_empty() || name.contains(NAMESPACE_SEPARATOR) {
            return Err(RouteTableError::InvalidName(name.to_string()));
         }
         if !names.insert(name) {
            return Err(RouteTableError::DuplicateName(name.to_string()));
         }
         // 照合は完全一致なので、絶対パスが同じなら重複とみなせる
         if !paths.insert(route.path()) {
            return Err(RouteTableError::OverlappingPattern(
               route.pattern().as_str().to_string(),
            ));
         }
      }

      Ok(Self {
         namespace: Namespace::new(namespace),
         routes,
      })
   }

   /// アプリケーションのルートテーブル
   pub fn app() -> Self {
      let routes = vec![
         Route::new("", "index", "app/index.html"),
         Route::new("library/", "library", "app/library.html"),
         Route::new("login/", "login", "app/login/login.html"),
         Route::new("signup/", "signup", "app/login/signup.html"),
         Route::new("logout/", "logout", "app/login/logout.html"),
      ];

      match Self::new(APP_NAMESPACE, routes) {
         Ok(table) => table,
         Err(e) => unreachable!("アプリケーションのルート定義が不正です: {e}"),
      }
   }

   pub fn namespace(&self) -> &Namespace {
      &self.namespace
   }

   pub fn iter(&self) -> impl Iterator<Item = &Route> {
      self.routes.iter()
   }

   pub fn len(&self) -> usize {
      self.routes.len()
   }

   pub fn is_empty(&self) -> bool {
      self.routes.is_empty()
   }

   /// リクエストパスに一致するルートを返す
   ///
   /// 先頭から順に照合し、最初に一致したものを返す。
   /// 一致しない場合は `None`（Not Found の判断はディスパッチャに委ねる）。
   pub fn match_path(&self, path: &str) -> Option<&Route> {
      self.routes.iter().find(|route| route.pattern().matches(path))
   }

   /// 名前空間付きルート名（`app:login`）から絶対パスを逆引きする
   pub fn reverse(&self, qualified_name: &str) -> Result<String, ReverseError> {
      let qualified: QualifiedName = qualified_name.parse()?;
      if qualified.namespace != self.namespace {
         return Err(ReverseError::NoReverseMatch(qualified.to_string()));
      }

      self.routes
         .iter()
         .find(|route| *route.name() == qualified.name)
         .map(Route::path)
         .ok_or_else(|| ReverseError::NoReverseMatch(qualified.to_string()))
   }

   /// 全ルートを照合順にディスパッチャへ登録する
   pub fn register_into<D: Dispatcher>(&self, dispatcher: D) -> D {
      self.routes
         .iter()
         .fold(dispatcher, |dispatcher, route| dispatcher.register(route))
   }
}
