//! # ルートと値オブジェクト
//!
//! ルートは「パスパターン」「ルート名」「テンプレート ID」の 3 つ組である。
//! それぞれを Newtype で包み、取り違え（例: テンプレート ID をパスとして渡す）を
//! コンパイル時に検出できるようにしている。
//!
//! パスパターンはアプリケーションのマウント位置からの相対表記で保持する
//! （`""` はトップページ、`"login/"` はログインページ）。
//! 実際に照合・逆引きされるパスは先頭に `/` を付けたもの。

use std::{fmt, str::FromStr};

use crate::ReverseError;

/// 名前空間と名前の区切り文字
pub const NAMESPACE_SEPARATOR: char = ':';

/// ルート名の名前空間
///
/// 他のアプリケーションモジュールとのルート名衝突を避けるための接頭辞。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace(String);

impl Namespace {
   pub fn new(value: impl Into<String>) -> Self {
      Self(value.into())
   }

   pub fn as_str(&self) -> &str {
      &self.0
   }
}

impl fmt::Display for Namespace {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.write_str(&self.0)
   }
}

/// 名前空間内で一意なルート名
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteName(String);

impl RouteName {
   pub fn new(value: impl Into<String>) -> Self {
      Self(value.into())
   }

   pub fn as_str(&self) -> &str {
      &self.0
   }
}

impl fmt::Display for RouteName {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.write_str(&self.0)
   }
}

/// マウント位置からの相対パスパターン
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathPattern(String);

impl PathPattern {
   pub fn new(value: impl Into<String>) -> Self {
      Self(value.into())
   }

   pub fn as_str(&self) -> &str {
      &self.0
   }

   /// リクエストパスとして照合される絶対パス
   ///
   /// ```rust
   /// use tabgen_domain::route::PathPattern;
   ///
   /// assert_eq!(PathPattern::new("").to_path(), "/");
   /// assert_eq!(PathPattern::new("login/").to_path(), "/login/");
   /// ```
   pub fn to_path(&self) -> String {
      format!("/{}", self.0.trim_start_matches('/'))
   }

   /// リクエストパスがこのパターンに一致するか
   ///
   /// 完全一致のみ。末尾スラッシュの補完やクエリ文字列の除去は行わない。
   pub fn matches(&self, path: &str) -> bool {
      path.strip_prefix('/')
         .is_some_and(|rest| rest == self.0.trim_start_matches('/'))
   }
}

/// 描画するテンプレートの識別子（例: `app/login/login.html`）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TemplateId(String);

impl TemplateId {
   pub fn new(value: impl Into<String>) -> Self {
      Self(value.into())
   }

   pub fn as_str(&self) -> &str {
      &self.0
   }
}

impl fmt::Display for TemplateId {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.write_str(&self.0)
   }
}

/// パスとテンプレートの束縛
///
/// ハンドラは「呼び出されたら `template` を空のコンテキストで描画する」
/// という純粋な対応であり、状態を持たない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
   pattern:  PathPattern,
   name:     RouteName,
   template: TemplateId,
}

impl Route {
   pub fn new(
      pattern: impl Into<String>,
      name: impl Into<String>,
      template: impl Into<String>,
   ) -> Self {
      Self {
         pattern:  PathPattern::new(pattern),
         name:     RouteName::new(name),
         template: TemplateId::new(template),
      }
   }

   pub fn pattern(&self) -> &PathPattern {
      &self.pattern
   }

   pub fn name(&self) -> &RouteName {
      &self.name
   }

   pub fn template(&self) -> &TemplateId {
      &self.template
   }

   /// 照合される絶対パス
   pub fn path(&self) -> String {
      self.pattern.to_path()
   }
}

/// 名前空間付きのルート名（`app:login`）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
   pub namespace: Namespace,
   pub name:      RouteName,
}

impl FromStr for QualifiedName {
   type Err = ReverseError;

   fn from_str(s: &str) -> Result<Self, Self::Err> {
      let (namespace, name) = s
         .split_once(NAMESPACE_SEPARATOR)
         .ok_or_else(|| ReverseError::Malformed(s.to_string()))?;

      if namespace.is_empty() || name.is_empty() || name.contains(NAMESPACE_SEPARATOR) {
         return Err(ReverseError::Malformed(s.to_string()));
      }

      Ok(Self {
         namespace: Namespace::new(namespace),
         name:      RouteName::new(name),
      })
   }
}

impl fmt::Display for QualifiedName {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      write!(f, "{}{}{}", self.namespace, NAMESPACE_SEPARATOR, self.name)
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;
   use rstest::rstest;

   use super::*;

   #[rstest]
   #[case("", "/")]
   #[case("library/", "/library/")]
   #[case("/login/", "/login/")]
   fn test_パターンから絶対パスを組み立てる(#[case] pattern: &str, #[case] expected: &str) {
      assert_eq!(PathPattern::new(pattern).to_path(), expected);
   }

   #[rstest]
   #[case("", "/", true)]
   #[case("", "", false)]
   #[case("login/", "/login/", true)]
   #[case("login/", "/login", false)]
   #[case("login/", "/login/?next=/", false)]
   #[case("login/", "login/", false)]
   #[case("login/", "/LOGIN/", false)]
   fn test_パターンは完全一致のみ受け付ける(
      #[case] pattern: &str,
      #[case] path: &str,
      #[case] expected: bool,
   ) {
      assert_eq!(PathPattern::new(pattern).matches(path), expected);
   }

   #[test]
   fn test_ルートは絶対パスを返す() {
      let route = Route::new("signup/", "signup", "app/login/signup.html");

      assert_eq!(route.path(), "/signup/");
      assert_eq!(route.name().as_str(), "signup");
      assert_eq!(route.template().as_str(), "app/login/signup.html");
   }

   #[test]
   fn test_名前空間付きルート名をパースする() {
      let qualified: QualifiedName = "app:logout".parse().unwrap();

      assert_eq!(qualified.namespace.as_str(), "app");
      assert_eq!(qualified.name.as_str(), "logout");
      assert_eq!(qualified.to_string(), "app:logout");
   }

   #[rstest]
   #[case("logout")]
   #[case(":logout")]
   #[case("app:")]
   #[case("app:login:extra")]
   fn test_不正な形式のルート名はパースに失敗する(#[case] input: &str) {
      let result = input.parse::<QualifiedName>();

      assert_eq!(result, Err(ReverseError::Malformed(input.to_string())));
   }
}
