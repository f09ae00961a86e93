//! # TabGen インフラ層
//!
//! ドメイン層が定義するインターフェースの実装を提供する。
//!
//! - [`template_renderer`] - tera による [`TemplateRenderer`] 実装
//!
//! [`TemplateRenderer`]: tabgen_domain::render::TemplateRenderer

pub mod template_renderer;

pub use template_renderer::TeraRenderer;
