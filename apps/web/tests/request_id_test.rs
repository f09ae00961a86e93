//! # Request ID レイヤーのテスト
//!
//! `build_app` が Request ID レイヤーを正しく重ねていることを検証する。
//!
//! - レスポンスに `X-Request-Id` ヘッダーが含まれる（404 を含む）
//! - クライアント提供の `X-Request-Id` がそのまま返される
//! - 自動生成の `X-Request-Id` が UUID v7 形式である

use std::sync::Arc;

use axum::{Router, body::Body};
use http::{Request, StatusCode};
use tabgen_domain::route_table::RouteTable;
use tabgen_infra::TeraRenderer;
use tabgen_web::app_builder::build_app;
use tower::ServiceExt;

fn test_app() -> Router {
   let table = Arc::new(RouteTable::app());
   let renderer = Arc::new(TeraRenderer::embedded(table.clone()).unwrap());
   build_app(&table, renderer)
}

#[tokio::test]
async fn test_レスポンスにx_request_idヘッダーが含まれる() {
   let response = test_app()
      .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
      .await
      .unwrap();

   assert_eq!(response.status(), StatusCode::OK);
   assert!(
      response.headers().contains_key("x-request-id"),
      "レスポンスに x-request-id ヘッダーが含まれること"
   );
}

#[tokio::test]
async fn test_404でもx_request_idヘッダーが含まれる() {
   let response = test_app()
      .oneshot(
         Request::builder()
            .uri("/unknown/")
            .body(Body::empty())
            .unwrap(),
      )
      .await
      .unwrap();

   assert_eq!(response.status(), StatusCode::NOT_FOUND);
   assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_クライアント提供のx_request_idがそのまま返される() {
   let custom_id = "client-provided-request-id-123";

   let response = test_app()
      .oneshot(
         Request::builder()
            .uri("/login/")
            .header("x-request-id", custom_id)
            .body(Body::empty())
            .unwrap(),
      )
      .await
      .unwrap();

   assert_eq!(
      response
         .headers()
         .get("x-request-id")
         .unwrap()
         .to_str()
         .unwrap(),
      custom_id,
      "クライアント提供の Request ID がそのまま返されること"
   );
}

#[tokio::test]
async fn test_自動生成のx_request_idがuuid_v7形式である() {
   let response = test_app()
      .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
      .await
      .unwrap();

   let request_id = response
      .headers()
      .get("x-request-id")
      .unwrap()
      .to_str()
      .unwrap();

   let uuid = uuid::Uuid::parse_str(request_id)
      .unwrap_or_else(|_| panic!("有効な UUID であること: {request_id}"));
   assert_eq!(
      uuid.get_version(),
      Some(uuid::Version::SortRand),
      "UUID v7（SortRand）であること"
   );
}
