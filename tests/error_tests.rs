// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::http::StatusCode;
use axum::response::IntoResponse;
use sabu_kecamatan::error::AppError;
use sabu_kecamatan::services::SourceError;

mod common;

#[tokio::test]
async fn test_source_errors_are_500_with_kind() {
    let cases = [
        (
            SourceError::Unavailable("No such file or directory".to_string()),
            "SOURCE_UNAVAILABLE",
        ),
        (
            SourceError::Malformed("expected FeatureCollection".to_string()),
            "SOURCE_MALFORMED",
        ),
    ];

    for (err, kind) in cases {
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = common::body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Failed to load kecamatan GeoJSON data");
        assert_eq!(json["kind"], kind);
    }
}

#[tokio::test]
async fn test_internal_error_hides_details() {
    let err = AppError::from(anyhow::anyhow!("worker panicked"));
    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = common::body_json(response).await;
    assert_eq!(json["error"], "internal_error");
    assert_eq!(json["details"], "Unexpected server error");
    assert!(json.get("kind").is_none());
}

#[tokio::test]
async fn test_not_found() {
    let response = AppError::NotFound("Kecamatan 'x' not found".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = common::body_json(response).await;
    assert_eq!(json["details"], "Kecamatan 'x' not found");
}
