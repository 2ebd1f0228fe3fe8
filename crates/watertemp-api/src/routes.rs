use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use watertemp_core::{pipeline, CsvUpload, ResultSet};

use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub filename: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub kind: &'static str,
}

/// POST /analyses: runs the pipeline over the uploaded content. Every
/// taxonomy failure is a 400 with its kind tag; only failures outside the
/// taxonomy (a dead worker thread) become a 500.
pub async fn analyze(
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<ResultSet>, (StatusCode, Json<ErrorBody>)> {
    let config = app_state.config.clone();

    let result = tokio::task::spawn_blocking(move || {
        let upload = CsvUpload::new(&payload.filename, payload.content.as_bytes());
        pipeline::analyze(&upload, &config)
    })
    .await;

    match result {
        Ok(Ok(averages)) => Ok(Json(averages)),
        Ok(Err(err)) => {
            tracing::warn!("analysis rejected: {err}");
            Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: err.to_string(),
                    kind: err.kind().as_str(),
                }),
            ))
        }
        Err(join_err) => {
            tracing::error!("analysis task failed: {join_err}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: "internal error while analyzing file".to_string(),
                    kind: "INTERNAL",
                }),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request};
    use axum::routing::post;
    use axum::Router;
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use watertemp_core::AnalysisConfig;

    fn test_router() -> Router {
        let state = Arc::new(AppState {
            config: AnalysisConfig::default(),
        });
        Router::new()
            .route("/analyses", post(analyze))
            .with_state(state)
    }

    async fn send(body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/analyses")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn returns_location_averages() {
        let content = concat!(
            "MonitoringLocationID,CharacteristicName,ResultValue\n",
            "LOC001,\"Temperature, water\",20.5\n",
            "LOC001,\"Temperature, water\",21.5\n",
        );
        let (status, body) = send(serde_json::json!({
            "filename": "obs.csv",
            "content": content,
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({"LOC001": 21.0}));
    }

    #[tokio::test]
    async fn rejects_non_csv_uploads_with_a_kind_tag() {
        let (status, body) = send(serde_json::json!({
            "filename": "obs.txt",
            "content": "a,b\n1,2\n",
        }))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["kind"], "INVALID_FILE_TYPE");
        assert!(body["error"].as_str().unwrap().contains("obs.txt"));
    }

    #[tokio::test]
    async fn reports_missing_columns() {
        let (status, body) = send(serde_json::json!({
            "filename": "obs.csv",
            "content": "MonitoringLocationID,Other\nLOC001,x\n",
        }))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["kind"], "MISSING_COLUMNS");
    }
}
