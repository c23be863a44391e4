//! Aggregate endpoints - gender counts and best scores

use axum::{extract::State, routing::get, Json, Router};
use serde::Deserialize;

use crate::http::error::ApiError;
use crate::http::extractors::ValidQuery;
use crate::models::EducationRecord;
use crate::state::AppState;

/// Query string for `/countByGender`
#[derive(Debug, Deserialize)]
pub struct GenderParams {
    pub gender: Option<String>,
}

/// GET /countByGender?gender=male|female - bare integer count
async fn count_by_gender(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<GenderParams>,
) -> Result<Json<i64>, ApiError> {
    let count = state
        .queries()
        .count_by_gender(params.gender.as_deref())
        .await?;
    Ok(Json(count))
}

/// GET /bestScore - records with all three scores at the threshold
async fn best_score(State(state): State<AppState>) -> Result<Json<Vec<EducationRecord>>, ApiError> {
    let records = state.queries().best_scores().await?;
    Ok(Json(records))
}

/// Aggregate routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/countByGender", get(count_by_gender))
        .route("/bestScore", get(best_score))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{json, Value};

    use std::sync::Arc;

    use crate::http::routes::test_support::{app, app_with_store, education, send, FailingStore};
    use crate::service::MissingRecordPolicy;

    #[tokio::test]
    async fn counts_sum_to_total() {
        let app = app(MissingRecordPolicy::Lenient);
        for g in ["male", "female", "female", "male", "female"] {
            send(&app, "POST", "/educations", Some(education(g, 60, 60, 60))).await;
        }

        let (status, male) = send(&app, "GET", "/countByGender?gender=male", None).await;
        assert_eq!(status, StatusCode::OK);
        let (_, female) = send(&app, "GET", "/countByGender?gender=female", None).await;
        let (_, all) = send(&app, "GET", "/educations", None).await;

        assert_eq!(male, json!(2));
        assert_eq!(female, json!(3));
        assert_eq!(
            male.as_i64().unwrap() + female.as_i64().unwrap(),
            all.as_array().unwrap().len() as i64
        );
    }

    #[tokio::test]
    async fn count_for_empty_group_is_zero() {
        let app = app(MissingRecordPolicy::Lenient);
        let (status, body) = send(&app, "GET", "/countByGender?gender=female", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!(0));
    }

    #[tokio::test]
    async fn invalid_or_missing_gender_is_400() {
        let app = app(MissingRecordPolicy::Lenient);

        for uri in ["/countByGender?gender=cat", "/countByGender", "/countByGender?gender="] {
            let (status, body) = send(&app, "GET", uri, None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert!(body.is_object(), "{uri} answered a count");
        }
    }

    #[tokio::test]
    async fn best_score_is_exactly_the_perfect_records() {
        let app = app(MissingRecordPolicy::Lenient);
        let mut perfect = Vec::new();
        for (m, r, w) in [(100, 100, 100), (99, 100, 100), (100, 100, 99), (100, 100, 100), (50, 50, 50)] {
            let (_, created) = send(&app, "POST", "/educations", Some(education("female", m, r, w))).await;
            if (m, r, w) == (100, 100, 100) {
                perfect.push(created);
            }
        }

        let (status, best) = send(&app, "GET", "/bestScore", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(best, Value::Array(perfect));
    }

    #[tokio::test]
    async fn lowering_math_score_removes_record_from_best_score() {
        let app = app(MissingRecordPolicy::Lenient);
        let (_, created) = send(&app, "POST", "/educations", Some(education("female", 100, 100, 100))).await;
        let id = created["_id"].as_str().unwrap().to_owned();

        let (_, best) = send(&app, "GET", "/bestScore", None).await;
        assert_eq!(best, json!([created]));

        let (status, _) = send(
            &app,
            "PUT",
            &format!("/editEducation/{id}"),
            Some(education("female", 99, 100, 100)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, best) = send(&app, "GET", "/bestScore", None).await;
        assert_eq!(best, json!([]));
    }

    #[tokio::test]
    async fn repeated_gender_param_is_json_400() {
        let app = app(MissingRecordPolicy::Lenient);
        let (status, body) = send(&app, "GET", "/countByGender?gender=male&gender=female", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid_argument");
        assert!(body["message"].as_str().unwrap().contains("gender"));
    }

    #[tokio::test]
    async fn store_failure_is_generic_500() {
        let app = app_with_store(Arc::new(FailingStore), MissingRecordPolicy::Lenient);

        for uri in ["/countByGender?gender=male", "/bestScore"] {
            let (status, body) = send(&app, "GET", uri, None).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
            assert_eq!(body["message"], "an internal error occurred");
        }
    }
}
