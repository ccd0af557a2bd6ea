mod common;

use axum::http::StatusCode;
use common::{spawn_app, MultipartBody, PNG_BYTES};
use serde_json::json;

#[tokio::test]
async fn employer_manages_own_vacancies() {
    let app = spawn_app().await;
    let (token, employer_id) = app.register("employer").await;

    let (status, body) = app
        .multipart(
            "/api/employer/vacancies",
            &token,
            MultipartBody::new()
                .text("position_name", "Rust Developer")
                .text("salary", "150000.50")
                .text("description", "Backend services")
                .file("photo", "office.png", "image/png", &PNG_BYTES),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    assert_eq!(body["employer_id"], employer_id.to_string());
    assert_eq!(body["position_name"], "Rust Developer");
    assert!(body["photo"].as_str().unwrap().starts_with("data:image/png"));
    let id = body["id"].as_str().unwrap().to_string();

    let (status, body) = app.get("/api/employer/vacancies", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, body) = app
        .json(
            "PUT",
            &format!("/api/employer/vacancies/{}", id),
            Some(&token),
            json!({ "position_name": "Senior Rust Developer", "salary": 200000 }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(body["position_name"], "Senior Rust Developer");
    assert!(body["description"].is_null());
    // photo is not part of the JSON update
    assert!(body["photo"].as_str().is_some());

    let (status, _) = app
        .json(
            "PUT",
            &format!("/api/employer/vacancies/{}", id),
            Some(&token),
            json!({ "position_name": "  " }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app
        .get(&format!("/api/employer/vacancies/{}", id), Some(&token))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["position_name"], "Senior Rust Developer");

    let (status, body) = app
        .delete(&format!("/api/employer/vacancies/{}", id), &token)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Vacancy deleted");

    let (status, _) = app
        .get(&format!("/api/employer/vacancies/{}", id), Some(&token))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn vacancy_requires_position_name_and_known_references() {
    let app = spawn_app().await;
    let (token, _) = app.register("employer").await;

    let (status, _) = app
        .multipart(
            "/api/employer/vacancies",
            &token,
            MultipartBody::new().text("salary", "1000"),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .multipart(
            "/api/employer/vacancies",
            &token,
            MultipartBody::new()
                .text("position_name", "Accountant")
                .text("salary", "a lot"),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .multipart(
            "/api/employer/vacancies",
            &token,
            MultipartBody::new()
                .text("position_name", "Accountant")
                .text("profession_id", "999999"),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn foreign_vacancy_looks_missing() {
    let app = spawn_app().await;
    let (owner_token, _) = app.register("employer").await;
    let (other_token, _) = app.register("employer").await;

    let vacancy = app.create_vacancy(&owner_token, "Designer").await;
    let uri = format!("/api/employer/vacancies/{}", vacancy["id"].as_str().unwrap());

    let (status, _) = app.get(&uri, Some(&other_token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .json("PUT", &uri, Some(&other_token), json!({ "position_name": "Hijacked" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.delete(&uri, &other_token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = app.get(&uri, Some(&owner_token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["position_name"], "Designer");
}

#[tokio::test]
async fn job_seeker_feed_tolerates_missing_references() {
    let app = spawn_app().await;
    let (employer_token, _) = app.register("employer").await;
    let (seeker_token, _) = app.register("job_seeker").await;

    let vacancy = app.create_vacancy(&employer_token, "Sales Lead").await;
    let id = vacancy["id"].as_str().unwrap();

    let (status, body) = app.get("/api/jobseeker/vacancies", Some(&seeker_token)).await;
    assert_eq!(status, StatusCode::OK);
    let card = body
        .as_array()
        .unwrap()
        .iter()
        .find(|v| v["id"] == id)
        .expect("vacancy in feed");
    assert!(card["profession_name"].is_null());
    assert!(card["position_title"].is_null());
    assert!(card["company_name"].is_null());
    assert!(card["photo"].is_null());
    assert_eq!(card["salary"], vacancy["salary"]);
}

#[tokio::test]
async fn recommendations_skip_liked_vacancies_and_rank_profession_first() {
    let app = spawn_app().await;
    let (employer_token, _) = app.register("employer").await;
    let (seeker_token, _) = app.register("job_seeker").await;

    let profession_id: i32 =
        sqlx::query_scalar("SELECT id FROM professions WHERE name = 'Design'")
            .fetch_one(&app.pool)
            .await
            .unwrap();

    let (status, _) = app
        .multipart(
            "/api/profiles/jobSeeker",
            &seeker_token,
            MultipartBody::new().text("profession", "design"),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, matching) = app
        .multipart(
            "/api/employer/vacancies",
            &employer_token,
            MultipartBody::new()
                .text("position_name", "UI Designer")
                .text("profession_id", &profession_id.to_string()),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let liked = app.create_vacancy(&employer_token, "Liked one").await;
    let other = app.create_vacancy(&employer_token, "Newest unrelated").await;

    let (status, _) = app
        .json(
            "POST",
            "/api/jobseeker/like",
            Some(&seeker_token),
            json!({ "vacancy_id": liked["id"] }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app
        .get("/api/jobseeker/recommendations", Some(&seeker_token))
        .await;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items[0]["id"], matching["id"]);
    assert!(items.iter().all(|v| v["id"] != liked["id"]));
    assert!(items.iter().any(|v| v["id"] == other["id"]));
}
