//! Tier gating, upgrade/signup, and the premium try-on flow.

use axum::http::{StatusCode, header};
use framefit_integration_tests::{
    FunnelClient, body_bytes, body_json, complete_questionnaire, location, submit_photo,
};
use serde_json::json;

#[tokio::test]
async fn test_try_on_is_gated_for_anonymous_and_free() {
    let mut client = FunnelClient::new();

    // Anonymous.
    let response = client.get("/try-on").await;
    assert!(response.status().is_redirection());
    assert_eq!(location(&response), "/upgrade");

    // Logged in, free tier.
    client
        .post_form("/login", &[("email", "ana@example.com")])
        .await;
    let response = client.get("/try-on").await;
    assert!(response.status().is_redirection());
    assert_eq!(location(&response), "/upgrade");
}

#[tokio::test]
async fn test_anonymous_plan_selection_asks_for_signup() {
    let mut client = FunnelClient::new();
    let response = client.post_form("/upgrade", &[("plan", "monthly")]).await;

    assert_eq!(response.status(), StatusCode::OK);
    let view = body_json(response).await;
    assert_eq!(view["next"], "signup");
    assert_eq!(view["plan"], "monthly");
}

#[tokio::test]
async fn test_logged_in_upgrade_goes_straight_to_try_on() {
    let mut client = FunnelClient::new();
    client
        .post_form("/login", &[("email", "ana@example.com")])
        .await;

    let response = client.post_form("/upgrade", &[("plan", "yearly")]).await;
    assert!(response.status().is_redirection());
    assert_eq!(location(&response), "/try-on");
}

#[tokio::test]
async fn test_upgrade_page_lists_both_plans() {
    let mut client = FunnelClient::new();
    let view = body_json(client.get("/upgrade").await).await;

    let plans = view["plans"].as_array().expect("plans");
    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0]["price"], "R$ 29.90/month");
    assert_eq!(plans[1]["price"], "R$ 299.90/year");
}

#[tokio::test]
async fn test_signup_validation() {
    let mut client = FunnelClient::new();

    // Email without @.
    let response = client
        .post_form(
            "/upgrade/signup",
            &[
                ("email", "bad-email"),
                ("password", "secret"),
                ("password_confirm", "secret"),
                ("plan", "monthly"),
            ],
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // Password too short.
    let response = client
        .post_form(
            "/upgrade/signup",
            &[
                ("email", "ana@example.com"),
                ("password", "12345"),
                ("password_confirm", "12345"),
                ("plan", "monthly"),
            ],
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // Mismatched confirmation.
    let response = client
        .post_form(
            "/upgrade/signup",
            &[
                ("email", "ana@example.com"),
                ("password", "secret"),
                ("password_confirm", "secre7"),
                ("plan", "monthly"),
            ],
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_premium_try_on_flow() {
    let mut client = FunnelClient::new();

    // Signup creates a premium account in one step.
    let response = client
        .post_form(
            "/upgrade/signup",
            &[
                ("email", "ana@example.com"),
                ("password", "secret"),
                ("password_confirm", "secret"),
                ("plan", "monthly"),
            ],
        )
        .await;
    assert!(response.status().is_redirection());
    assert_eq!(location(&response), "/try-on");

    // Premium but no analysis yet: the funnel gate still applies.
    let response = client.get("/try-on").await;
    assert!(response.status().is_redirection());
    assert_eq!(location(&response), "/questionnaire");

    complete_questionnaire(&mut client, "Recife, PE").await;
    let photo = [0xFF, 0xD8, 0x42, 0x42];
    let data_url = submit_photo(&mut client, &photo).await;

    // Try-on view: five models, nothing rendered yet.
    let view = body_json(client.get("/try-on").await).await;
    let models = view["models"].as_array().expect("models");
    assert_eq!(models.len(), 5);
    assert!(view["current"].is_null());

    // Generate for model 2; the render echoes the analysis photo.
    let response = client
        .post_json("/try-on/generate", &json!({ "model_id": 2 }))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let render = body_json(response).await;
    assert_eq!(render["model"]["name"], "Modern Wayfarer");
    assert_eq!(render["image"], data_url);

    // A second generation replaces the first wholesale.
    client
        .post_json("/try-on/generate", &json!({ "model_id": 5 }))
        .await;
    let view = body_json(client.get("/try-on").await).await;
    assert_eq!(view["current"]["model"]["name"], "Vintage Round");

    // Download re-emits the render bytes byte for byte.
    let response = client.get("/try-on/download").await;
    assert_eq!(response.status(), StatusCode::OK);
    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .expect("attachment header")
        .to_str()
        .expect("ascii header")
        .to_owned();
    assert!(disposition.contains("vintage-round"));
    assert_eq!(body_bytes(response).await.as_ref(), &photo[..]);
}

#[tokio::test]
async fn test_unknown_try_on_model_is_rejected() {
    let mut client = FunnelClient::new();
    client
        .post_form(
            "/upgrade/signup",
            &[
                ("email", "ana@example.com"),
                ("password", "secret"),
                ("password_confirm", "secret"),
                ("plan", "monthly"),
            ],
        )
        .await;
    complete_questionnaire(&mut client, "Recife, PE").await;
    submit_photo(&mut client, &[1, 2, 3]).await;

    let response = client
        .post_json("/try-on/generate", &json!({ "model_id": 99 }))
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_download_without_render_redirects_to_try_on() {
    let mut client = FunnelClient::new();
    client
        .post_form(
            "/upgrade/signup",
            &[
                ("email", "ana@example.com"),
                ("password", "secret"),
                ("password_confirm", "secret"),
                ("plan", "monthly"),
            ],
        )
        .await;

    let response = client.get("/try-on/download").await;
    assert!(response.status().is_redirection());
    assert_eq!(location(&response), "/try-on");
}

#[tokio::test]
async fn test_premium_results_are_fully_unlocked() {
    let mut client = FunnelClient::new();
    client
        .post_form("/login", &[("email", "ana@example.com")])
        .await;
    complete_questionnaire(&mut client, "Recife, PE").await;
    submit_photo(&mut client, &[1, 2, 3]).await;
    client.post_form("/upgrade", &[("plan", "monthly")]).await;

    let view = body_json(client.get("/results").await).await;
    let items = view["recommendations"].as_array().expect("items");
    assert!(items.iter().all(|i| i["locked"] == false));
    assert_eq!(view["try_on"], "/try-on");
}
