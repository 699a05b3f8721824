//! Integration tests for FrameFit.
//!
//! The funnel is exercised in-process: [`FunnelClient`] drives the full
//! application router (session layer included) through `tower::ServiceExt`
//! and carries the session cookie between requests, so no server or
//! external state is needed. Simulated latencies are zeroed via the test
//! configuration.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p framefit-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{Request, Response, header};
use http_body_util::BodyExt;
use serde::Serialize;
use serde_json::Value;
use tower::ServiceExt;

use framefit_web::config::FunnelConfig;
use framefit_web::state::AppState;

/// An in-process funnel client that carries the session cookie.
pub struct FunnelClient {
    app: Router,
    cookie: Option<String>,
}

impl Default for FunnelClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FunnelClient {
    /// Build a fresh app with zeroed simulator delays and no session.
    #[must_use]
    pub fn new() -> Self {
        let state = AppState::new(FunnelConfig::for_tests());
        Self {
            app: framefit_web::app(state),
            cookie: None,
        }
    }

    /// Send one request, attaching and refreshing the session cookie.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be dispatched or the cookie header is
    /// malformed; both indicate a broken test setup.
    pub async fn send(&mut self, mut request: Request<Body>) -> Response<Body> {
        if let Some(cookie) = &self.cookie {
            request.headers_mut().insert(
                header::COOKIE,
                cookie.parse().expect("session cookie should be ASCII"),
            );
        }

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        if let Some(set_cookie) = response.headers().get(header::SET_COOKIE) {
            let raw = set_cookie
                .to_str()
                .expect("set-cookie header should be ASCII");
            // Keep only the name=value pair; attributes stay server-side.
            let pair = raw.split(';').next().unwrap_or(raw);
            self.cookie = Some(pair.to_owned());
        }

        response
    }

    /// GET a path.
    pub async fn get(&mut self, path: &str) -> Response<Body> {
        let request = Request::builder()
            .uri(path)
            .body(Body::empty())
            .expect("request should build");
        self.send(request).await
    }

    /// POST an empty body (transition endpoints).
    pub async fn post(&mut self, path: &str) -> Response<Body> {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .body(Body::empty())
            .expect("request should build");
        self.send(request).await
    }

    /// POST a urlencoded form.
    pub async fn post_form(&mut self, path: &str, fields: &[(&str, &str)]) -> Response<Body> {
        let body = fields
            .iter()
            .map(|(k, v)| format!("{}={}", form_encode(k), form_encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .expect("request should build");
        self.send(request).await
    }

    /// POST a JSON body.
    pub async fn post_json(&mut self, path: &str, body: &Value) -> Response<Body> {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request should build");
        self.send(request).await
    }

    /// POST one file as a multipart form field named `photo`.
    pub async fn post_multipart_photo(
        &mut self,
        path: &str,
        filename: &str,
        content_type: &str,
        bytes: &[u8],
    ) -> Response<Body> {
        const BOUNDARY: &str = "framefit-test-boundary";

        let mut body = Vec::new();
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"photo\"; filename=\"{filename}\"\r\n")
                .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
        body.extend_from_slice(bytes);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .expect("request should build");
        self.send(request).await
    }
}

/// Collect a response body as bytes.
///
/// # Panics
///
/// Panics if the body cannot be read.
pub async fn body_bytes(response: Response<Body>) -> Bytes {
    response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes()
}

/// Collect a response body as JSON.
///
/// # Panics
///
/// Panics if the body is not valid JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

/// Read the `Location` header of a redirect.
///
/// # Panics
///
/// Panics if the header is missing or not ASCII.
#[must_use]
pub fn location(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .expect("redirect should carry a Location header")
        .to_str()
        .expect("location should be ASCII")
        .to_owned()
}

/// The wire token a unit-variant enum serializes to.
///
/// # Panics
///
/// Panics if the value does not serialize to a plain string.
#[must_use]
pub fn enum_token<T: Serialize>(value: &T) -> String {
    serde_json::to_value(value)
        .expect("value should serialize")
        .as_str()
        .expect("unit variant should serialize to a string")
        .to_owned()
}

/// Drive the wizard from step 1 through final-step commit with a
/// representative answer set, asserting the commit redirect to capture.
///
/// # Panics
///
/// Panics if any transition does not behave as a complete pass should.
pub async fn complete_questionnaire(client: &mut FunnelClient, location_text: &str) {
    use framefit_core::{BudgetRange, FrameStyle, GlassesType, SkinTone, UsageActivity};

    let response = client
        .post_form("/questionnaire/answer", &[("location", location_text)])
        .await;
    assert!(response.status().is_success());
    assert!(client.post("/questionnaire/next").await.status().is_success());

    let steps: [(&str, String); 4] = [
        ("frame_style", enum_token(&FrameStyle::Modern)),
        ("glasses_type", enum_token(&GlassesType::Prescription)),
        ("skin_tone", enum_token(&SkinTone::Medium)),
        ("budget_range", enum_token(&BudgetRange::From300To600)),
    ];

    // Step 2, then the multi-select step 3, then steps 4-6.
    client
        .post_form("/questionnaire/answer", &[(steps[0].0, &steps[0].1)])
        .await;
    client.post("/questionnaire/next").await;

    client
        .post_form(
            "/questionnaire/toggle",
            &[("activity", &enum_token(&UsageActivity::Reading))],
        )
        .await;
    client.post("/questionnaire/next").await;

    for (field, token) in &steps[1..3] {
        client
            .post_form("/questionnaire/answer", &[(*field, token)])
            .await;
        client.post("/questionnaire/next").await;
    }

    client
        .post_form("/questionnaire/answer", &[(steps[3].0, &steps[3].1)])
        .await;
    let committed = client.post("/questionnaire/next").await;
    assert!(committed.status().is_redirection(), "final step commits");
    assert_eq!(location(&committed), "/capture");
}

/// Submit a camera frame built from the given bytes and assert the
/// redirect to results. Returns the data URL that was submitted.
///
/// # Panics
///
/// Panics if the submission is not accepted.
pub async fn submit_photo(client: &mut FunnelClient, bytes: &[u8]) -> String {
    use framefit_core::ImagePayload;

    let data_url = ImagePayload::from_bytes("image/jpeg", bytes.to_vec()).to_data_url();
    let response = client
        .post_json("/capture/frame", &serde_json::json!({ "image": data_url }))
        .await;

    assert!(response.status().is_redirection());
    assert_eq!(location(&response), "/results");
    data_url
}

/// Minimal x-www-form-urlencoded escaping for the characters our test
/// inputs actually contain.
fn form_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            ' ' => out.push('+'),
            '%' => out.push_str("%25"),
            '&' => out.push_str("%26"),
            '=' => out.push_str("%3D"),
            '+' => out.push_str("%2B"),
            _ => out.push(ch),
        }
    }
    out
}
