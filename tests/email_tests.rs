
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use parking_lot::Mutex;
use portfolio_api::{
    email::resend::ResendMailer,
    entities::contact::ContactSubmission,
    errors::DispatchError,
    repositories::email::EmailServiceRepository,
    settings::AppConfig,
};
use serde_json::Value;
use std::{net::TcpListener, sync::Arc, time::Duration};
use test_utils::test_config;

#[derive(Clone)]
struct FakeProvider {
    status: u16,
    delay: Duration,
    received: Arc<Mutex<Vec<(Option<String>, Value)>>>,
}

async fn accept_email(
    req: HttpRequest,
    provider: web::Data<FakeProvider>,
    body: web::Json<Value>,
) -> HttpResponse {
    tokio::time::sleep(provider.delay).await;

    let auth = req
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    provider.received.lock().push((auth, body.into_inner()));

    HttpResponse::build(actix_web::http::StatusCode::from_u16(provider.status).unwrap())
        .json(serde_json::json!({ "id": "email_123" }))
}

/// Starts a stand-in for the provider API and returns its base URL.
fn spawn_provider(provider: FakeProvider) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(provider.clone()))
            .route("/emails", web::post().to(accept_email))
    })
    .listen(listener)
    .expect("Failed to bind fake provider")
    .workers(1)
    .disable_signals()
    .run();

    tokio::spawn(server);
    format!("http://127.0.0.1:{}", port)
}

fn provider(status: u16, delay: Duration) -> FakeProvider {
    FakeProvider {
        status,
        delay,
        received: Arc::new(Mutex::new(Vec::new())),
    }
}

fn mailer_for(base_url: String, timeout_secs: u64) -> ResendMailer {
    let config = AppConfig {
        email_api_url: base_url,
        email_timeout_secs: timeout_secs,
        ..test_config()
    };
    ResendMailer::new(&config).expect("Mailer should build")
}

fn submission() -> ContactSubmission {
    ContactSubmission {
        name: "Ada <Lovelace>".to_string(),
        email: "ada@example.com".to_string(),
        message: "Line one\nLine two & more".to_string(),
    }
}

#[actix_rt::test]
async fn posts_notification_with_bearer_token() {
    let fake = provider(200, Duration::ZERO);
    let received = fake.received.clone();
    let mailer = mailer_for(spawn_provider(fake), 5);

    mailer.send(&submission()).await.expect("Provider accepted the message");

    let received = received.lock();
    assert_eq!(received.len(), 1);
    let (auth, body) = &received[0];
    assert_eq!(auth.as_deref(), Some("Bearer re_test_key"));
    assert_eq!(body["from"], "onboarding@resend.dev");
    assert_eq!(body["to"], serde_json::json!(["owner@example.com"]));
    assert_eq!(body["reply_to"], "ada@example.com");
    assert_eq!(body["subject"], "Portfolio Contact: Message from Ada <Lovelace>");

    let html = body["html"].as_str().unwrap();
    assert!(html.contains("Ada &lt;Lovelace&gt; (ada@example.com)"));
    assert!(html.contains("Line one<br>Line two &amp; more"));
}

#[actix_rt::test]
async fn non_success_status_is_rejected() {
    let mailer = mailer_for(spawn_provider(provider(422, Duration::ZERO)), 5);

    match mailer.send(&submission()).await {
        Err(DispatchError::Rejected { status, body }) => {
            assert_eq!(status, 422);
            assert!(body.contains("email_123"));
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[actix_rt::test]
async fn slow_provider_times_out() {
    let mailer = mailer_for(spawn_provider(provider(200, Duration::from_secs(3))), 1);

    let result = mailer.send(&submission()).await;

    assert!(matches!(result, Err(DispatchError::Timeout)), "got {result:?}");
}

#[actix_rt::test]
async fn unreachable_provider_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let mailer = mailer_for(format!("http://127.0.0.1:{}", port), 5);

    let result = mailer.send(&submission()).await;

    assert!(matches!(result, Err(DispatchError::Transport(_))), "got {result:?}");
}

#[test]
fn endpoint_joins_base_url() {
    let mailer = mailer_for("https://api.resend.com/".to_string(), 5);
    assert_eq!(mailer.endpoint().as_str(), "https://api.resend.com/emails");
}
