#![allow(clippy::unwrap_used, clippy::expect_used)]

use base64::Engine;
use http::{Method, Request, Response, StatusCode, header};
use http_body_util::{BodyExt, Full};
use hyper::{body::Bytes, service::service_fn};
use hyper_util::rt::TokioIo;
use postboard_client::{ApiClient, Error, Upload};
use postboard_core::{
    forms::{ChangePassword, LoginForm, NewPost, RegisterForm},
    session::{MemoryTokenStore, TokenStore},
};
use serde_json::{Value, json};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use tokio::net::TcpListener;

const PASSWORD: &str = "Abcdef1!";

struct MockState {
    token: String,
    requests: AtomicUsize,
    feed_requests: AtomicUsize,
    feed_pages: Mutex<Vec<u64>>,
    /// Feed page answered with a 500 once, then served normally.
    failing_page: Mutex<Option<u64>>,
    last_upload: Mutex<Option<(String, String)>>,
}

impl MockState {
    fn new() -> Self {
        let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
        let token = format!(
            "{}.{}.{}",
            engine.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            engine.encode(r#"{"id":7,"email":"ada@example.com"}"#),
            engine.encode("sig")
        );
        Self {
            token,
            requests: AtomicUsize::new(0),
            feed_requests: AtomicUsize::new(0),
            feed_pages: Mutex::new(Vec::new()),
            failing_page: Mutex::new(None),
            last_upload: Mutex::new(None),
        }
    }
}

fn json_response(status: StatusCode, body: &Value) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Full::new(Bytes::from(
            serde_json::to_vec(body).expect("failed to serialize json"),
        )))
        .expect("failed to build response")
}

fn feed_post(id: u64) -> Value {
    json!({
        "id": id,
        "userid": 7,
        "firstname": "Ada",
        "lastname": "Lovelace",
        "email": "ada@example.com",
        "profile": "ada.png",
        "name": format!("Post {id}"),
        "description": "<p>hello</p>",
        "imgs": [format!("{id}.png")],
        "created_at": "2024-05-01T10:00:00Z"
    })
}

fn query_page(query: &str) -> u64 {
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix("page="))
        .and_then(|value| value.parse().ok())
        .unwrap_or(1)
}

async fn mock_api(
    req: Request<hyper::body::Incoming>,
    state: Arc<MockState>,
) -> Result<Response<Full<Bytes>>, hyper::Error> {
    state.requests.fetch_add(1, Ordering::SeqCst);

    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let query = req.uri().query().unwrap_or_default().to_string();
    let expected = format!("Bearer {}", state.token);
    let authorized = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        == Some(expected.as_str());
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let body = req.into_body().collect().await?.to_bytes();

    if method == Method::POST && path == "/api/login" {
        let credentials: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        if credentials.get("password").and_then(Value::as_str) == Some(PASSWORD) {
            return Ok(json_response(
                StatusCode::OK,
                &json!({ "token": state.token }),
            ));
        }
        return Ok(json_response(
            StatusCode::UNAUTHORIZED,
            &json!({ "message": "Invalid email or password" }),
        ));
    }

    if method == Method::POST && path == "/api/register" {
        return Ok(json_response(
            StatusCode::BAD_REQUEST,
            &json!({ "message": "Email already exists" }),
        ));
    }

    if !authorized {
        return Ok(json_response(
            StatusCode::UNAUTHORIZED,
            &json!({ "message": "Unauthorized" }),
        ));
    }

    if method == Method::GET && path == "/api/getPosts" {
        state.feed_requests.fetch_add(1, Ordering::SeqCst);
        let page = query_page(&query);
        state.feed_pages.lock().unwrap().push(page);
        {
            let mut failing = state.failing_page.lock().unwrap();
            if *failing == Some(page) {
                *failing = None;
                return Ok(json_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    &json!({ "message": "Database unavailable" }),
                ));
            }
        }
        let count = if page < 3 { 3 } else { 1 };
        let posts: Vec<Value> = (0..count).map(|i| feed_post((page - 1) * 3 + i + 1)).collect();
        return Ok(json_response(StatusCode::OK, &json!({ "posts": posts })));
    }

    if method == Method::GET && path == "/api/users" {
        let users = json!([
            { "id": 1, "firstname": "Ada", "lastname": "Lovelace", "email": "ada@example.com", "ph": "1" },
            { "id": 2, "firstname": "Grace", "lastname": "Hopper", "email": "grace@example.com", "ph": "2" },
            { "id": 3, "firstname": "Alan", "lastname": "Turing", "email": "alan@example.com", "ph": "3" }
        ]);
        return Ok(json_response(
            StatusCode::OK,
            &json!({ "users": users, "totalUsers": 7 }),
        ));
    }

    if method == Method::DELETE && path == "/api/deletepost/5" {
        return Ok(json_response(
            StatusCode::OK,
            &json!({ "message": "Post deleted" }),
        ));
    }

    if method == Method::PUT && path == "/api/changePassword/7" {
        return Ok(json_response(
            StatusCode::OK,
            &json!({ "status": false, "message": "Old password is incorrect" }),
        ));
    }

    if method == Method::POST && path == "/api/post" {
        let text = String::from_utf8_lossy(&body).to_string();
        *state.last_upload.lock().unwrap() = Some((content_type, text));
        return Ok(json_response(
            StatusCode::CREATED,
            &json!({ "message": "Post created" }),
        ));
    }

    Ok(json_response(
        StatusCode::NOT_FOUND,
        &json!({ "message": "path not found" }),
    ))
}

async fn spawn_api(state: Arc<MockState>) -> anyhow::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                break;
            };
            let state = Arc::clone(&state);
            tokio::spawn(async move {
                let service = service_fn(move |req| mock_api(req, Arc::clone(&state)));
                if let Err(err) = hyper::server::conn::http1::Builder::new()
                    .serve_connection(TokioIo::new(stream), service)
                    .await
                {
                    eprintln!("Error serving connection: {err:?}");
                }
            });
        }
    });

    Ok(format!("http://{addr}"))
}

async fn signed_in_client(
    state: &Arc<MockState>,
) -> anyhow::Result<ApiClient<MemoryTokenStore>> {
    let base_url = spawn_api(Arc::clone(state)).await?;
    let client = ApiClient::new(&base_url, MemoryTokenStore::default())?;
    client
        .login(&LoginForm {
            email: "ada@example.com".to_string(),
            password: PASSWORD.to_string(),
        })
        .await?;
    Ok(client)
}

#[tokio::test]
async fn login_stores_token_and_feed_stops_after_short_page() -> anyhow::Result<()> {
    let state = Arc::new(MockState::new());
    let client = signed_in_client(&state).await?;
    assert_eq!(client.store().token().as_deref(), Some(state.token.as_str()));
    assert_eq!(client.current_user_id()?, 7);

    let mut feed = client.feed();
    let items = feed.load_pages(None).await?;
    assert_eq!(items.len(), 7);
    assert_eq!(items[0].post.name, "Post 1");
    assert_eq!(items[6].post.id, 7);
    assert_eq!(state.feed_requests.load(Ordering::SeqCst), 3);

    // Exhausted: no further requests.
    assert_eq!(feed.load_more().await?, 0);
    assert!(!feed.has_more());
    assert_eq!(state.feed_requests.load(Ordering::SeqCst), 3);
    Ok(())
}

#[tokio::test]
async fn load_pages_honours_page_budget() -> anyhow::Result<()> {
    let state = Arc::new(MockState::new());
    let client = signed_in_client(&state).await?;

    let mut feed = client.feed();
    assert_eq!(feed.load_pages(Some(1)).await?.len(), 3);
    assert!(feed.has_more());
    assert_eq!(state.feed_requests.load(Ordering::SeqCst), 1);
    Ok(())
}

#[tokio::test]
async fn failed_feed_page_is_surfaced_and_requested_again() -> anyhow::Result<()> {
    let state = Arc::new(MockState::new());
    let client = signed_in_client(&state).await?;
    *state.failing_page.lock().unwrap() = Some(2);

    let mut feed = client.feed();
    assert_eq!(feed.load_more().await?, 3);

    match feed.load_more().await {
        Err(Error::Http { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "Database unavailable");
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(feed.items().len(), 3);
    assert!(feed.has_more());

    assert_eq!(feed.load_more().await?, 3);
    assert_eq!(feed.items().len(), 6);
    assert_eq!(*state.feed_pages.lock().unwrap(), vec![1, 2, 2]);
    Ok(())
}

#[tokio::test]
async fn rejected_login_stores_nothing() -> anyhow::Result<()> {
    let state = Arc::new(MockState::new());
    let base_url = spawn_api(Arc::clone(&state)).await?;
    let client = ApiClient::new(&base_url, MemoryTokenStore::default())?;

    let result = client
        .login(&LoginForm {
            email: "ada@example.com".to_string(),
            password: "Wrong1!pw".to_string(),
        })
        .await;

    match result {
        Err(Error::Http { status, message }) => {
            assert_eq!(status, 401);
            assert_eq!(message, "Invalid email or password");
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(client.store().token(), None);
    Ok(())
}

#[tokio::test]
async fn invalid_forms_never_reach_the_api() -> anyhow::Result<()> {
    let state = Arc::new(MockState::new());
    let base_url = spawn_api(Arc::clone(&state)).await?;
    let client = ApiClient::new(&base_url, MemoryTokenStore::default())?;

    let result = client
        .login(&LoginForm {
            email: "ada".to_string(),
            password: "abc".to_string(),
        })
        .await;
    assert!(matches!(result, Err(Error::Invalid(_))));

    let result = client.list_posts(1, 3).await;
    assert!(matches!(result, Err(Error::NotAuthenticated)));

    assert_eq!(state.requests.load(Ordering::SeqCst), 0);
    Ok(())
}

#[tokio::test]
async fn register_surfaces_server_message() -> anyhow::Result<()> {
    let state = Arc::new(MockState::new());
    let base_url = spawn_api(Arc::clone(&state)).await?;
    let client = ApiClient::new(&base_url, MemoryTokenStore::default())?;

    let form = RegisterForm::<Upload> {
        firstname: "Ada".to_string(),
        lastname: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        password: PASSWORD.to_string(),
        phone: "5551234".to_string(),
        profile: None,
    };
    let err = client.register(form).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "request failed (400): Email already exists"
    );
    Ok(())
}

#[tokio::test]
async fn change_password_rejection_is_an_error() -> anyhow::Result<()> {
    let state = Arc::new(MockState::new());
    let client = signed_in_client(&state).await?;

    let form = ChangePassword {
        old_password: "Wrong1!pw".to_string(),
        new_password: "Newpass1!".to_string(),
        confirm_password: "Newpass1!".to_string(),
    };
    match client.change_password(&form).await {
        Err(Error::Rejected(message)) => assert_eq!(message, "Old password is incorrect"),
        other => panic!("unexpected result: {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn create_post_uploads_multipart() -> anyhow::Result<()> {
    let state = Arc::new(MockState::new());
    let client = signed_in_client(&state).await?;

    let form = NewPost {
        name: "Trip".to_string(),
        description: "<p>Day one</p>".to_string(),
        images: vec![Upload::new("a.png", "image/png", b"\x89PNG".to_vec())],
    };
    client.create_post(form).await?;

    let (content_type, body) = state.last_upload.lock().unwrap().clone().unwrap();
    assert!(content_type.starts_with("multipart/form-data"));
    assert!(body.contains(r#"name="name""#));
    assert!(body.contains(r#"name="postImgs"; filename="a.png""#));
    assert!(body.contains("<p>Day one</p>"));
    Ok(())
}

#[tokio::test]
async fn delete_then_drop_from_feed() -> anyhow::Result<()> {
    let state = Arc::new(MockState::new());
    let client = signed_in_client(&state).await?;

    let mut feed = client.feed();
    feed.load_pages(Some(2)).await?;
    client.delete_post(5).await?;
    assert!(feed.remove(5).is_some());
    assert!(feed.items().iter().all(|item| item.post.id != 5));

    assert!(matches!(
        client.delete_post(6).await,
        Err(Error::Http { status: 404, .. })
    ));
    Ok(())
}

#[tokio::test]
async fn users_page_reports_total() -> anyhow::Result<()> {
    let state = Arc::new(MockState::new());
    let client = signed_in_client(&state).await?;

    let page = client.list_users(1).await?;
    assert_eq!(page.users.len(), 3);
    assert_eq!(page.total_users, 7);
    assert_eq!(page.users[1].phone, "2");
    Ok(())
}

#[tokio::test]
async fn logout_clears_token() -> anyhow::Result<()> {
    let state = Arc::new(MockState::new());
    let client = signed_in_client(&state).await?;

    client.logout()?;
    assert!(matches!(
        client.list_users(1).await,
        Err(Error::NotAuthenticated)
    ));
    Ok(())
}
