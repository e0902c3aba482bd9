use std::sync::Arc;

use chrono::{Duration as ChronoDuration, NaiveDateTime, Utc};
use gauchorecords_api::app::{build_app, AppStores};
use gauchorecords_auth::{Role, SessionClaims};
use gauchorecords_domain::{Article, UcsbDiningCommonsMenuItem};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use reqwest::StatusCode;
use serde_json::{json, Value};

const JWT_SECRET: &str = "test-secret";
const CSRF_HEADER: &str = "X-XSRF-TOKEN";

struct TestServer {
    base_url: String,
    stores: Arc<AppStores>,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, in-memory stores, ephemeral port.
        let stores = Arc::new(AppStores::in_memory());
        let app = build_app(JWT_SECRET.to_string(), stores.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            stores,
            handle,
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn mint_jwt(roles: Vec<Role>) -> String {
    let now = Utc::now();
    let claims = SessionClaims {
        sub: "cgaucho@ucsb.edu".to_string(),
        roles,
        iat: now.timestamp(),
        exp: (now + ChronoDuration::minutes(10)).timestamp(),
    };

    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
    .expect("failed to encode jwt")
}

fn user_token() -> String {
    mint_jwt(vec![Role::user()])
}

fn admin_token() -> String {
    mint_jwt(vec![Role::user(), Role::admin()])
}

fn admin_only_token() -> String {
    mint_jwt(vec![Role::admin()])
}

fn datetime(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
}

#[tokio::test]
async fn health_is_open() {
    let srv = TestServer::spawn().await;

    let res = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn anonymous_cannot_list_articles() {
    let srv = TestServer::spawn().await;

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/api/articles/all", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn user_sees_all_articles_in_store_order() {
    let srv = TestServer::spawn().await;

    let first = Article::new(
        "New Movies in 2023",
        "https://editorial.rottentomatoes.com/article/most-anticipated-movies-of-2023/",
        "Useful list of new movies",
        "randomEmail@ucsb.edu",
        datetime("2022-01-03T00:00:00"),
    );
    let second = Article::new(
        "Using testing-playground with React Testing Library",
        "https://dev.to/katieraby/using-testing-playground-with-react-testing-library-26j7",
        "Helpful when we get to front end development",
        "phtcon@ucsb.edu",
        datetime("2022-04-20T00:00:00"),
    );
    let saved1 = srv.stores.articles.save(first).await.unwrap();
    let saved2 = srv.stores.articles.save(second).await.unwrap();

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/api/articles/all", srv.base_url))
        .bearer_auth(user_token())
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::to_value(vec![saved1, saved2]).unwrap()
    );
}

#[tokio::test]
async fn list_is_idempotent_without_writes() {
    let srv = TestServer::spawn().await;
    srv.stores
        .menu_items
        .save(UcsbDiningCommonsMenuItem::new(
            "Cream of Broccoli Soup (v)",
            "portola",
            "Greens & Grains",
        ))
        .await
        .unwrap();

    let client = reqwest::Client::new();
    let url = format!("{}/api/ucsbdiningcommonsmenuitem/all", srv.base_url);

    let once: Value = client
        .get(&url)
        .bearer_auth(user_token())
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let twice: Value = client
        .get(&url)
        .bearer_auth(user_token())
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(once, twice);
}

#[tokio::test]
async fn empty_list_is_an_empty_json_array() {
    let srv = TestServer::spawn().await;

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/api/helprequest/all", srv.base_url))
        .bearer_auth(user_token())
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn admin_can_post_article_and_user_can_read_it_back() {
    let srv = TestServer::spawn().await;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/api/articles/post", srv.base_url))
        .bearer_auth(admin_token())
        .header(CSRF_HEADER, "test-csrf")
        .query(&[
            ("title", "New movies"),
            ("url", "https://collider.com/the-crown-season-6-trailer/"),
            ("explanation", "a new movie trailer"),
            ("email", "garretthu@ucsb.edu"),
            ("dateAdded", "2022-01-03T00:00:00"),
        ])
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let created: Value = res.json().await.unwrap();
    assert_eq!(created["id"], 1);
    assert_eq!(created["title"], "New movies");
    assert_eq!(created["dateAdded"], "2022-01-03T00:00:00");

    // Round-trip: get-by-id returns exactly the persisted record.
    let res = client
        .get(format!("{}/api/articles", srv.base_url))
        .bearer_auth(user_token())
        .query(&[("id", "1")])
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let fetched: Value = res.json().await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn missing_article_yields_canonical_not_found_envelope() {
    let srv = TestServer::spawn().await;

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/api/articles", srv.base_url))
        .bearer_auth(user_token())
        .query(&[("id", "7")])
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "type": "EntityNotFoundException",
            "message": "Article with id 7 not found",
        })
    );
}

#[tokio::test]
async fn admin_can_post_menu_item_with_reserved_characters() {
    let srv = TestServer::spawn().await;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/api/ucsbdiningcommonsmenuitem/post", srv.base_url))
        .bearer_auth(admin_token())
        .header(CSRF_HEADER, "test-csrf")
        .query(&[
            ("diningCommonsCode", "ortega"),
            ("name", "Tofu Banh Mi Sandwich (v)"),
            ("station", "Entree Special"),
        ])
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let created: Value = res.json().await.unwrap();
    assert_eq!(created["name"], "Tofu Banh Mi Sandwich (v)");
    assert_eq!(created["diningCommonsCode"], "ortega");
    assert_eq!(created["station"], "Entree Special");

    // Stored verbatim, echoed verbatim.
    let id = created["id"].as_i64().unwrap().to_string();
    let fetched: Value = client
        .get(format!("{}/api/ucsbdiningcommonsmenuitem", srv.base_url))
        .bearer_auth(user_token())
        .query(&[("id", id.as_str())])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn missing_menu_item_names_the_entity_in_the_envelope() {
    let srv = TestServer::spawn().await;

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/api/ucsbdiningcommonsmenuitem", srv.base_url))
        .bearer_auth(user_token())
        .query(&[("id", "7")])
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["type"], "EntityNotFoundException");
    assert_eq!(
        body["message"],
        "UCSBDiningCommonsMenuItem with id 7 not found"
    );
}

#[tokio::test]
async fn authorization_matrix_for_every_route() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let bases = [
        "articles",
        "helprequest",
        "recommendationrequests",
        "ucsbdiningcommonsmenuitem",
        "ucsbdates",
    ];

    // (token, may_read, may_create)
    let principals: [(Option<String>, bool, bool); 4] = [
        (None, false, false),
        (Some(user_token()), true, false),
        (Some(admin_only_token()), false, true),
        (Some(admin_token()), true, true),
    ];

    for base in bases {
        for (token, may_read, may_create) in &principals {
            let mut req = client.get(format!("{}/api/{}/all", srv.base_url, base));
            if let Some(token) = token {
                req = req.bearer_auth(token);
            }
            let status = req.send().await.unwrap().status();
            if *may_read {
                assert_eq!(status, StatusCode::OK, "list-all on {base}");
            } else {
                assert_eq!(status, StatusCode::FORBIDDEN, "list-all on {base}");
            }

            // Create with a CSRF token but no parameters: authorization is
            // checked before binding, so denial is 403 and grant is 400.
            let mut req = client
                .post(format!("{}/api/{}/post", srv.base_url, base))
                .header(CSRF_HEADER, "test-csrf");
            if let Some(token) = token {
                req = req.bearer_auth(token);
            }
            let status = req.send().await.unwrap().status();
            if *may_create {
                assert_eq!(status, StatusCode::BAD_REQUEST, "create on {base}");
            } else {
                assert_eq!(status, StatusCode::FORBIDDEN, "create on {base}");
            }
        }
    }
}

#[tokio::test]
async fn post_without_csrf_token_is_forbidden_even_for_admin() {
    let srv = TestServer::spawn().await;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/api/ucsbdiningcommonsmenuitem/post", srv.base_url))
        .bearer_auth(admin_token())
        .query(&[
            ("diningCommonsCode", "ortega"),
            ("name", "Tofu Banh Mi Sandwich (v)"),
            ("station", "Entree Special"),
        ])
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn non_numeric_id_is_a_bad_request_not_a_not_found() {
    let srv = TestServer::spawn().await;

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/api/articles", srv.base_url))
        .bearer_auth(user_token())
        .query(&[("id", "seven")])
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_timestamps_are_rejected_with_400() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for bad in ["2022-13-01T00:00:00", "2022-01-01 00:00:00", ""] {
        let res = client
            .post(format!("{}/api/articles/post", srv.base_url))
            .bearer_auth(admin_token())
            .header(CSRF_HEADER, "test-csrf")
            .query(&[
                ("title", "t"),
                ("url", "u"),
                ("explanation", "e"),
                ("email", "m"),
                ("dateAdded", bad),
            ])
            .send()
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "dateAdded={bad:?}");
        let body: Value = res.json().await.unwrap();
        assert!(
            body["message"].as_str().unwrap().contains("dateAdded"),
            "message should name the offending parameter: {body}"
        );
    }
}

#[tokio::test]
async fn missing_required_parameter_is_named_in_the_message() {
    let srv = TestServer::spawn().await;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/api/helprequest/post", srv.base_url))
        .bearer_auth(admin_token())
        .header(CSRF_HEADER, "test-csrf")
        .query(&[
            ("requesterEmail", "user@ucsb.edu"),
            ("teamId", "s22-5pm-3"),
            // tableOrBreakoutRoom intentionally absent
            ("requestTime", "2022-04-20T17:35:00"),
            ("explanation", "Need help with Swagger-ui"),
            ("solved", "false"),
        ])
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["type"], "MissingParameter");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("tableOrBreakoutRoom"));
}

#[tokio::test]
async fn bad_boolean_literal_is_rejected() {
    let srv = TestServer::spawn().await;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/api/helprequest/post", srv.base_url))
        .bearer_auth(admin_token())
        .header(CSRF_HEADER, "test-csrf")
        .query(&[
            ("requesterEmail", "user@ucsb.edu"),
            ("teamId", "s22-5pm-3"),
            ("tableOrBreakoutRoom", "7"),
            ("requestTime", "2022-04-20T17:35:00"),
            ("explanation", "Need help with Swagger-ui"),
            ("solved", "yes"),
        ])
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn duplicate_parameters_resolve_to_the_last_value() {
    let srv = TestServer::spawn().await;
    srv.stores
        .articles
        .save(Article::new(
            "kept",
            "u",
            "e",
            "m@ucsb.edu",
            datetime("2022-01-03T00:00:00"),
        ))
        .await
        .unwrap();

    let client = reqwest::Client::new();
    // id=1 exists; the later id=7 wins and is missing.
    let res = client
        .get(format!("{}/api/articles?id=1&id=7", srv.base_url))
        .bearer_auth(user_token())
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Article with id 7 not found");
}

#[tokio::test]
async fn unknown_parameters_are_ignored() {
    let srv = TestServer::spawn().await;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/api/ucsbdates/post", srv.base_url))
        .bearer_auth(admin_token())
        .header(CSRF_HEADER, "test-csrf")
        .query(&[
            ("quarterYYYYQ", "20222"),
            ("name", "Last day of classes"),
            ("localDateTime", "2022-06-03T00:00:00"),
            ("confetti", "definitely"),
        ])
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let created: Value = res.json().await.unwrap();
    assert_eq!(created["quarterYYYYQ"], "20222");
    assert!(created.get("confetti").is_none());
}

#[tokio::test]
async fn current_user_echoes_roles() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/currentUser", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = client
        .get(format!("{}/api/currentUser", srv.base_url))
        .bearer_auth(admin_token())
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["user"], "cgaucho@ucsb.edu");
    assert_eq!(body["roles"], json!(["USER", "ADMIN"]));
}
