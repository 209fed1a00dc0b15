mod common;

use easypanel_mcp::client::{CallKind, JsonObject, PanelClient};
use easypanel_mcp::error::{ErrorCategory, PanelError};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use common::{authorization, object, panel, query_input, requests, success};

#[tokio::test]
async fn query_sends_wrapped_input_in_the_url() {
    let (server, client) = panel(None).await;
    Mock::given(method("GET"))
        .and(path("/api/trpc/projects.inspectProject"))
        .and(query_param("input", r#"{"json":{"projectName":"shop & co"}}"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!({ "name": "shop" }))))
        .expect(1)
        .mount(&server)
        .await;

    let input = object(json!({ "projectName": "shop & co" }));
    let value = client
        .query("projects.inspectProject", Some(&input))
        .await
        .expect("query succeeds");
    assert_eq!(value, json!({ "name": "shop" }));

    let recorded = requests(&server).await;
    let raw_query = recorded[0].url.query().expect("query string present");
    assert!(raw_query.starts_with("input=%7B%22json%22%3A"), "{raw_query}");
    assert!(!raw_query.contains(' '));
    assert_eq!(
        query_input(&recorded[0]),
        Some(json!({ "json": { "projectName": "shop & co" } }))
    );
}

#[tokio::test]
async fn query_without_input_sends_no_query_string() {
    let (server, client) = panel(None).await;
    Mock::given(method("GET"))
        .and(path("/api/trpc/projects.listProjects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!([]))))
        .mount(&server)
        .await;

    let value = client
        .query("projects.listProjects", None)
        .await
        .expect("query succeeds");
    assert_eq!(value, json!([]));

    let recorded = requests(&server).await;
    assert_eq!(recorded[0].url.query(), None);
    assert_eq!(authorization(&recorded[0]), None);
}

#[tokio::test]
async fn empty_input_object_still_sends_a_query_string() {
    let (server, client) = panel(None).await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!(1))))
        .mount(&server)
        .await;

    client
        .query("settings.getServerIp", Some(&JsonObject::new()))
        .await
        .expect("query succeeds");

    let recorded = requests(&server).await;
    assert_eq!(query_input(&recorded[0]), Some(json!({ "json": {} })));
}

#[tokio::test]
async fn mutation_posts_wrapped_body_with_length() {
    let (server, client) = panel(Some("static-token")).await;
    Mock::given(method("POST"))
        .and(path("/api/trpc/app.deployService"))
        .and(header("content-type", "application/json"))
        .and(header("authorization", "Bearer static-token"))
        .and(body_json(json!({ "json": { "projectName": "shop", "serviceName": "web" } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(Value::Null)))
        .expect(1)
        .mount(&server)
        .await;

    let input = object(json!({ "projectName": "shop", "serviceName": "web" }));
    let value = client
        .mutation("app.deployService", &input)
        .await
        .expect("mutation succeeds");
    assert_eq!(value, Value::Null);

    let recorded = requests(&server).await;
    let length = recorded[0]
        .headers
        .get("content-length")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<usize>().ok());
    assert_eq!(length, Some(recorded[0].body.len()));
}

#[tokio::test]
async fn falsy_success_values_are_returned_verbatim() {
    let (server, client) = panel(None).await;
    let values = [
        Value::Null,
        json!(0),
        json!(false),
        json!(""),
        json!([]),
        json!({}),
    ];
    for (index, value) in values.iter().enumerate() {
        Mock::given(method("GET"))
            .and(path(format!("/api/trpc/probe.value{index}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(success(value.clone())))
            .mount(&server)
            .await;
    }

    for (index, expected) in values.iter().enumerate() {
        let value = client
            .query(&format!("probe.value{index}"), None)
            .await
            .expect("falsy payload is still a success");
        assert_eq!(&value, expected);
    }
}

#[tokio::test]
async fn error_envelopes_become_rpc_errors() {
    let (server, client) = panel(None).await;
    let cases = [
        (json!({ "error": { "json": { "message": "boom" } } }), "boom"),
        (json!({ "error": { "message": "plain" } }), "plain"),
        (json!({ "error": { "code": 42 } }), r#"{"code":42}"#),
    ];
    for (index, (body, _)) in cases.iter().enumerate() {
        Mock::given(method("GET"))
            .and(path(format!("/api/trpc/probe.error{index}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .mount(&server)
            .await;
    }

    for (index, (_, expected)) in cases.iter().enumerate() {
        let err = client
            .query(&format!("probe.error{index}"), None)
            .await
            .expect_err("error envelope");
        match err {
            PanelError::Rpc { message } => assert_eq!(message, *expected),
            other => panic!("expected Rpc, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn error_envelope_wins_regardless_of_http_status() {
    let (server, client) = panel(None).await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "error": { "json": { "message": "denied" } } })),
        )
        .mount(&server)
        .await;

    let err = client
        .mutation("projects.destroyProject", &JsonObject::new())
        .await
        .expect_err("remote error");
    assert_eq!(err.to_string(), "tRPC error: denied");
}

#[tokio::test]
async fn unexpected_shapes_pass_through() {
    let (server, client) = panel(None).await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true, "error": false })))
        .mount(&server)
        .await;

    let value = client.query("custom.shape", None).await.expect("passthrough");
    assert_eq!(value, json!({ "ok": true, "error": false }));
}

#[tokio::test]
async fn non_json_body_is_a_protocol_error_with_bounded_excerpt() {
    let (server, client) = panel(None).await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("x".repeat(1000)))
        .mount(&server)
        .await;

    let err = client.query("monitor.getSystemStats", None).await.expect_err("protocol");
    assert_eq!(err.category(), ErrorCategory::Protocol);
    match err {
        PanelError::Protocol { excerpt } => assert_eq!(excerpt.len(), 500),
        other => panic!("expected Protocol, got {other:?}"),
    }
}

#[tokio::test]
async fn login_stores_token_for_later_calls() {
    let (server, client) = panel(None).await;
    Mock::given(method("POST"))
        .and(path("/api/trpc/auth.login"))
        .and(body_json(json!({ "json": { "email": "admin@example.com", "password": "pw" } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!({ "token": "tok123" }))))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/trpc/auth.getUser"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!({ "id": 1 }))))
        .mount(&server)
        .await;

    client.query("auth.getUser", None).await.expect("anonymous call");
    let shared = client.clone();
    let token = client
        .login("admin@example.com", "pw")
        .await
        .expect("login succeeds");
    assert_eq!(token, "tok123");
    assert_eq!(shared.credential().as_deref(), Some("tok123"));

    shared.query("auth.getUser", None).await.expect("authenticated call");

    let recorded = requests(&server).await;
    let user_calls: Vec<_> = recorded
        .iter()
        .filter(|request| request.url.path() == "/api/trpc/auth.getUser")
        .collect();
    assert_eq!(authorization(user_calls[0]), None);
    assert_eq!(authorization(user_calls[1]).as_deref(), Some("Bearer tok123"));
}

#[tokio::test]
async fn failed_login_keeps_the_previous_credential() {
    let (server, client) = panel(Some("old-token")).await;
    Mock::given(method("POST"))
        .and(path("/api/trpc/auth.login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "error": { "json": { "message": "bad password" } } })),
        )
        .mount(&server)
        .await;

    let err = client.login("admin@example.com", "wrong").await.expect_err("rejected");
    assert!(matches!(err, PanelError::Rpc { .. }));
    assert_eq!(client.credential().as_deref(), Some("old-token"));
}

#[tokio::test]
async fn login_result_without_token_is_a_protocol_error() {
    let (server, client) = panel(None).await;
    Mock::given(method("POST"))
        .and(path("/api/trpc/auth.login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!({ "twoFactor": true }))))
        .mount(&server)
        .await;

    let err = client.login("admin@example.com", "pw").await.expect_err("no token");
    assert_eq!(err.category(), ErrorCategory::Protocol);
    assert!(!client.has_credential());
}

#[tokio::test]
async fn empty_token_counts_as_absent() {
    let (server, client) = panel(Some("")).await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!(true))))
        .mount(&server)
        .await;

    client.query("auth.getSession", None).await.expect("query succeeds");
    assert_eq!(authorization(&requests(&server).await[0]), None);
}

#[tokio::test]
async fn unsendable_token_fails_before_any_request() {
    let (server, client) = panel(Some("tok\nevil")).await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!(true))))
        .mount(&server)
        .await;

    let err = client
        .query("auth.getUser", None)
        .await
        .expect_err("token cannot be sent");
    assert!(matches!(err, PanelError::InvalidArgument(_)));
    let err = client
        .mutation("projects.createProject", &object(json!({ "name": "shop" })))
        .await
        .expect_err("token cannot be sent");
    assert!(matches!(err, PanelError::InvalidArgument(_)));
    assert!(requests(&server).await.is_empty());
}

#[tokio::test]
async fn call_dispatches_on_kind() {
    let (server, client) = panel(None).await;
    Mock::given(method("POST"))
        .and(path("/api/trpc/traefik.restart"))
        .and(body_json(json!({ "json": {} })))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!("restarted"))))
        .mount(&server)
        .await;

    let value = client
        .call(CallKind::Mutation, "traefik.restart", None)
        .await
        .expect("mutation without input");
    assert_eq!(value, json!("restarted"));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);

    let client = PanelClient::new(format!("http://127.0.0.1:{port}"), None);
    let err = client
        .query("projects.listProjects", None)
        .await
        .expect_err("nothing is listening");
    assert!(matches!(err, PanelError::Transport(_)));
    assert!(err.is_bridge_error());
}
