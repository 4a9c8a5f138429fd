//! Dispatch properties checked across every catalog operation against a mock API.

use httpmock::{Method, MockServer};
use serde_json::{json, Map, Value};

use wrike_mcp_gateway::clients::wrike::WrikeRemote;
use wrike_mcp_gateway::core::error::ToolError;
use wrike_mcp_gateway::domain::{prepare, HttpMethod, Operation, ParamKind, ParamLocation};
use wrike_mcp_gateway::tools::catalog::OPERATIONS;
use wrike_mcp_gateway::tools::registry::build_registry;

fn sample(kind: ParamKind) -> Value {
    match kind {
        ParamKind::Integer => json!(1),
        ParamKind::Boolean => json!(true),
        ParamKind::Array => json!(["a"]),
        ParamKind::Object => json!({}),
        ParamKind::String | ParamKind::Any => json!("v1"),
    }
}

fn required_args(op: &Operation) -> Value {
    let args: Map<String, Value> = op
        .required_params()
        .map(|p| (p.name.to_string(), sample(p.kind)))
        .collect();
    Value::Object(args)
}

fn expected_path(op: &Operation) -> String {
    op.params
        .iter()
        .filter(|p| p.location == ParamLocation::Path)
        .fold(op.path.to_string(), |path, p| path.replace(&format!("{{{}}}", p.name), "v1"))
}

fn mock_method(m: HttpMethod) -> Method {
    match m {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

#[tokio::test]
async fn every_operation_returns_the_mocked_payload_unchanged() {
    let server = MockServer::start();
    let registry = build_registry(WrikeRemote::new(server.base_url(), Some("tok".into())));

    for op in OPERATIONS {
        let payload = json!({"kind": op.name, "data": [{"id": "x", "nested": {"n": 1}}]});
        let mut m = server.mock(|when, then| {
            when.method(mock_method(op.method))
                .path(expected_path(op))
                .header("authorization", "Bearer tok");
            then.status(200).json_body(payload.clone());
        });
        let out = registry
            .call(op.name, &required_args(op))
            .await
            .unwrap_or_else(|e| panic!("{} failed: {e}", op.name));
        m.assert();
        assert_eq!(out, payload, "{}", op.name);
        m.delete();
    }
}

#[tokio::test]
async fn missing_path_parameter_never_reaches_the_network() {
    let server = MockServer::start();
    let any = server.mock(|when, then| {
        when.path_contains("/");
        then.status(200).json_body(json!({}));
    });
    let registry = build_registry(WrikeRemote::new(server.base_url(), Some("tok".into())));

    for op in OPERATIONS {
        let Some(path_param) = op.params.iter().find(|p| p.location == ParamLocation::Path) else {
            continue;
        };
        let mut args = required_args(op);
        args.as_object_mut().unwrap().remove(path_param.name);
        let err = registry.call(op.name, &args).await.unwrap_err();
        assert!(
            matches!(err, ToolError::MissingParameter(ref n) if n == path_param.name),
            "{}: {err}",
            op.name
        );
    }
    any.assert_hits(0);
}

#[test]
fn omitted_optionals_are_absent_from_query_and_body() {
    for op in OPERATIONS {
        let req = prepare(op, &required_args(op)).unwrap();
        for (name, _) in &req.query {
            assert!(op.param(name).unwrap().required, "{}: optional {name} in query", op.name);
        }
        if let Some(Value::Object(body)) = &req.body {
            for name in body.keys() {
                assert!(op.param(name).unwrap().required, "{}: optional {name} in body", op.name);
            }
        }
    }
}

#[tokio::test]
async fn get_task_by_id_returns_the_task() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(Method::GET).path("/tasks/123");
        then.status(200).json_body(json!({"id": "123", "title": "Demo"}));
    });
    let registry = build_registry(WrikeRemote::new(server.base_url(), Some("tok".into())));
    let out = registry
        .call("get_tasks_by_taskid", &json!({"taskId": "123"}))
        .await
        .unwrap();
    assert_eq!(out, json!({"id": "123", "title": "Demo"}));
}

#[tokio::test]
async fn delete_group_with_no_content_succeeds_without_body() {
    let server = MockServer::start();
    let m = server.mock(|when, then| {
        when.method(Method::DELETE).path("/groups/g1").body("");
        then.status(204);
    });
    let registry = build_registry(WrikeRemote::new(server.base_url(), Some("tok".into())));
    let out = registry
        .call("delete_groups_by_groupid", &json!({"groupId": "g1"}))
        .await
        .unwrap();
    m.assert();
    assert!(out.is_null());
}

#[tokio::test]
async fn missing_contact_surfaces_status_and_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(Method::GET).path("/contacts/c404");
        then.status(404)
            .json_body(json!({"error": "not_found", "errorDescription": "Contact not found"}));
    });
    let registry = build_registry(WrikeRemote::new(server.base_url(), Some("tok".into())));
    let err = registry
        .call("get_contacts_by_contactid", &json!({"contactId": "c404"}))
        .await
        .unwrap_err();
    let detail = err.upstream_detail().expect("upstream error");
    assert_eq!(detail["status"], 404);
    assert_eq!(detail["body"]["errorDescription"], "Contact not found");
}
