//! Pure translation from (operation, arguments) to an outgoing request.
//!
//! Nothing here touches the network: every usage error is reported before a
//! request exists.

use serde_json::{Map, Value as JsonValue};

use super::{BodyKind, HttpMethod, Operation, ParamLocation};
use crate::core::error::ToolError;

#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub method: HttpMethod,
    /// Decoded path segments; percent-encoding happens when the URL is built.
    pub segments: Vec<String>,
    pub query: Vec<(String, String)>,
    pub body: Option<JsonValue>,
}

impl PreparedRequest {
    /// Unencoded path, for logs and assertions.
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

pub fn prepare(op: &Operation, arguments: &JsonValue) -> Result<PreparedRequest, ToolError> {
    let empty = Map::new();
    let args = match arguments {
        JsonValue::Null => &empty,
        JsonValue::Object(map) => map,
        _ => return Err(ToolError::invalid("arguments", "expected a JSON object")),
    };

    if let Some(unknown) = args.keys().find(|k| op.param(k).is_none()) {
        return Err(ToolError::invalid(
            unknown.as_str(),
            format!("not accepted by {}", op.name),
        ));
    }

    for p in op.required_params() {
        if supplied(args, p.name).is_none() {
            return Err(ToolError::MissingParameter(p.name.to_string()));
        }
    }

    let segments = substitute_path(op, args)?;

    let query = op
        .params
        .iter()
        .filter(|p| p.location == ParamLocation::Query)
        .filter_map(|p| supplied(args, p.name).map(|v| (p.name.to_string(), query_text(v))))
        .collect();

    let body = match op.body {
        BodyKind::None => None,
        BodyKind::Empty => Some(JsonValue::Object(Map::new())),
        BodyKind::Fields => {
            let fields: Map<String, JsonValue> = op
                .params
                .iter()
                .filter(|p| p.location == ParamLocation::Body)
                .filter_map(|p| supplied(args, p.name).map(|v| (p.name.to_string(), v.clone())))
                .collect();
            Some(JsonValue::Object(fields))
        }
        BodyKind::Raw => op
            .params
            .iter()
            .find(|p| p.location == ParamLocation::RawBody)
            .and_then(|p| supplied(args, p.name))
            .cloned(),
    };

    Ok(PreparedRequest {
        method: op.method,
        segments,
        query,
        body,
    })
}

/// Present and non-null.
fn supplied<'a>(args: &'a Map<String, JsonValue>, name: &str) -> Option<&'a JsonValue> {
    args.get(name).filter(|v| !v.is_null())
}

fn substitute_path(
    op: &Operation,
    args: &Map<String, JsonValue>,
) -> Result<Vec<String>, ToolError> {
    op.path
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|segment| {
            let Some(name) = segment
                .strip_prefix('{')
                .and_then(|s| s.strip_suffix('}'))
            else {
                return Ok(segment.to_string());
            };
            let value = supplied(args, name)
                .ok_or_else(|| ToolError::MissingParameter(name.to_string()))?;
            path_text(name, value)
        })
        .collect()
}

fn path_text(name: &str, value: &JsonValue) -> Result<String, ToolError> {
    match value {
        JsonValue::String(s) if s.trim().is_empty() => {
            Err(ToolError::invalid(name, "must not be empty"))
        }
        // url drops these instead of encoding them, which would change the route.
        JsonValue::String(s) if s == "." || s == ".." => {
            Err(ToolError::invalid(name, "must not be a dot segment"))
        }
        JsonValue::String(s) => Ok(s.clone()),
        JsonValue::Number(n) => Ok(n.to_string()),
        JsonValue::Bool(b) => Ok(b.to_string()),
        _ => Err(ToolError::invalid(name, "expected a string identifier")),
    }
}

/// Strings go out verbatim; everything else as its JSON text, which is how
/// Wrike expects list and object filters (`fields=["metadata"]`).
fn query_text(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::catalog::find;
    use serde_json::json;

    fn op(name: &str) -> &'static Operation {
        find(name).unwrap()
    }

    #[test]
    fn substitutes_path_and_skips_absent_query() {
        let req = prepare(op("get_tasks_by_taskid"), &json!({"taskId": "123"})).unwrap();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path(), "/tasks/123");
        assert!(req.query.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn missing_path_parameter_is_usage_error() {
        let err = prepare(op("get_contacts_by_contactid"), &json!({"fields": "x"})).unwrap_err();
        assert!(matches!(err, ToolError::MissingParameter(ref n) if n == "contactId"));
    }

    #[test]
    fn null_counts_as_absent() {
        let err = prepare(op("delete_groups_by_groupid"), &json!({"groupId": null})).unwrap_err();
        assert!(matches!(err, ToolError::MissingParameter(_)));

        let req = prepare(op("get_contacts"), &json!({"deleted": null})).unwrap();
        assert!(req.query_value("deleted").is_none());
    }

    #[test]
    fn empty_or_structured_path_values_are_rejected() {
        let err = prepare(op("get_users_by_userid"), &json!({"userId": "  "})).unwrap_err();
        assert!(matches!(err, ToolError::InvalidParameter { .. }));
        let err = prepare(op("get_users_by_userid"), &json!({"userId": ["a"]})).unwrap_err();
        assert!(matches!(err, ToolError::InvalidParameter { .. }));
    }

    #[test]
    fn numeric_ids_are_stringified() {
        let req = prepare(op("get_groups_by_groupid"), &json!({"groupId": 42})).unwrap();
        assert_eq!(req.path(), "/groups/42");
    }

    #[test]
    fn unknown_arguments_are_rejected() {
        let err = prepare(op("get_invitations"), &json!({"bogus": 1})).unwrap_err();
        match err {
            ToolError::InvalidParameter { name, .. } => assert_eq!(name, "bogus"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn non_object_arguments_are_rejected() {
        let err = prepare(op("get_invitations"), &json!([1, 2])).unwrap_err();
        assert!(err.is_usage());
        assert!(prepare(op("get_invitations"), &JsonValue::Null).is_ok());
    }

    #[test]
    fn query_values_keep_strings_and_json_encode_the_rest() {
        let req = prepare(
            op("get_contacts"),
            &json!({"deleted": true, "fields": ["metadata", "jobRoleId"], "metadata": "k"}),
        )
        .unwrap();
        assert_eq!(req.query_value("deleted"), Some("true"));
        assert_eq!(req.query_value("fields"), Some(r#"["metadata","jobRoleId"]"#));
        assert_eq!(req.query_value("metadata"), Some("k"));
        // catalog order, not argument order
        let names: Vec<&str> = req.query.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, ["deleted", "fields", "metadata"]);
    }

    #[test]
    fn body_excludes_omitted_fields() {
        let req = prepare(
            op("put_contacts_by_contactid"),
            &json!({"contactId": "c1", "currentBillRate": 10, "jobRoleId": null}),
        )
        .unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.body, Some(json!({"currentBillRate": 10})));
        assert!(req.query.is_empty());
    }

    #[test]
    fn dot_segment_identifiers_are_rejected() {
        for id in [".", ".."] {
            let err = prepare(op("delete_groups_by_groupid"), &json!({"groupId": id})).unwrap_err();
            assert!(
                matches!(err, ToolError::InvalidParameter { ref name, ref reason } if name == "groupId" && reason.contains("dot segment")),
                "{id}: {err}"
            );
        }
        let req = prepare(op("get_contacts_by_contactid"), &json!({"contactId": "..c1"})).unwrap();
        assert_eq!(req.segments, vec!["contacts", "..c1"]);
    }

    #[test]
    fn fields_body_is_empty_object_when_nothing_supplied() {
        let req = prepare(op("put_a_ccount"), &json!({})).unwrap();
        assert_eq!(req.body, Some(json!({})));
    }

    #[test]
    fn required_body_field_is_checked() {
        let err = prepare(op("post_groups"), &json!({"members": ["u1"]})).unwrap_err();
        assert!(matches!(err, ToolError::MissingParameter(ref n) if n == "title"));
    }

    #[test]
    fn raw_body_passes_through_and_is_optional() {
        let raw = json!({"customStatuses": [{"name": "Open", "group": "Active"}]});
        let req = prepare(
            op("put_workflows_by_workflowid"),
            &json!({"workflowId": "w1", "hidden": false, "request_body": raw}),
        )
        .unwrap();
        assert_eq!(req.query_value("hidden"), Some("false"));
        assert_eq!(req.body, Some(raw));

        let req = prepare(op("post_workflows"), &json!({"name": "Flow"})).unwrap();
        assert!(req.body.is_none());
        assert_eq!(req.query_value("name"), Some("Flow"));
    }

    #[test]
    fn custom_field_update_sends_empty_body_and_query() {
        let req = prepare(
            op("put_customfields_by_customfieldid"),
            &json!({"customFieldId": "cf1", "title": "Cost"}),
        )
        .unwrap();
        assert_eq!(req.body, Some(json!({})));
        assert_eq!(req.query, vec![("title".to_string(), "Cost".to_string())]);
    }

    #[test]
    fn delete_never_carries_a_body() {
        let req = prepare(op("delete_groups_by_groupid"), &json!({"groupId": "g1"})).unwrap();
        assert_eq!(req.method, HttpMethod::Delete);
        assert!(req.body.is_none());
        assert!(req.query.is_empty());
    }

    #[test]
    fn nested_path_keeps_literal_segments() {
        let req = prepare(
            op("post_folders_by_folderid_tasks"),
            &json!({"folderId": "IEAB/..", "title": "Demo"}),
        )
        .unwrap();
        assert_eq!(req.segments, vec!["folders", "IEAB/..", "tasks"]);
        assert_eq!(req.body, Some(json!({"title": "Demo"})));
    }
}
