// SPDX-FileCopyrightText: 2026 Tim Quelch <tim@tquelch.com>
//
// SPDX-License-Identifier: GPL-3.0-only

use serde_json::Value;

use crate::import::RawResource;

/// Naming fields in priority order. The first one present on the resource
/// wins and is used verbatim: AWS guarantees these unique within their kind
/// (bucket names globally, IAM names per account, and so on).
const NAME_FIELDS: [&str; 5] = ["Name", "GroupName", "PolicyName", "RoleName", "UserName"];

/// Derive a display name for one resource.
///
/// Falls back through [`NAME_FIELDS`], then a `Name` tag, then
/// `import-{id}`. A `Name` tag value carries no uniqueness guarantee, so the
/// resource id is appended to it; the scan stops at the first `Name` tag
/// even if duplicates exist.
pub fn resolve_name(resource: &RawResource, fallback_id: &str) -> String {
    for field in NAME_FIELDS {
        if let Some(name) = resource.get(field).and_then(Value::as_str) {
            return name.to_owned();
        }
    }

    if let Some(Value::Array(tags)) = resource.get("Tags")
        && let Some(value) = name_tag_value(tags)
    {
        return format!("{value}-{fallback_id}");
    }

    format!("import-{fallback_id}")
}

fn name_tag_value(tags: &[Value]) -> Option<&str> {
    tags.iter()
        .find(|tag| tag.get("Key").and_then(Value::as_str) == Some("Name"))
        .and_then(|tag| tag.get("Value").and_then(Value::as_str))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn raw(value: serde_json::Value) -> RawResource {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn name_field_used_verbatim() {
        let resource = raw(json!({
            "Name": "my-bucket",
            "Tags": [{"Key": "Name", "Value": "tagged"}],
        }));
        assert_eq!(resolve_name(&resource, "b-1"), "my-bucket");
    }

    #[test]
    fn group_name_beats_name_tag() {
        let resource = raw(json!({
            "GroupName": "web",
            "Tags": [{"Key": "Name", "Value": "tagged"}],
        }));
        assert_eq!(resolve_name(&resource, "sg-1"), "web");
    }

    #[test]
    fn iam_name_fields() {
        assert_eq!(
            resolve_name(&raw(json!({"PolicyName": "deploy"})), "p-1"),
            "deploy"
        );
        assert_eq!(
            resolve_name(&raw(json!({"RoleName": "admin"})), "r-1"),
            "admin"
        );
        assert_eq!(
            resolve_name(&raw(json!({"UserName": "alice"})), "u-1"),
            "alice"
        );
    }

    #[test]
    fn name_tag_gets_id_suffix() {
        let resource = raw(json!({
            "VpcId": "vpc-1",
            "Tags": [{"Key": "env", "Value": "prod"}, {"Key": "Name", "Value": "core"}],
        }));
        assert_eq!(resolve_name(&resource, "vpc-1"), "core-vpc-1");
    }

    #[test]
    fn first_name_tag_wins() {
        let resource = raw(json!({
            "Tags": [
                {"Key": "Name", "Value": "first"},
                {"Key": "Name", "Value": "second"},
            ],
        }));
        assert_eq!(resolve_name(&resource, "i-1"), "first-i-1");
    }

    #[test]
    fn tags_without_name_tag_fall_through() {
        let resource = raw(json!({
            "SubnetId": "subnet-1",
            "Tags": [{"Key": "env", "Value": "prod"}],
        }));
        assert_eq!(resolve_name(&resource, "subnet-1"), "import-subnet-1");
    }

    #[test]
    fn no_naming_fields_falls_back_to_id() {
        let resource = raw(json!({"AllocationId": "eipalloc-1"}));
        assert_eq!(resolve_name(&resource, "eipalloc-1"), "import-eipalloc-1");
    }
}
