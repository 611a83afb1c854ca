// SPDX-FileCopyrightText: 2026 Tim Quelch <tim@tquelch.com>
//
// SPDX-License-Identifier: GPL-3.0-only

use serde::Serialize;
use serde_json::Value;

use crate::error::ImportError;
use crate::naming;

/// One resource as returned by a provider listing call: an opaque mapping
/// keyed by the provider's wire field names (`VpcId`, `Tags`, ...). Which
/// fields are present varies by resource kind.
pub type RawResource = serde_json::Map<String, Value>;

/// A single entry in a Pulumi import file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportRecord {
    #[serde(rename = "type")]
    pub type_tag: String,
    pub name: String,
    pub id: String,
}

/// The full import file: records in scan order, duplicates untouched.
#[derive(Debug, Default, Serialize)]
pub struct ImportManifest {
    pub resources: Vec<ImportRecord>,
}

/// One resource kind's listing and identifier conventions.
pub trait ResourceSource {
    fn list(&self) -> Result<Vec<RawResource>, ImportError>;
    fn extract_id(&self, resource: &RawResource) -> Result<String, ImportError>;
}

/// A pre-fetched flat listing whose identifier lives in a single named field.
pub struct FieldKeyedSource {
    resources: Vec<RawResource>,
    id_field: String,
}

impl FieldKeyedSource {
    pub fn new(resources: Vec<RawResource>, id_field: impl Into<String>) -> Self {
        Self {
            resources,
            id_field: id_field.into(),
        }
    }
}

impl ResourceSource for FieldKeyedSource {
    fn list(&self) -> Result<Vec<RawResource>, ImportError> {
        Ok(self.resources.clone())
    }

    fn extract_id(&self, resource: &RawResource) -> Result<String, ImportError> {
        require_str(resource, &self.id_field, "resource").map(str::to_owned)
    }
}

/// Generate one import record per listed resource, in listing order.
///
/// The id is extracted before the name is resolved so it is available as the
/// naming fallback. Any missing-field error aborts the kind: no records are
/// returned for a listing that fails part way through.
pub fn generate_imports(
    source: &impl ResourceSource,
    type_tag: &str,
) -> Result<Vec<ImportRecord>, ImportError> {
    source
        .list()?
        .into_iter()
        .map(|resource| {
            let id = source.extract_id(&resource)?;
            let name = naming::resolve_name(&resource, &id);
            Ok(ImportRecord {
                type_tag: type_tag.to_owned(),
                name,
                id,
            })
        })
        .collect()
}

/// Flatten wrapper records into the resources nested under `field`.
///
/// EC2 instances arrive nested inside reservations (zero-to-many per
/// wrapper) rather than as a flat listing like every other kind.
pub fn flatten_nested(
    wrappers: &[RawResource],
    field: &str,
) -> Result<Vec<RawResource>, ImportError> {
    let mut flat = Vec::new();
    for wrapper in wrappers {
        for value in require_array(wrapper, field, "listing wrapper")? {
            flat.push(
                value
                    .as_object()
                    .cloned()
                    .ok_or_else(|| ImportError::shape(field, "listing wrapper"))?,
            );
        }
    }
    Ok(flat)
}

pub const ROUTE_TABLE_ASSOCIATION_TYPE: &str =
    "aws:ec2/routeTableAssociation:RouteTableAssociation";

/// Import records for subnet/route-table bindings.
///
/// Associations are nested under their route table and import with a
/// compound `{subnet}/{routeTable}` id. Associations without a subnet (the
/// main association, gateway associations) are not importable as this type
/// and are skipped. Association records carry no naming fields, so the name
/// is always the `import-` fallback on the compound id.
pub fn route_table_association_imports(
    route_tables: &[RawResource],
) -> Result<Vec<ImportRecord>, ImportError> {
    let mut records = Vec::new();
    for route_table in route_tables {
        let route_table_id = require_str(route_table, "RouteTableId", "route table")?;
        for association in require_array(route_table, "Associations", "route table")? {
            let Some(subnet_id) = association.get("SubnetId").and_then(Value::as_str) else {
                continue;
            };
            let id = format!("{subnet_id}/{route_table_id}");
            records.push(ImportRecord {
                type_tag: ROUTE_TABLE_ASSOCIATION_TYPE.to_owned(),
                name: format!("import-{id}"),
                id,
            });
        }
    }
    Ok(records)
}

pub(crate) fn require_str<'a>(
    resource: &'a RawResource,
    field: &str,
    context: &'static str,
) -> Result<&'a str, ImportError> {
    resource
        .get(field)
        .ok_or_else(|| ImportError::missing(field, context))?
        .as_str()
        .ok_or_else(|| ImportError::shape(field, context))
}

pub(crate) fn require_array<'a>(
    resource: &'a RawResource,
    field: &str,
    context: &'static str,
) -> Result<&'a Vec<Value>, ImportError> {
    match resource.get(field) {
        Some(Value::Array(values)) => Ok(values),
        Some(_) => Err(ImportError::shape(field, context)),
        None => Err(ImportError::missing(field, context)),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn raw(value: Value) -> RawResource {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn generates_one_record_per_resource_in_order() {
        let source = FieldKeyedSource::new(
            vec![
                raw(json!({"GroupId": "sg-1", "GroupName": "web"})),
                raw(json!({"GroupId": "sg-2", "GroupName": "db"})),
            ],
            "GroupId",
        );

        let records = generate_imports(&source, "aws:ec2/securityGroup:SecurityGroup").unwrap();

        assert_eq!(
            records,
            vec![
                ImportRecord {
                    type_tag: "aws:ec2/securityGroup:SecurityGroup".to_owned(),
                    name: "web".to_owned(),
                    id: "sg-1".to_owned(),
                },
                ImportRecord {
                    type_tag: "aws:ec2/securityGroup:SecurityGroup".to_owned(),
                    name: "db".to_owned(),
                    id: "sg-2".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn missing_id_field_aborts_the_kind() {
        let source = FieldKeyedSource::new(
            vec![
                raw(json!({"VpcId": "vpc-1"})),
                raw(json!({"CidrBlock": "10.0.0.0/16"})),
            ],
            "VpcId",
        );

        let err = generate_imports(&source, "aws:ec2/vpc:Vpc").unwrap_err();
        assert!(matches!(
            err,
            ImportError::MissingField { ref field, .. } if field == "VpcId"
        ));
    }

    #[test]
    fn empty_listing_generates_nothing() {
        let source = FieldKeyedSource::new(vec![], "VpcId");
        assert!(generate_imports(&source, "aws:ec2/vpc:Vpc").unwrap().is_empty());
    }

    #[test]
    fn flatten_preserves_instance_order_across_wrappers() {
        let wrappers = vec![
            raw(json!({
                "ReservationId": "r-1",
                "Instances": [{"InstanceId": "i-1"}, {"InstanceId": "i-2"}],
            })),
            raw(json!({"ReservationId": "r-2", "Instances": []})),
        ];

        let instances = flatten_nested(&wrappers, "Instances").unwrap();

        assert_eq!(instances.len(), 2);
        assert_eq!(instances[0]["InstanceId"], "i-1");
        assert_eq!(instances[1]["InstanceId"], "i-2");
    }

    #[test]
    fn flatten_missing_nested_field_is_an_error() {
        let wrappers = vec![raw(json!({"ReservationId": "r-1"}))];
        let err = flatten_nested(&wrappers, "Instances").unwrap_err();
        assert!(matches!(err, ImportError::MissingField { .. }));
    }

    #[test]
    fn association_with_subnet_gets_compound_id() {
        let route_tables = vec![raw(json!({
            "RouteTableId": "rtb-1",
            "Associations": [{"SubnetId": "s1"}, {"NoSubnet": true}],
        }))];

        let records = route_table_association_imports(&route_tables).unwrap();

        assert_eq!(
            records,
            vec![ImportRecord {
                type_tag: ROUTE_TABLE_ASSOCIATION_TYPE.to_owned(),
                name: "import-s1/rtb-1".to_owned(),
                id: "s1/rtb-1".to_owned(),
            }]
        );
    }

    #[test]
    fn route_table_without_associations_field_is_an_error() {
        let route_tables = vec![raw(json!({"RouteTableId": "rtb-1"}))];
        let err = route_table_association_imports(&route_tables).unwrap_err();
        assert!(matches!(
            err,
            ImportError::MissingField { ref field, .. } if field == "Associations"
        ));
    }

    #[test]
    fn subnetless_route_table_generates_no_associations() {
        let route_tables = vec![raw(json!({
            "RouteTableId": "rtb-1",
            "Associations": [{"GatewayId": "igw-1"}, {"Main": true}],
        }))];

        assert!(
            route_table_association_imports(&route_tables)
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn record_serializes_with_exactly_three_fields() {
        let record = ImportRecord {
            type_tag: "aws:s3/bucket:Bucket".to_owned(),
            name: "my-bucket".to_owned(),
            id: "my-bucket".to_owned(),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({"type": "aws:s3/bucket:Bucket", "name": "my-bucket", "id": "my-bucket"})
        );
    }

    #[test]
    fn manifest_wraps_records_in_resources() {
        let manifest = ImportManifest {
            resources: vec![ImportRecord {
                type_tag: "aws:ec2/vpc:Vpc".to_owned(),
                name: "import-vpc-1".to_owned(),
                id: "vpc-1".to_owned(),
            }],
        };

        let value = serde_json::to_value(&manifest).unwrap();
        assert_eq!(value["resources"][0]["id"], "vpc-1");
        assert_eq!(value["resources"].as_array().unwrap().len(), 1);
    }
}
