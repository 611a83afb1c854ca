// SPDX-FileCopyrightText: 2026 Tim Quelch <tim@tquelch.com>
//
// SPDX-License-Identifier: GPL-3.0-only

use crate::error::ImportError;
use crate::import::{RawResource, ResourceSource, require_array, require_str};
use crate::util;

/// EC2 kinds whose listing call, response field, id field, and Pulumi type
/// tag all follow mechanically from the snake_case kind token. Scan order
/// matters: it fixes the order of records in the manifest.
pub const DERIVED_EC2_KINDS: [DerivedEc2Kind; 5] = [
    DerivedEc2Kind::new("vpc"),
    DerivedEc2Kind::new("subnet"),
    DerivedEc2Kind::new("route_table"),
    DerivedEc2Kind::new("nat_gateway"),
    DerivedEc2Kind::new("internet_gateway"),
];

/// Naming conventions for one convention-following EC2 kind.
///
/// A token like `nat_gateway` determines the `DescribeNatGateways` listing
/// call, the `NatGateways` response field, the `NatGatewayId` identifier
/// field, and the `aws:ec2/natGateway:NatGateway` Pulumi type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedEc2Kind {
    token: &'static str,
}

impl DerivedEc2Kind {
    pub const fn new(token: &'static str) -> Self {
        Self { token }
    }

    pub fn token(&self) -> &'static str {
        self.token
    }

    pub fn method_name(&self) -> String {
        format!("describe_{}s", self.token)
    }

    pub fn response_field(&self) -> String {
        format!("{}s", util::pascal_case(self.token))
    }

    pub fn id_field(&self) -> String {
        format!("{}Id", util::pascal_case(self.token))
    }

    pub fn type_tag(&self) -> String {
        format!(
            "aws:ec2/{}:{}",
            util::camel_case(self.token),
            util::pascal_case(self.token)
        )
    }
}

/// A raw listing response paired with the derived kind conventions needed to
/// read it.
pub struct DerivedKindSource {
    kind: DerivedEc2Kind,
    response: RawResource,
}

impl DerivedKindSource {
    pub fn new(kind: DerivedEc2Kind, response: RawResource) -> Self {
        Self { kind, response }
    }
}

impl ResourceSource for DerivedKindSource {
    fn list(&self) -> Result<Vec<RawResource>, ImportError> {
        let field = self.kind.response_field();
        require_array(&self.response, &field, "listing response")?
            .iter()
            .map(|value| {
                value
                    .as_object()
                    .cloned()
                    .ok_or_else(|| ImportError::shape(&field, "listing response"))
            })
            .collect()
    }

    fn extract_id(&self, resource: &RawResource) -> Result<String, ImportError> {
        require_str(resource, &self.kind.id_field(), "resource").map(str::to_owned)
    }
}
