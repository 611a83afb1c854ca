// SPDX-FileCopyrightText: 2026 Tim Quelch <tim@tquelch.com>
//
// SPDX-License-Identifier: GPL-3.0-only

use aws_sdk_ec2::types::{
    Address, Instance, InstanceType, InternetGateway, NatGateway, Reservation, RouteTable,
    RouteTableAssociation, SecurityGroup, Subnet, Tag, Vpc,
};
use aws_smithy_async::future::pagination_stream::PaginationStream;
use aws_smithy_types_convert::stream::PaginationStreamExt;
use futures::TryStreamExt;
use serde_json::{Map, Value, json};
use tracing::info;

use crate::error::ImportError;
use crate::import::RawResource;
use crate::kind::DerivedEc2Kind;
use crate::util::insert_str;

/// Run the listing call for a convention-derived kind and return the raw
/// response object, keyed by the wire field name the kind derivation
/// expects. Tokens without a registered listing are a contract violation.
pub async fn describe_derived_kind(
    client: &aws_sdk_ec2::Client,
    kind: DerivedEc2Kind,
) -> anyhow::Result<RawResource> {
    info!(method = %kind.method_name(), "listing ec2 resource kind");
    let response = match kind.token() {
        "vpc" => listing_response(
            "Vpcs",
            collect_items(
                client.describe_vpcs().into_paginator().items().send(),
                vpc_to_raw,
            )
            .await?,
        ),
        "subnet" => listing_response(
            "Subnets",
            collect_items(
                client.describe_subnets().into_paginator().items().send(),
                subnet_to_raw,
            )
            .await?,
        ),
        "route_table" => listing_response("RouteTables", route_tables(client).await?),
        "nat_gateway" => listing_response(
            "NatGateways",
            collect_items(
                client.describe_nat_gateways().into_paginator().items().send(),
                nat_gateway_to_raw,
            )
            .await?,
        ),
        "internet_gateway" => listing_response(
            "InternetGateways",
            collect_items(
                client
                    .describe_internet_gateways()
                    .into_paginator()
                    .items()
                    .send(),
                internet_gateway_to_raw,
            )
            .await?,
        ),
        token => return Err(ImportError::UnknownKind(token.to_owned()).into()),
    };
    Ok(response)
}

pub async fn route_tables(client: &aws_sdk_ec2::Client) -> anyhow::Result<Vec<RawResource>> {
    collect_items(
        client.describe_route_tables().into_paginator().items().send(),
        route_table_to_raw,
    )
    .await
}

pub async fn reservations(client: &aws_sdk_ec2::Client) -> anyhow::Result<Vec<RawResource>> {
    collect_items(
        client.describe_instances().into_paginator().items().send(),
        reservation_to_raw,
    )
    .await
}

pub async fn security_groups(client: &aws_sdk_ec2::Client) -> anyhow::Result<Vec<RawResource>> {
    collect_items(
        client
            .describe_security_groups()
            .into_paginator()
            .items()
            .send(),
        security_group_to_raw,
    )
    .await
}

/// DescribeAddresses is not paginated: one call returns every address.
pub async fn addresses(client: &aws_sdk_ec2::Client) -> anyhow::Result<Vec<RawResource>> {
    let response = client.describe_addresses().send().await?;
    Ok(response
        .addresses
        .unwrap_or_default()
        .into_iter()
        .map(address_to_raw)
        .collect())
}

async fn collect_items<T, E>(
    pages: PaginationStream<Result<T, E>>,
    convert: impl Fn(T) -> RawResource,
) -> anyhow::Result<Vec<RawResource>>
where
    T: Send + 'static,
    E: std::error::Error + Send + Sync + 'static,
{
    pages
        .into_stream_03x()
        .map_err(anyhow::Error::from)
        .map_ok(convert)
        .try_collect()
        .await
}

fn listing_response(field: &str, items: Vec<RawResource>) -> RawResource {
    let mut response = Map::new();
    response.insert(
        field.to_owned(),
        Value::Array(items.into_iter().map(Value::Object).collect()),
    );
    response
}

fn vpc_to_raw(vpc: Vpc) -> RawResource {
    let mut map = RawResource::new();
    insert_str(&mut map, "VpcId", vpc.vpc_id());
    insert_str(&mut map, "CidrBlock", vpc.cidr_block());
    if let Some(is_default) = vpc.is_default() {
        map.insert("IsDefault".to_owned(), Value::Bool(is_default));
    }
    insert_tags(&mut map, vpc.tags());
    map
}

fn subnet_to_raw(subnet: Subnet) -> RawResource {
    let mut map = RawResource::new();
    insert_str(&mut map, "SubnetId", subnet.subnet_id());
    insert_str(&mut map, "VpcId", subnet.vpc_id());
    insert_str(&mut map, "CidrBlock", subnet.cidr_block());
    insert_str(&mut map, "AvailabilityZone", subnet.availability_zone());
    insert_tags(&mut map, subnet.tags());
    map
}

fn route_table_to_raw(route_table: RouteTable) -> RawResource {
    let mut map = RawResource::new();
    insert_str(&mut map, "RouteTableId", route_table.route_table_id());
    insert_str(&mut map, "VpcId", route_table.vpc_id());
    // Always present, even when empty: the association flow requires it
    map.insert(
        "Associations".to_owned(),
        Value::Array(
            route_table
                .associations()
                .iter()
                .map(association_to_value)
                .collect(),
        ),
    );
    insert_tags(&mut map, route_table.tags());
    map
}

fn association_to_value(association: &RouteTableAssociation) -> Value {
    let mut map = Map::new();
    insert_str(
        &mut map,
        "RouteTableAssociationId",
        association.route_table_association_id(),
    );
    insert_str(&mut map, "RouteTableId", association.route_table_id());
    insert_str(&mut map, "SubnetId", association.subnet_id());
    insert_str(&mut map, "GatewayId", association.gateway_id());
    if let Some(main) = association.main() {
        map.insert("Main".to_owned(), Value::Bool(main));
    }
    Value::Object(map)
}

fn nat_gateway_to_raw(nat_gateway: NatGateway) -> RawResource {
    let mut map = RawResource::new();
    insert_str(&mut map, "NatGatewayId", nat_gateway.nat_gateway_id());
    insert_str(&mut map, "SubnetId", nat_gateway.subnet_id());
    insert_str(&mut map, "VpcId", nat_gateway.vpc_id());
    insert_str(&mut map, "State", nat_gateway.state().map(|s| s.as_str()));
    insert_tags(&mut map, nat_gateway.tags());
    map
}

fn internet_gateway_to_raw(internet_gateway: InternetGateway) -> RawResource {
    let mut map = RawResource::new();
    insert_str(
        &mut map,
        "InternetGatewayId",
        internet_gateway.internet_gateway_id(),
    );
    insert_tags(&mut map, internet_gateway.tags());
    map
}

fn address_to_raw(address: Address) -> RawResource {
    let mut map = RawResource::new();
    insert_str(&mut map, "AllocationId", address.allocation_id());
    insert_str(&mut map, "PublicIp", address.public_ip());
    insert_str(&mut map, "InstanceId", address.instance_id());
    insert_str(&mut map, "Domain", address.domain().map(|d| d.as_str()));
    insert_tags(&mut map, address.tags());
    map
}

fn reservation_to_raw(reservation: Reservation) -> RawResource {
    let mut map = RawResource::new();
    insert_str(&mut map, "ReservationId", reservation.reservation_id());
    insert_str(&mut map, "OwnerId", reservation.owner_id());
    map.insert(
        "Instances".to_owned(),
        Value::Array(reservation.instances().iter().map(instance_to_value).collect()),
    );
    map
}

fn instance_to_value(instance: &Instance) -> Value {
    let mut map = Map::new();
    insert_str(&mut map, "InstanceId", instance.instance_id());
    insert_str(
        &mut map,
        "InstanceType",
        instance.instance_type().map(InstanceType::as_str),
    );
    insert_str(&mut map, "SubnetId", instance.subnet_id());
    insert_str(&mut map, "VpcId", instance.vpc_id());
    insert_tags(&mut map, instance.tags());
    Value::Object(map)
}

fn security_group_to_raw(security_group: SecurityGroup) -> RawResource {
    let mut map = RawResource::new();
    insert_str(&mut map, "GroupId", security_group.group_id());
    insert_str(&mut map, "GroupName", security_group.group_name());
    insert_str(&mut map, "Description", security_group.description());
    insert_str(&mut map, "VpcId", security_group.vpc_id());
    insert_tags(&mut map, security_group.tags());
    map
}

fn insert_tags(map: &mut Map<String, Value>, tags: &[Tag]) {
    if tags.is_empty() {
        return;
    }
    map.insert(
        "Tags".to_owned(),
        Value::Array(
            tags.iter()
                .map(|tag| json!({"Key": tag.key(), "Value": tag.value()}))
                .collect(),
        ),
    );
}
