// SPDX-FileCopyrightText: 2026 Tim Quelch <tim@tquelch.com>
//
// SPDX-License-Identifier: GPL-3.0-only

use aws_sdk_iam::types::{Group, Policy, PolicyScopeType, Role, User};
use aws_smithy_types_convert::stream::PaginationStreamExt;
use futures::TryStreamExt;
use serde_json::Value;
use tracing::info;

use crate::import::RawResource;
use crate::util::insert_str;

pub async fn users(client: &aws_sdk_iam::Client) -> anyhow::Result<Vec<RawResource>> {
    info!("listing iam users");
    client
        .list_users()
        .into_paginator()
        .items()
        .send()
        .into_stream_03x()
        .map_err(anyhow::Error::from)
        .map_ok(user_to_raw)
        .try_collect()
        .await
}

pub async fn groups(client: &aws_sdk_iam::Client) -> anyhow::Result<Vec<RawResource>> {
    info!("listing iam groups");
    client
        .list_groups()
        .into_paginator()
        .items()
        .send()
        .into_stream_03x()
        .map_err(anyhow::Error::from)
        .map_ok(group_to_raw)
        .try_collect()
        .await
}

pub async fn roles(client: &aws_sdk_iam::Client) -> anyhow::Result<Vec<RawResource>> {
    info!("listing iam roles");
    client
        .list_roles()
        .into_paginator()
        .items()
        .send()
        .into_stream_03x()
        .map_err(anyhow::Error::from)
        .map_ok(role_to_raw)
        .try_collect()
        .await
}

/// Customer-managed policies only. AWS-managed policies aren't importable
/// into account state, so the listing is restricted to local scope.
pub async fn local_policies(client: &aws_sdk_iam::Client) -> anyhow::Result<Vec<RawResource>> {
    info!("listing iam policies");
    client
        .list_policies()
        .scope(PolicyScopeType::Local)
        .into_paginator()
        .items()
        .send()
        .into_stream_03x()
        .map_err(anyhow::Error::from)
        .map_ok(policy_to_raw)
        .try_collect()
        .await
}

fn user_to_raw(user: User) -> RawResource {
    let mut map = RawResource::new();
    map.insert("UserName".to_owned(), Value::String(user.user_name().to_owned()));
    map.insert("UserId".to_owned(), Value::String(user.user_id().to_owned()));
    map.insert("Arn".to_owned(), Value::String(user.arn().to_owned()));
    map.insert("Path".to_owned(), Value::String(user.path().to_owned()));
    map
}

fn group_to_raw(group: Group) -> RawResource {
    let mut map = RawResource::new();
    map.insert("GroupName".to_owned(), Value::String(group.group_name().to_owned()));
    map.insert("GroupId".to_owned(), Value::String(group.group_id().to_owned()));
    map.insert("Arn".to_owned(), Value::String(group.arn().to_owned()));
    map.insert("Path".to_owned(), Value::String(group.path().to_owned()));
    map
}

fn role_to_raw(role: Role) -> RawResource {
    let mut map = RawResource::new();
    map.insert("RoleName".to_owned(), Value::String(role.role_name().to_owned()));
    map.insert("RoleId".to_owned(), Value::String(role.role_id().to_owned()));
    map.insert("Arn".to_owned(), Value::String(role.arn().to_owned()));
    map.insert("Path".to_owned(), Value::String(role.path().to_owned()));
    map
}

fn policy_to_raw(policy: Policy) -> RawResource {
    let mut map = RawResource::new();
    insert_str(&mut map, "PolicyName", policy.policy_name());
    insert_str(&mut map, "PolicyId", policy.policy_id());
    insert_str(&mut map, "Arn", policy.arn());
    insert_str(&mut map, "Path", policy.path());
    map
}
