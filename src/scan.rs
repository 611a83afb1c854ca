use std::time::Duration;

use aws_config::retry::RetryConfig;
use tracing::info;

use crate::ec2_client;
use crate::iam_client;
use crate::import::{self, FieldKeyedSource, ImportManifest};
use crate::kind::{DERIVED_EC2_KINDS, DerivedKindSource};
use crate::s3_client;

pub struct Clients {
    ec2: aws_sdk_ec2::Client,
    s3: aws_sdk_s3::Client,
    iam: aws_sdk_iam::Client,
}

pub async fn connect() -> Clients {
    let config = aws_config::from_env()
        .retry_config(
            RetryConfig::standard()
                .with_initial_backoff(Duration::from_millis(50))
                .with_max_backoff(Duration::from_secs(60))
                .with_max_attempts(100),
        )
        .load()
        .await;

    Clients {
        ec2: aws_sdk_ec2::Client::new(&config),
        s3: aws_sdk_s3::Client::new(&config),
        iam: aws_sdk_iam::Client::new(&config),
    }
}

/// Scan the account and assemble the import manifest.
///
/// Kinds are fetched and generated one at a time; manifest order is scan
/// order here, then listing order within a kind. Any generation error
/// aborts the whole pass rather than emitting a partial manifest.
pub async fn generate_manifest(clients: &Clients) -> anyhow::Result<ImportManifest> {
    let mut resources = Vec::new();

    for kind in DERIVED_EC2_KINDS {
        let response = ec2_client::describe_derived_kind(&clients.ec2, kind).await?;
        let source = DerivedKindSource::new(kind, response);
        resources.extend(import::generate_imports(&source, &kind.type_tag())?);
    }

    // The remaining kinds don't follow the derived naming pattern
    info!("listing route table associations");
    let route_tables = ec2_client::route_tables(&clients.ec2).await?;
    resources.extend(import::route_table_association_imports(&route_tables)?);

    info!("listing elastic ips");
    let source = FieldKeyedSource::new(ec2_client::addresses(&clients.ec2).await?, "AllocationId");
    resources.extend(import::generate_imports(&source, "aws:ec2/eip:Eip")?);

    info!("listing ec2 instances");
    let wrappers = ec2_client::reservations(&clients.ec2).await?;
    let instances = import::flatten_nested(&wrappers, "Instances")?;
    let source = FieldKeyedSource::new(instances, "InstanceId");
    resources.extend(import::generate_imports(&source, "aws:ec2/instance:Instance")?);

    info!("listing security groups");
    let source = FieldKeyedSource::new(ec2_client::security_groups(&clients.ec2).await?, "GroupId");
    resources.extend(import::generate_imports(
        &source,
        "aws:ec2/securityGroup:SecurityGroup",
    )?);

    let source = FieldKeyedSource::new(s3_client::buckets(&clients.s3).await?, "Name");
    resources.extend(import::generate_imports(&source, "aws:s3/bucket:Bucket")?);

    let source = FieldKeyedSource::new(iam_client::users(&clients.iam).await?, "UserName");
    resources.extend(import::generate_imports(&source, "aws:iam/user:User")?);

    let source = FieldKeyedSource::new(iam_client::groups(&clients.iam).await?, "GroupName");
    resources.extend(import::generate_imports(&source, "aws:iam/group:Group")?);

    let source = FieldKeyedSource::new(iam_client::roles(&clients.iam).await?, "RoleName");
    resources.extend(import::generate_imports(&source, "aws:iam/role:Role")?);

    let source = FieldKeyedSource::new(iam_client::local_policies(&clients.iam).await?, "PolicyName");
    resources.extend(import::generate_imports(&source, "aws:iam/policy:Policy")?);

    info!(total = resources.len(), "scan complete");

    Ok(ImportManifest { resources })
}
