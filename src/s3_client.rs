use aws_sdk_s3::types::Bucket;
use aws_smithy_types_convert::date_time::DateTimeExt;
use serde_json::Value;
use tracing::info;

use crate::import::RawResource;
use crate::util::insert_str;

pub async fn buckets(client: &aws_sdk_s3::Client) -> anyhow::Result<Vec<RawResource>> {
    info!("listing s3 buckets");
    let response = client.list_buckets().send().await?;
    Ok(response
        .buckets
        .unwrap_or_default()
        .into_iter()
        .map(bucket_to_raw)
        .collect())
}

fn bucket_to_raw(bucket: Bucket) -> RawResource {
    let mut map = RawResource::new();
    insert_str(&mut map, "Name", bucket.name());
    if let Some(creation_date) = bucket.creation_date()
        && let Ok(creation_date) = creation_date.to_chrono_utc()
    {
        map.insert(
            "CreationDate".to_owned(),
            Value::String(creation_date.to_rfc3339()),
        );
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_name_is_the_wire_name_field() {
        let raw = bucket_to_raw(Bucket::builder().name("my-bucket").build());
        assert_eq!(raw["Name"], "my-bucket");
    }

    #[test]
    fn creation_date_rendered_as_rfc3339() {
        let bucket = Bucket::builder()
            .name("my-bucket")
            .creation_date(aws_smithy_types::DateTime::from_secs(0))
            .build();

        let raw = bucket_to_raw(bucket);
        assert_eq!(raw["CreationDate"], "1970-01-01T00:00:00+00:00");
    }
}
