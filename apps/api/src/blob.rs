//! Thin wrapper over the S3 client for fetching uploaded document blobs.

use aws_sdk_s3::Client as S3Client;
use bytes::Bytes;

use crate::errors::AppError;

/// Downloads one object from the given bucket.
pub async fn download(s3: &S3Client, bucket: &str, key: &str) -> Result<Bytes, AppError> {
    let object = s3
        .get_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(|e| AppError::Storage(format!("Failed to download {bucket}/{key}: {e}")))?;

    let data = object
        .body
        .collect()
        .await
        .map_err(|e| AppError::Storage(format!("Failed to read {bucket}/{key}: {e}")))?;

    Ok(data.into_bytes())
}
