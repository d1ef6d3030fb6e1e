/// S3 blob storage for capture uploads
///
/// Wraps the AWS S3 client with the bucket configuration and exposes the
/// one write path the service needs: store bytes under a key with
/// public-read access and hand back the public URL.
use crate::config::S3Config;
use crate::error::{AppError, Result};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;
use aws_sdk_s3::Client;

#[derive(Clone)]
pub struct BlobStore {
    client: Client,
    config: S3Config,
}

impl BlobStore {
    /// Create a blob store, building the AWS client from configuration.
    ///
    /// Uses explicit credentials when provided, otherwise the default
    /// credential chain. A custom endpoint supports S3-compatible storage
    /// like MinIO.
    pub async fn new(config: S3Config) -> Self {
        use aws_sdk_s3::config::{Credentials, Region};

        let mut aws_config_builder = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(config.region.clone()));

        if let (Some(access_key_id), Some(secret_access_key)) =
            (&config.access_key_id, &config.secret_access_key)
        {
            let credentials = Credentials::new(
                access_key_id,
                secret_access_key,
                None, // No session token
                None, // No expiration
                "capture_service_s3",
            );
            aws_config_builder = aws_config_builder.credentials_provider(credentials);
        }

        if let Some(endpoint) = &config.endpoint {
            aws_config_builder = aws_config_builder.endpoint_url(endpoint);
        }

        let aws_config = aws_config_builder.load().await;

        Self {
            client: Client::new(&aws_config),
            config,
        }
    }

    /// Create a blob store around an existing client (tests).
    pub fn with_client(client: Client, config: S3Config) -> Self {
        Self { client, config }
    }

    /// Upload bytes under `key` with public-read access.
    ///
    /// Returns the public URL of the stored object.
    pub async fn put_public_object(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<String> {
        self.client
            .put_object()
            .bucket(&self.config.bucket)
            .key(key)
            .acl(ObjectCannedAcl::PublicRead)
            .content_type(content_type)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| AppError::Storage(format!("failed to store object {key}: {e}")))?;

        Ok(self.object_url(key))
    }

    /// Public URL for an object key.
    pub fn object_url(&self, key: &str) -> String {
        match &self.config.public_base_url {
            Some(base) => format!("{}/{}", base.trim_end_matches('/'), key),
            None => format!(
                "https://{}.s3.{}.amazonaws.com/{}",
                self.config.bucket, self.config.region, key
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(public_base_url: Option<&str>) -> S3Config {
        S3Config {
            bucket: "test-bucket".to_string(),
            region: "us-east-1".to_string(),
            access_key_id: None,
            secret_access_key: None,
            endpoint: None,
            public_base_url: public_base_url.map(str::to_string),
        }
    }

    fn store(config: S3Config) -> BlobStore {
        use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};

        let conf = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .credentials_provider(Credentials::new("test", "test", None, None, "test"))
            .build();
        BlobStore::with_client(Client::from_conf(conf), config)
    }

    #[test]
    fn object_url_virtual_hosted_style() {
        let store = store(config(None));
        assert_eq!(
            store.object_url("motion-capture-20240305_070911_123456.jpg"),
            "https://test-bucket.s3.us-east-1.amazonaws.com/motion-capture-20240305_070911_123456.jpg"
        );
    }

    #[test]
    fn object_url_with_public_base() {
        let store = store(config(Some("https://cdn.example.com/")));
        assert_eq!(
            store.object_url("a.jpg"),
            "https://cdn.example.com/a.jpg"
        );
    }
}
