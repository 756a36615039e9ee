//! SDK client construction.

use aws_config::BehaviorVersion;
use aws_sdk_ssm::config::Region;
use aws_sdk_ssm::Client;

use crate::error::AwsError;

/// Overrides for the SDK's default credential and region discovery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientOptions {
    pub region: Option<String>,
    pub profile: Option<String>,
    /// Custom endpoint, e.g. a local emulator.
    pub endpoint_url: Option<String>,
}

/// Build a single-threaded runtime for blocking on SDK calls.
pub(crate) fn build_runtime() -> Result<tokio::runtime::Runtime, AwsError> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(AwsError::Runtime)
}

/// Load shared config (env, profile files, IMDS) and build an SSM client.
pub(crate) async fn load_client(options: &ClientOptions) -> Result<Client, AwsError> {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = &options.region {
        loader = loader.region(Region::new(region.clone()));
    }
    if let Some(profile) = &options.profile {
        loader = loader.profile_name(profile);
    }
    if let Some(url) = &options.endpoint_url {
        loader = loader.endpoint_url(url);
    }

    let config = loader.load().await;
    match config.region() {
        Some(region) => tracing::debug!(%region, "loaded AWS config"),
        None => return Err(AwsError::MissingRegion),
    }
    Ok(Client::new(&config))
}
