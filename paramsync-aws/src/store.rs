//! [`ParameterStore`] over AWS Systems Manager Parameter Store.
//!
//! The SDK is async; `SsmStore` owns a current-thread runtime and blocks on
//! every call, so callers stay synchronous.

use aws_sdk_ssm::types::{ParameterStringFilter, ParameterTier, ParameterType};
use aws_sdk_ssm::Client;

use paramsync_core::{ParameterName, ParameterRecord, ParameterStore, StoreError, Tier};

use crate::client::{build_runtime, load_client, ClientOptions};
use crate::error::{classify_describe, classify_get, classify_put, AwsError};

/// Data type written with every parameter.
const DATA_TYPE: &str = "text";

pub struct SsmStore {
    client: Client,
    runtime: tokio::runtime::Runtime,
}

impl SsmStore {
    /// Resolve credentials and region and build the client.
    pub fn connect(options: &ClientOptions) -> Result<Self, AwsError> {
        let runtime = build_runtime()?;
        let client = runtime.block_on(load_client(options))?;
        Ok(Self { client, runtime })
    }

    async fn get_async(&self, name: &ParameterName) -> Result<ParameterRecord, StoreError> {
        let output = self
            .client
            .get_parameter()
            .name(name.as_str())
            .with_decryption(true)
            .send()
            .await
            .map_err(|e| classify_get(name, e.into_service_error()))?;

        let value = output
            .parameter()
            .and_then(|p| p.value())
            .ok_or_else(|| StoreError::Unknown {
                code: None,
                message: format!("parameter {name} returned no value"),
            })?
            .to_owned();

        // GetParameter does not return description or tier.
        let filter = ParameterStringFilter::builder()
            .key("Name")
            .option("Equals")
            .values(name.as_str())
            .build()
            .map_err(|e| StoreError::Unknown {
                code: None,
                message: e.to_string(),
            })?;
        let details = self
            .client
            .describe_parameters()
            .parameter_filters(filter)
            .send()
            .await
            .map_err(|e| classify_describe(e.into_service_error()))?;

        let (description, tier) = match details.parameters().first() {
            Some(meta) => (
                meta.description().unwrap_or_default().to_owned(),
                meta.tier().and_then(tier_from_sdk),
            ),
            None => {
                tracing::warn!(parameter = %name, "describe returned no metadata");
                (String::new(), None)
            }
        };

        Ok(ParameterRecord {
            name: name.clone(),
            value,
            description,
            tier,
        })
    }

    async fn put_async(&self, record: &ParameterRecord) -> Result<(), StoreError> {
        self.client
            .put_parameter()
            .name(record.name.as_str())
            .value(&record.value)
            .description(&record.description)
            .r#type(ParameterType::SecureString)
            .overwrite(true)
            .set_tier(record.tier.map(tier_to_sdk))
            .data_type(DATA_TYPE)
            .send()
            .await
            .map_err(|e| classify_put(e.into_service_error()))?;
        Ok(())
    }
}

impl ParameterStore for SsmStore {
    fn get(&self, name: &ParameterName) -> Result<ParameterRecord, StoreError> {
        self.runtime.block_on(self.get_async(name))
    }

    fn put(&self, record: &ParameterRecord) -> Result<(), StoreError> {
        self.runtime.block_on(self.put_async(record))
    }
}

pub(crate) fn tier_to_sdk(tier: Tier) -> ParameterTier {
    match tier {
        Tier::Standard => ParameterTier::Standard,
        Tier::Advanced => ParameterTier::Advanced,
        Tier::IntelligentTiering => ParameterTier::IntelligentTiering,
    }
}

pub(crate) fn tier_from_sdk(tier: &ParameterTier) -> Option<Tier> {
    match tier {
        ParameterTier::Standard => Some(Tier::Standard),
        ParameterTier::Advanced => Some(Tier::Advanced),
        ParameterTier::IntelligentTiering => Some(Tier::IntelligentTiering),
        other => {
            tracing::warn!(tier = other.as_str(), "unrecognised parameter tier");
            None
        }
    }
}
