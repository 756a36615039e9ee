//! Client construction errors, and the one place SSM error codes are read.

use aws_sdk_ssm::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_ssm::operation::{
    describe_parameters::DescribeParametersError, get_parameter::GetParameterError,
    put_parameter::PutParameterError,
};
use thiserror::Error;

use paramsync_core::{ParameterName, StoreError};

/// Errors raised while building an [`SsmStore`](crate::SsmStore).
#[derive(Debug, Error)]
pub enum AwsError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("no AWS region configured; pass --region or set one in the AWS config")]
    MissingRegion,
}

/// Error codes SSM uses for request throttling.
const THROTTLING_CODES: &[&str] = &[
    "ThrottlingException",
    "Throttling",
    "TooManyRequestsException",
];

pub(crate) fn classify_get(name: &ParameterName, err: GetParameterError) -> StoreError {
    if err.is_parameter_not_found() {
        return StoreError::NotFound { name: name.clone() };
    }
    classify_other(&err)
}

pub(crate) fn classify_describe(err: DescribeParametersError) -> StoreError {
    classify_other(&err)
}

pub(crate) fn classify_put(err: PutParameterError) -> StoreError {
    match &err {
        PutParameterError::ParameterLimitExceeded(e) => StoreError::RateLimited {
            message: modeled_message(e.message(), &err),
        },
        PutParameterError::InvalidAllowedPatternException(e) => StoreError::InvalidPattern {
            message: modeled_message(e.message(), &err),
        },
        PutParameterError::TooManyUpdates(e) => StoreError::ConcurrentUpdateConflict {
            message: modeled_message(e.message(), &err),
        },
        _ => classify_other(&err),
    }
}

fn classify_other<E>(err: &E) -> StoreError
where
    E: ProvideErrorMetadata + std::error::Error,
{
    match err.code() {
        Some(code) if THROTTLING_CODES.contains(&code) => StoreError::RateLimited {
            message: message_of(err),
        },
        code => StoreError::Unknown {
            code: code.map(str::to_owned),
            message: DisplayErrorContext(err).to_string(),
        },
    }
}

fn message_of<E: ProvideErrorMetadata>(err: &E) -> String {
    err.message().unwrap_or_default().to_owned()
}

/// The exception shape's own message, else the one in its error metadata.
fn modeled_message<E: ProvideErrorMetadata>(modeled: Option<&str>, err: &E) -> String {
    match modeled {
        Some(message) => message.to_owned(),
        None => message_of(err),
    }
}
