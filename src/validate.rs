use crate::error::{DatamuseError, Result};
use crate::params::{Endpoint, METADATA_FLAGS, METADATA_PARAM};
use crate::query::Query;

/// Check an endpoint name and its parameters before anything is sent.
///
/// Endpoint first, then every parameter name in insertion order, then the
/// characters of `md`. The first offending value is reported.
pub fn validate(endpoint: &str, query: &Query) -> Result<Endpoint> {
    let endpoint: Endpoint = endpoint.parse()?;

    if let Some((name, _)) = query.iter().find(|(name, _)| !endpoint.accepts(name)) {
        return Err(DatamuseError::InvalidParameter(name.to_string()));
    }

    if let Some(flags) = query.get(METADATA_PARAM) {
        validate_metadata_flags(flags)?;
    }

    Ok(endpoint)
}

pub fn validate_metadata_flags(flags: &str) -> Result<()> {
    match flags.chars().find(|flag| !METADATA_FLAGS.contains(flag)) {
        Some(flag) => Err(DatamuseError::InvalidMetadataFlag(flag)),
        None => Ok(()),
    }
}
