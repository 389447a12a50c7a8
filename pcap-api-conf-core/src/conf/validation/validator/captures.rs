use crate::conf::ConfigError;

pub fn validate_concurrent_captures(value: Option<u32>) -> Result<(), ConfigError> {
    match value {
        Some(0) => Err(ConfigError::InvalidConcurrentCaptures { value: 0 }),
        _ => Ok(()),
    }
}
