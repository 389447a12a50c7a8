use crate::conf::ConfigError;
use crate::conf::types::BufferSpec;

/// `lower_limit < upper_limit <= size`
pub fn validate_buffer(buffer: Option<&BufferSpec>) -> Result<(), ConfigError> {
    let Some(b) = buffer else {
        return Ok(());
    };

    if b.lower_limit < b.upper_limit && b.upper_limit <= b.size {
        Ok(())
    } else {
        Err(ConfigError::InvalidBufferBounds {
            size: b.size,
            upper_limit: b.upper_limit,
            lower_limit: b.lower_limit,
        })
    }
}
