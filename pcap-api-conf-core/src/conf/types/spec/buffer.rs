use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub struct BufferSpec {
    pub size: u64,
    pub upper_limit: u64,
    pub lower_limit: u64,
}
