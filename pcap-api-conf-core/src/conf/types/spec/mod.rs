mod bosh;
mod buffer;
mod flag;
mod listen;
mod properties;

pub use bosh::{BoshSpec, MtlsSpec};
pub use buffer::BufferSpec;
pub use listen::{ListenSpec, TlsSpec};
pub use properties::{InstanceSpec, PropertyFile, PropertySpec};
