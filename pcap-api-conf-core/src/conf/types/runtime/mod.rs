mod bosh;
mod config;
mod listen;
mod material;

pub use bosh::{BoshConfig, MtlsConfig};
pub use config::{BufferConfig, ResolvedConfig};
pub use listen::{ListenConfig, TlsConfig};
pub use material::{MaterialFile, MaterialKind, MaterialPlan};
