mod bosh;
mod buffer;
mod captures;
mod ip_restriction;
mod properties;
mod tls;

pub use bosh::*;
pub use buffer::*;
pub use captures::*;
pub use ip_restriction::*;
pub use properties::*;
pub use tls::*;
