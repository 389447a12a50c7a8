mod report;
mod validate;
mod validated_spec;
pub mod validator;

pub use report::*;
pub use validate::validate_spec;
pub use validated_spec::{TlsMaterial, ValidatedBosh, ValidatedSpec};
