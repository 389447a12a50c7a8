pub mod defaulted;
pub mod runtime;
pub mod spec;

pub use defaulted::*;
pub use runtime::*;
pub use spec::*;
