pub mod parameters;
pub mod result;

pub use parameters::EoqParameters;
pub use result::EoqResult;
