pub mod alerts;
pub mod lifecycle;
pub mod platform;
pub mod registration;

pub use alerts::*;
pub use lifecycle::*;
pub use platform::*;
pub use registration::*;
