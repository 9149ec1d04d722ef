pub mod period;
pub mod record;
pub mod summary;

pub use period::*;
pub use record::*;
pub use summary::*;
