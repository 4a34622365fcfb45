mod format;
pub use format::*;

mod key_times;
pub use key_times::*;
