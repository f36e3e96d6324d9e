pub mod clock;
pub mod error;
pub mod status;
pub mod task;
pub mod timestamp;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::CoreError;
pub use status::Status;
pub use task::Task;
