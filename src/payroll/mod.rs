pub mod brackets;
pub mod contributions;
pub mod engine;
pub mod error;
pub mod period;
pub mod tax;

pub use engine::{Clock, CustomDeduction, PayrollEngine, ProcessOptions, SystemClock};
pub use error::{PayrollError, PayrollResult};
pub use period::PayrollPeriod;
