//! Domain model: records and their closed value sets

pub mod drink_type;
pub mod prefecture;
pub mod record;

pub use drink_type::DrinkType;
pub use prefecture::Prefecture;
pub use record::{DrinkRecord, DrinkRecordId};
