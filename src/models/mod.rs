pub mod cell;
pub mod record;
pub mod row;
pub mod semester;
pub mod weekday;

pub use cell::CellValue;
pub use record::MeetingRecord;
pub use row::{RawRow, ScheduleTable};
pub use semester::Semester;
pub use weekday::Weekday;
