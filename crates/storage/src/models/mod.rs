mod event;
mod house;
mod points_schedule;
mod result;

pub use event::Event;
pub use house::House;
pub use points_schedule::{MAX_POINTS, PointsSchedule, ScheduleError};
pub use result::{EventResult, Placement};
