pub mod clock_time;
pub mod season;
pub mod work_time;
