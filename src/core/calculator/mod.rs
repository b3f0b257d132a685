pub mod clipper;
pub mod duration;
pub mod season;
pub mod window;
