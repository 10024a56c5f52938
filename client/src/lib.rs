pub mod controls;
pub mod render;
pub mod run;
pub mod ticker;
