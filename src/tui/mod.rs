pub mod app;
pub mod confirm;
pub mod input;
pub mod line_buffer;
pub mod render;
pub mod row;
pub mod theme;

pub use app::run;
