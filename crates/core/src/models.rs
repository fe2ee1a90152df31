pub mod facility;
pub mod time_window;
