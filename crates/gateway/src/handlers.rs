pub mod facility;
pub mod proxy;
pub mod reservation;
pub mod users;
