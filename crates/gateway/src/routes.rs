pub mod facility;
pub mod health;
pub mod reservation;
pub mod users;
