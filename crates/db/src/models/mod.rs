pub mod category;
pub mod memo;
pub mod session;
pub mod user;
