pub mod home;
pub mod login;

pub use home::*;
