pub mod agreement;
pub mod flash;
pub mod sign_in;
pub mod submission;
