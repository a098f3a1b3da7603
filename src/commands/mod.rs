pub mod auth;
pub mod completion;
pub mod pets;
