//! Command implementations behind the `ccnav` binary

pub mod discover;
pub mod init;
pub mod validate;
