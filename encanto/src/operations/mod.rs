//! Operations that span storage and the filesystem.

pub mod init;

pub use init::{init_database, InitOptions, InitResult};
