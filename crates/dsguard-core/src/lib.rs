pub mod config;
pub mod logging;

pub mod checksum;
pub mod table;
pub mod validate;
