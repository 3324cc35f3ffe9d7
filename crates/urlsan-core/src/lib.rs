pub mod config;
pub mod logging;

pub mod listfile;
pub mod netskope;
pub mod report;
pub mod sanitize;
