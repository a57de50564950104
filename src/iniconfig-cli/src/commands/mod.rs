//! Command handlers for the iniconfig CLI

pub mod configure;
pub mod free;
pub mod restore;
