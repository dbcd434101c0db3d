pub mod config;
pub mod error;
pub mod logging;

pub mod input;
pub mod output;
pub mod redirect_map;
pub mod suggest;
pub mod validate;
