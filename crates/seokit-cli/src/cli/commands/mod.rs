//! CLI command handlers. Each command is in its own file.

mod redirect_map;
mod suggest;
mod validate;

pub use redirect_map::run_redirect_map;
pub use suggest::run_suggest;
pub use validate::run_validate;
