pub(crate) mod fs;
pub(crate) mod logging;
pub(crate) mod terminal;

// Public API - utilities used by commands
pub use fs::{config_dir, shorten_name, write_config_file};
pub use logging::init_logging;
pub use terminal::{create_spinner, set_terminal_title, set_terminal_title_and_flush};
