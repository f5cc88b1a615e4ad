//! Command implementations behind the clap surface

mod deploy;
mod note;
mod time;

pub use deploy::{cmd_deploy, cmd_test};
pub use note::cmd_note;
pub use time::cmd_time;
