mod commands;
mod interactive;

pub use commands::ReplCommand;
pub use interactive::InteractiveRepl;
