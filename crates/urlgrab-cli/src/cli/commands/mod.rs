//! CLI command handlers, one file per subcommand.

mod completions;
mod derive;
mod man;
mod run;

pub use completions::run_completions;
pub use derive::run_derive;
pub use man::run_man;
pub use run::run_download;
