pub mod check;
pub mod host_command;
pub mod list;
pub mod resolve;

pub use check::check_command;
pub use host_command::host_command;
pub use list::list_command;
pub use resolve::resolve_command;
