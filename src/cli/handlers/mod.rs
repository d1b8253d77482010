//! Command handlers, one module per subcommand

mod export;
mod list;
mod new;
mod report;
mod show;
mod update;

pub use export::handle_export_command;
pub use list::handle_list_command;
pub use new::handle_new_command;
pub use report::handle_report_command;
pub use show::handle_show_command;
pub use update::handle_update_command;
