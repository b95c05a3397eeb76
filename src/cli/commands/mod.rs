mod generate;
mod health;
mod list;
mod remove;
mod show;

pub use generate::cmd_generate;
pub use health::cmd_health;
pub use list::cmd_list;
pub use remove::cmd_remove;
pub use show::cmd_show;
