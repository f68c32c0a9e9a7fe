mod events;
mod init;
mod render;
mod state;
mod step;
mod watchers;

pub use init::AppOptions;
pub use state::{App, AppStats};
