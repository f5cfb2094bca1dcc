mod fs;
mod host;
mod std_host;
pub mod utils;

pub use fs::find_in_path;
pub use host::Host;
pub use std_host::StdHost;
