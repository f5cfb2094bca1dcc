mod fs;

#[cfg(test)]
mod tests;

pub use fs::{path_to_string, with_trailing_separator, SEPARATOR};
