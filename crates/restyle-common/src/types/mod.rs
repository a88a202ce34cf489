mod color;
mod settings;

pub use color::*;
pub use settings::*;

#[cfg(test)]
mod tests;
