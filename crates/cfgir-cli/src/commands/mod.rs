pub mod size;
pub mod types;

#[cfg(test)]
mod size_tests;
