pub mod ast;
pub mod check;
pub mod generate;
pub mod source_loader;

#[cfg(test)]
mod source_loader_tests;
