pub mod common;
pub mod generate;
pub mod run;
pub mod show;
