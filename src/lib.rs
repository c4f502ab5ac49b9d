pub mod cnf;
pub mod render;
pub mod targets;
