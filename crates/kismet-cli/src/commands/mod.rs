pub mod dump;
pub mod json;
pub mod opcodes;
