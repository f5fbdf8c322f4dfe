pub mod scripted;
pub mod stdio;
