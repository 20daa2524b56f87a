pub mod client;
pub mod storage;
