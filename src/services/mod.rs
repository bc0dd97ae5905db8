pub mod cart_service;
pub mod clock;
pub mod storage;

pub use cart_service::*;
pub use clock::*;
