pub mod expiry;
pub mod motion;
pub mod spawn;
