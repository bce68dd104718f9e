pub mod projection;
pub mod scenario;
