pub mod export;
pub mod icon;
pub mod logger;
pub mod manifest;
