pub mod cmd_options;
pub mod stats;
pub mod timer;
pub mod timing;
