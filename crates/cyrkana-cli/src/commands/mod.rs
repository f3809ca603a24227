pub mod check_ops;
pub mod config_ops;
pub mod convert_ops;
pub mod profile_ops;
