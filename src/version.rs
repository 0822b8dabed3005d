/// Version stamped by build.rs (includes git hash on dev builds)
pub const VERSION: &str = env!("MCPCAST_VERSION");

pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
