pub mod add;
pub mod config;
pub mod helpers;
pub mod info;
pub mod install_info;
pub mod list;
pub mod paths;
pub mod render;
pub mod version;
