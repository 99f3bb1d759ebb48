pub mod libpath;
pub mod logging;
pub mod runner;
pub mod template;
pub mod version;

include!(concat!(env!("OUT_DIR"), "/version.rs"));

/// Short git hash captured by the build script
pub fn build_git_hash() -> &'static str {
    GIT_HASH
}
