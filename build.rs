use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var_os("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("version.rs");

    // Capture the short commit hash so `verfile --version` can report it.
    let git_hash = std::process::Command::new("git")
        .args(["log", "-1", "--pretty=%h"])
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout).ok()
            } else {
                None
            }
        })
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let mut f = File::create(&dest_path).unwrap();
    writeln!(&mut f, r#"pub const GIT_HASH: &str = "{}";"#, git_hash).unwrap();

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");
}
