use std::{path::Path, process::Command};

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}

fn main() {
    if let Some(git_dir) = git(&["rev-parse", "--git-dir"]) {
        for entry in ["HEAD", "packed-refs", "refs/heads", "refs/tags"] {
            if Path::new(&git_dir).join(entry).exists() {
                println!("cargo:rerun-if-changed={git_dir}/{entry}");
            }
        }
    }

    if let Some(git_info) = git(&["describe", "--always", "--tags", "--long", "--dirty"]) {
        println!("cargo:rustc-env=_GIT_INFO={git_info}");
    }
}
