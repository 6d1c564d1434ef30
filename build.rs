use std::process::Command;

fn main() {
    let pkg_version = env!("CARGO_PKG_VERSION");

    // Append the commit count so local builds are distinguishable: 0.1.0+42
    let version = match git_output(&["rev-list", "--count", "HEAD"]) {
        Some(count) if !count.is_empty() => format!("{}+{}", pkg_version, count),
        _ => pkg_version.to_string(),
    };

    println!("cargo:rustc-env=GISTCLIP_VERSION={}", version);

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");
}

fn git_output(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
