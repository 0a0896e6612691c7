fn main() {
    // Build metadata for `jdevtools version --verbose`. Env vars win so
    // release pipelines can pin values without a git checkout.
    println!(
        "cargo:rustc-env=GIT_SHA={}",
        meta("GIT_SHA", "git", &["rev-parse", "--short", "HEAD"])
    );
    println!(
        "cargo:rustc-env=BUILD_DATE={}",
        meta("BUILD_DATE", "date", &["+%Y-%m-%d"])
    );
}

fn meta(var: &str, cmd: &str, args: &[&str]) -> String {
    std::env::var(var).unwrap_or_else(|_| {
        std::process::Command::new(cmd)
            .args(args)
            .output()
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
            .unwrap_or_else(|_| "unknown".to_string())
    })
}
