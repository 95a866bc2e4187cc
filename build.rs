/// Expose the compilation target triple to the crate.
///
/// `constants::TARGET` reads it with `env!("TARGET")` for the
/// `version` command.
fn main() {
    let target = std::env::var("TARGET").unwrap_or_else(|_| "unknown".to_string());
    println!("cargo:rustc-env=TARGET={target}");
    println!("cargo:rerun-if-changed=build.rs");
}
