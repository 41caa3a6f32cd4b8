use chrono::Datelike;

fn main() {
    let now = chrono::Utc::now();

    // Read with env! in the footer; server and browser must render the same year
    println!("cargo:rustc-env=BUILD_YEAR={}", now.year());

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=content");
}
