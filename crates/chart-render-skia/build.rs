// File: crates/chart-render-skia/build.rs
// Summary: Link the Windows system library Skia's font manager needs.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW and friends
        println!("cargo:rustc-link-lib=advapi32");
    }
}
