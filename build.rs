// build.rs
use cargo_metadata::MetadataCommand;
use std::collections::HashSet;
use std::env;

fn main() {
    let window = env::var("CARGO_FEATURE_WINDOW").is_ok();

    if window {
        println!("cargo:warning=🟢 Compilation avec le frontend GLFW/OpenGL (feature = \"window\")");
    }

    println!("cargo:rerun-if-changed=Cargo.toml");

    // Récupère la metadata du projet
    let metadata = match MetadataCommand::new().exec() {
        Ok(metadata) => metadata,
        Err(e) => {
            println!("cargo:warning=⚠️ cargo metadata failed: {e}");
            return;
        }
    };

    // Ensemble des crates dont on veut afficher la version au démarrage
    let tracked = HashSet::from(["glam", "rand", "glfw"]);

    for package in &metadata.packages {
        if tracked.contains(package.name.as_str()) {
            println!(
                "cargo:rustc-env={}_VERSION={}",
                package.name.to_uppercase(),
                package.version
            );
        }
    }
}
