use log::info;

/// Version d'une dépendance, exportée par `build.rs` (cargo metadata)
fn dependency_version(version: Option<&'static str>) -> &'static str {
    version.filter(|v| !v.is_empty()).unwrap_or("Unknown")
}

/// Affiche les informations Rust et les dépendances principales de la compilation.
pub fn show_rust_core_dependencies() {
    info!(
        "Rust compiler version: {}",
        rustc_version_runtime::version()
    );
    info!("  Platform    : {}", std::env::consts::OS);
    info!("  Arch        : {}", std::env::consts::ARCH);

    info!("Rust core dependancies");
    info!("  glam version: {}", dependency_version(option_env!("GLAM_VERSION")));
    info!("  rand version: {}", dependency_version(option_env!("RAND_VERSION")));
    if cfg!(feature = "window") {
        info!("  GLFW version: {}", dependency_version(option_env!("GLFW_VERSION")));
    }
}
