use log::{debug, info, warn};
use std::ffi::CStr;

#[macro_export]
macro_rules! cstr {
    ($s:expr) => {
        concat!($s, "\0").as_ptr() as *const i8
    };
}

unsafe fn gl_string(name: gl::types::GLenum) -> String {
    let ptr = gl::GetString(name);
    if ptr.is_null() {
        return "Unknown".into();
    }
    CStr::from_ptr(ptr as *const i8)
        .to_string_lossy()
        .into_owned()
}

/// Affiche les informations OpenGL / GPU du contexte actuel
/// # Safety
///
/// L'appelant doit s'assurer que le contexte OpenGL est valide et actif.
pub unsafe fn show_opengl_context_info() {
    info!("🖥 OpenGL context info:");
    info!("  Vendor   : {}", gl_string(gl::VENDOR));
    info!("  Renderer : {}", gl_string(gl::RENDERER));
    info!("  OpenGL   : {}", gl_string(gl::VERSION));
    info!("  GLSL     : {}", gl_string(gl::SHADING_LANGUAGE_VERSION));

    let mut num_ext = 0;
    gl::GetIntegerv(gl::NUM_EXTENSIONS, &mut num_ext);
    debug!("  Extensions: {} extensions detected", num_ext);

    // Consommer le glerror si nécessaire
    let err = gl::GetError();
    if err != gl::NO_ERROR {
        warn!("glerror consumed after getting context info: 0x{:X}", err);
    }
}
