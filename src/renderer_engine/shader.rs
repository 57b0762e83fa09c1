use anyhow::{anyhow, Result};
use gl::types::*;
use std::{ffi::CString, ptr};

/// Compile et lie un programme vertex + fragment.
///
/// Les erreurs de compilation sont enrichies d'un extrait du source GLSL
/// autour de la ligne fautive.
///
/// # Safety
/// Le contexte OpenGL doit être courant sur ce thread.
pub unsafe fn compile_shader_program(vertex_src: &str, fragment_src: &str) -> Result<u32> {
    let vs = compile_shader(vertex_src, gl::VERTEX_SHADER)?;
    let fs = match compile_shader(fragment_src, gl::FRAGMENT_SHADER) {
        Ok(fs) => fs,
        Err(e) => {
            gl::DeleteShader(vs);
            return Err(e);
        }
    };

    let program = gl::CreateProgram();
    gl::AttachShader(program, vs);
    gl::AttachShader(program, fs);
    gl::LinkProgram(program);
    gl::DeleteShader(vs);
    gl::DeleteShader(fs);

    let mut success = gl::FALSE as GLint;
    gl::GetProgramiv(program, gl::LINK_STATUS, &mut success);
    if success != gl::TRUE as GLint {
        let mut len = 0;
        gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len);
        let mut buf = vec![0u8; len.max(0) as usize];
        gl::GetProgramInfoLog(program, len, ptr::null_mut(), buf.as_mut_ptr() as *mut _);
        gl::DeleteProgram(program);
        return Err(anyhow!(
            "Shader link failed:\n{}",
            String::from_utf8_lossy(&buf).trim_matches(char::from(0))
        ));
    }
    Ok(program)
}

unsafe fn compile_shader(src: &str, ty: GLenum) -> Result<u32> {
    let c_str = CString::new(src)?;
    let shader = gl::CreateShader(ty);
    gl::ShaderSource(shader, 1, &c_str.as_ptr(), ptr::null());
    gl::CompileShader(shader);

    let mut success = gl::FALSE as GLint;
    gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut success);
    if success == gl::TRUE as GLint {
        return Ok(shader);
    }

    let mut len = 0;
    gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len);
    let mut buf = vec![0u8; len.max(0) as usize];
    gl::GetShaderInfoLog(shader, len, ptr::null_mut(), buf.as_mut_ptr() as *mut _);
    gl::DeleteShader(shader);

    let log_cow = String::from_utf8_lossy(&buf);
    let log = log_cow.trim_matches(char::from(0));
    let mut message = format!("Shader compilation failed:\n{log}");
    if let Some(line) = parse_glsl_error_line(log) {
        message.push_str(&format_glsl_error_context(src, line));
    }
    Err(anyhow!(message))
}

/// Numéro de ligne d'une erreur GLSL.
/// Formats : "0:12(105): ..." (Mesa/Intel), "0(12) : ..." (NVIDIA), "ERROR: 0:12: ..." (AMD)
pub fn parse_glsl_error_line(log: &str) -> Option<usize> {
    let patterns = [
        r"(\d+):(\d+)\((\d+)\)",
        r"(\d+)\((\d+)\)\s*:",
        r":\s*(\d+):(\d+):",
    ];
    patterns.iter().find_map(|pattern| {
        let re = regex::Regex::new(pattern).ok()?;
        re.captures(log)?.get(2)?.as_str().parse().ok()
    })
}

/// Extrait du source GLSL autour de la ligne fautive (2 lignes de contexte)
pub fn format_glsl_error_context(src: &str, line_number: usize) -> String {
    let lines: Vec<&str> = src.lines().collect();
    if lines.is_empty() || line_number == 0 {
        return String::new();
    }

    let start = line_number.saturating_sub(3).min(lines.len());
    let end = (line_number + 2).min(lines.len());

    let mut output = format!("\n🔍 Error context (line {line_number}):\n");
    for (i, line) in lines[start..end].iter().enumerate() {
        let current = start + i + 1;
        let marker = if current == line_number { '>' } else { ' ' };
        output.push_str(&format!("{marker} {current:>3} | {line}\n"));
    }
    output
}
