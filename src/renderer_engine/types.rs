use bytemuck::{Pod, Zeroable};
use gl::types::*;
use memoffset::offset_of;
use std::mem;

/// Point envoyé au GPU (particule ou marqueur d'entité), en coordonnées monde.
///
/// | Location | Type    | Champs                            |
/// |:--------:|:--------|:----------------------------------|
/// | `0`      | `vec2`  | `pos_x`, `pos_y`                  |
/// | `1`      | `vec4`  | `col_r`, `col_g`, `col_b`, `alpha`|
/// | `2`      | `float` | `size`                            |
///
/// **Stride total** : `7 × f32 = 28 octets`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct PointGPU {
    pub pos_x: f32,
    pub pos_y: f32,
    pub col_r: f32,
    pub col_g: f32,
    pub col_b: f32,
    pub alpha: f32,
    pub size: f32,
}

impl PointGPU {
    /// Configure les attributs de sommets.
    ///
    /// ⚠️ Pré-requis : le VAO et le VBO doivent être liés avant l'appel.
    pub fn setup_vertex_attribs() {
        let stride = mem::size_of::<Self>() as GLsizei;

        unsafe {
            gl::VertexAttribPointer(
                0,
                2,
                gl::FLOAT,
                gl::FALSE,
                stride,
                offset_of!(Self, pos_x) as *const _,
            );
            gl::EnableVertexAttribArray(0);

            gl::VertexAttribPointer(
                1,
                4,
                gl::FLOAT,
                gl::FALSE,
                stride,
                offset_of!(Self, col_r) as *const _,
            );
            gl::EnableVertexAttribArray(1);

            gl::VertexAttribPointer(
                2,
                1,
                gl::FLOAT,
                gl::FALSE,
                stride,
                offset_of!(Self, size) as *const _,
            );
            gl::EnableVertexAttribArray(2);
        }
    }
}
