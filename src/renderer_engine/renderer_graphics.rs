use log::info;

use crate::cstr;
use crate::physic_engine::{Color, Scene, StageStatus, Vec2};
use crate::renderer_engine::{
    config::RendererConfig, r#trait::RendererEngine, shader::compile_shader_program,
    types::PointGPU,
};
use crate::utils::human_bytes::HumanBytes;

/// Renderer OpenGL minimal : particules et marqueurs d'entités en `GL_POINTS`,
/// transformés par la caméra de la simulation.
pub struct RendererGraphics {
    vao: u32,
    vbo_points: u32,
    shader_program: u32,
    loc_size: i32,
    loc_camera: i32,
    loc_zoom: i32,

    config: RendererConfig,
    window_size: (f32, f32),
    points: Vec<PointGPU>,
}

fn point(pos: Vec2, color: Color, alpha: f32, size: f32) -> PointGPU {
    PointGPU {
        pos_x: pos.x,
        pos_y: pos.y,
        col_r: color.x,
        col_g: color.y,
        col_b: color.z,
        alpha,
        size,
    }
}

impl RendererGraphics {
    /// # Errors
    /// Échec de compilation des shaders (contexte OpenGL requis).
    pub fn new(width: i32, height: i32, config: &RendererConfig) -> anyhow::Result<Self> {
        let (vertex_src, fragment_src) = Self::src_shaders_points();
        let shader_program = unsafe { compile_shader_program(vertex_src, fragment_src)? };

        let (loc_size, loc_camera, loc_zoom) = unsafe {
            (
                gl::GetUniformLocation(shader_program, cstr!("uSize")),
                gl::GetUniformLocation(shader_program, cstr!("uCamera")),
                gl::GetUniformLocation(shader_program, cstr!("uZoom")),
            )
        };

        let (mut vao, mut vbo_points) = (0u32, 0u32);
        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::BindVertexArray(vao);
            gl::GenBuffers(1, &mut vbo_points);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo_points);
            PointGPU::setup_vertex_attribs();
            gl::BindVertexArray(0);
        }

        let budget = config.max_points * std::mem::size_of::<PointGPU>();
        info!(
            "🎮 Point renderer ready: up to {} points per frame ({})",
            config.max_points,
            budget.human_bytes()
        );

        Ok(Self {
            vao,
            vbo_points,
            shader_program,
            loc_size,
            loc_camera,
            loc_zoom,
            config: config.clone(),
            window_size: (width as f32, height as f32),
            points: Vec::with_capacity(config.max_points),
        })
    }

    pub fn src_shaders_points() -> (&'static str, &'static str) {
        let vertex_src = r#"
        #version 330 core
        layout(location = 0) in vec2 aPos;
        layout(location = 1) in vec4 aColor;
        layout(location = 2) in float aSize;

        out vec4 vertexColor;

        uniform vec2 uSize;
        uniform vec2 uCamera;
        uniform float uZoom;

        void main() {
            vec2 view = (aPos - uCamera) * uZoom;
            gl_Position = vec4(view / (uSize * 0.5), 0.0, 1.0);
            gl_PointSize = max(aSize * uZoom, 1.0);
            vertexColor = aColor;
        }
        "#;

        let fragment_src = r#"
        #version 330 core
        in vec4 vertexColor;
        out vec4 FragColor;

        void main() {
            vec2 uv = gl_PointCoord - vec2(0.5);
            float dist = dot(uv, uv);
            if (dist > 0.25) discard;
            FragColor = vec4(vertexColor.rgb, vertexColor.a * smoothstep(0.25, 0.0, dist));
        }
        "#;
        (vertex_src, fragment_src)
    }

    /// Remplit `self.points` à partir de la scène (décor, étages, fusée, particules)
    fn collect_points(&mut self, scene: &Scene<'_>) {
        let scale = self.config.point_scale;
        let points = &mut self.points;
        points.clear();

        let env = scene.environment;
        points.extend(
            env.clouds
                .iter()
                .map(|c| point(c.pos, Color::ONE, c.opacity, c.size * scale)),
        );
        points.extend(
            env.satellites
                .iter()
                .map(|s| point(s.pos, Color::splat(0.8), 1.0, s.size * scale)),
        );
        for meteor in &env.meteors {
            points.extend(
                meteor
                    .trail
                    .iter()
                    .map(|&p| point(p, Color::new(1.0, 0.9, 0.6), 0.5, meteor.size * scale)),
            );
        }

        if scene.display.show_trajectory {
            points.extend(
                scene
                    .trajectory
                    .points()
                    .map(|&p| point(p, Color::new(1.0, 1.0, 0.0), 0.6, 2.0 * scale)),
            );
            points.extend(
                scene
                    .predicted_trajectory()
                    .into_iter()
                    .map(|p| point(p, Color::new(0.0, 1.0, 0.0), 0.4, 2.0 * scale)),
            );
        }

        for stage in scene.stages.iter().filter(|s| s.status() != StageStatus::Attached) {
            points.push(point(stage.pos, Color::splat(0.6), 1.0, stage.width * scale));
        }
        if !scene.rocket.exploded {
            points.push(point(scene.rocket.pos, Color::ONE, 1.0, 12.0 * scale));
        }

        points.extend(
            scene
                .smoke
                .iter()
                .map(|p| point(p.pos, p.color, p.alpha, p.size * scale)),
        );
        points.extend(
            scene
                .explosions
                .iter()
                .map(|p| point(p.pos, p.color, p.life, p.size * scale)),
        );

        points.truncate(self.config.max_points);
    }
}

impl RendererEngine for RendererGraphics {
    fn render_frame(&mut self, scene: &Scene<'_>) -> usize {
        self.collect_points(scene);
        let [r, g, b] = self.config.sky_color(scene.environment.day_time);

        unsafe {
            gl::Viewport(0, 0, self.window_size.0 as i32, self.window_size.1 as i32);
            gl::ClearColor(r, g, b, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);

            if !self.points.is_empty() {
                let bytes: &[u8] = bytemuck::cast_slice(&self.points);
                gl::BindVertexArray(self.vao);
                gl::BindBuffer(gl::ARRAY_BUFFER, self.vbo_points);
                gl::BufferData(
                    gl::ARRAY_BUFFER,
                    bytes.len() as isize,
                    bytes.as_ptr() as *const _,
                    gl::STREAM_DRAW,
                );

                gl::UseProgram(self.shader_program);
                gl::Uniform2f(self.loc_size, self.window_size.0, self.window_size.1);
                gl::Uniform2f(self.loc_camera, scene.camera.pos.x, scene.camera.pos.y);
                gl::Uniform1f(self.loc_zoom, scene.camera.zoom);
                gl::DrawArrays(gl::POINTS, 0, self.points.len() as i32);
                gl::BindVertexArray(0);
            }
        }

        scene.particle_count()
    }

    fn set_window_size(&mut self, width: i32, height: i32) {
        self.window_size = (width as f32, height as f32);
    }

    fn close(&mut self) {
        unsafe {
            if self.vbo_points != 0 {
                gl::DeleteBuffers(1, &self.vbo_points);
                self.vbo_points = 0;
            }
            if self.vao != 0 {
                gl::DeleteVertexArrays(1, &self.vao);
                self.vao = 0;
            }
            if self.shader_program != 0 {
                gl::DeleteProgram(self.shader_program);
                self.shader_program = 0;
            }
        }
    }
}
