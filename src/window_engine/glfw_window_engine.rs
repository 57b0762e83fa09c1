use std::time::Duration;

use anyhow::{anyhow, Result};
use glfw::{Action, Context, WindowEvent};
use log::info;

use super::r#trait::WindowEngine;
use crate::input_engine::{InputEvent, Key};
use crate::renderer_engine::tools::show_opengl_context_info;

pub type WindowEvents = glfw::GlfwReceiver<(f64, WindowEvent)>;

/// Fenêtre GLFW + contexte OpenGL 3.3 core
pub struct GlfwWindowEngine {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: WindowEvents,
    last_time: f64,
}

impl GlfwWindowEngine {
    pub fn init(width: i32, height: i32, title: &str) -> Result<Self> {
        let mut glfw = glfw::init(glfw::fail_on_errors)
            .map_err(|e| anyhow!("Impossible d'initialiser GLFW: {e:?}"))?;

        glfw.window_hint(glfw::WindowHint::ContextVersionMajor(3));
        glfw.window_hint(glfw::WindowHint::ContextVersionMinor(3));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(
            glfw::OpenGlProfileHint::Core,
        ));

        let (mut window, events) = glfw
            .create_window(
                width as u32,
                height as u32,
                title,
                glfw::WindowMode::Windowed,
            )
            .ok_or_else(|| anyhow!("Erreur création fenêtre GLFW"))?;

        window.make_current();
        window.set_key_polling(true);
        window.set_char_polling(true);
        window.set_framebuffer_size_polling(true);

        info!("✅ OpenGL context ready for '{}'", title);

        // load OpenGL function pointers
        gl::load_with(|s| window.get_proc_address(s) as *const _);

        unsafe {
            show_opengl_context_info();
            gl::Enable(gl::PROGRAM_POINT_SIZE);
            gl::Enable(gl::BLEND);
            gl::BlendFunc(gl::SRC_ALPHA, gl::ONE_MINUS_SRC_ALPHA);
        }

        let last_time = glfw.get_time();
        Ok(Self {
            glfw,
            window,
            events,
            last_time,
        })
    }
}

/// Traduit un événement GLFW en événement de simulation.
///
/// Les caractères imprimables passent par `Char` (respecte majuscules et layout clavier),
/// les touches spéciales et les relâchements de zoom par `Key`.
fn translate(event: WindowEvent) -> Option<InputEvent> {
    use glfw::Key as G;

    match event {
        WindowEvent::FramebufferSize(w, h) => Some(InputEvent::Resized(w, h)),
        WindowEvent::Char(' ') => None,
        WindowEvent::Char(c) => Some(InputEvent::Pressed(Key::Char(c))),
        WindowEvent::Key(key, _, action, _) => {
            let pressed = match action {
                Action::Press | Action::Repeat => true,
                Action::Release => false,
            };
            let key = match key {
                G::Space if action == Action::Press => Key::Space,
                G::Escape if action == Action::Press => Key::Escape,
                G::Left => Key::Left,
                G::Right => Key::Right,
                G::Up => Key::Up,
                G::Down => Key::Down,
                G::Equal | G::KpAdd if !pressed => Key::Char('+'),
                G::Minus | G::KpSubtract if !pressed => Key::Char('-'),
                _ => return None,
            };
            Some(if pressed {
                InputEvent::Pressed(key)
            } else {
                InputEvent::Released(key)
            })
        }
        _ => None,
    }
}

impl WindowEngine for GlfwWindowEngine {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.glfw.poll_events();
        glfw::flush_messages(&self.events)
            .filter_map(|(_, event)| translate(event))
            .collect()
    }

    fn frame_delta(&mut self) -> Duration {
        let now = self.glfw.get_time();
        let delta = (now - self.last_time).max(0.0);
        self.last_time = now;
        Duration::from_secs_f64(delta)
    }

    fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn set_should_close(&mut self, value: bool) {
        self.window.set_should_close(value);
    }

    fn get_size(&self) -> (i32, i32) {
        self.window.get_size()
    }
}
