use raylib::prelude::*;

use lookout::config::ViewerConfig;
use lookout::{LookCamera, Projection, Scene};
use lookout_render_raylib::conv::{color_to_rgba, vec3_to_rl};
use lookout_render_raylib::{TerrainRender, TerrainShader, upload_terrain_mesh};

pub struct App {
    pub cam: LookCamera,
    projection: Projection,
    shader: TerrainShader,
    terrain: TerrainRender,
    clear: Color,
    captured: bool,
    focused: bool,
    last_mouse: Vector2,
}

impl App {
    pub fn new(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        cfg: &ViewerConfig,
        scene: Scene,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let Scene {
            camera,
            projection,
            mesh,
            ..
        } = scene;
        let mut shader = TerrainShader::load(rl, thread)?;
        shader.set_projection(&projection.matrix(rl.get_screen_width(), rl.get_screen_height()));
        shader.set_view(camera.view_matrix());
        let terrain = upload_terrain_mesh(rl, thread, mesh, &shader)?;

        rl.set_exit_key(None);
        rl.disable_cursor();
        let mut cam = camera;
        let last_mouse = rl.get_mouse_position();
        cam.reset_cursor(last_mouse.x, last_mouse.y);

        let [r, g, b, a] = color_to_rgba(cfg.window.clear_color);
        Ok(Self {
            cam,
            projection,
            shader,
            terrain,
            clear: Color::new(r, g, b, a),
            captured: true,
            focused: rl.is_window_focused(),
            last_mouse,
        })
    }

    pub fn run(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        while !rl.window_should_close() {
            self.step(rl);
            self.render(rl, thread);
        }
        log::info!("window closed");
    }

    fn step(&mut self, rl: &mut RaylibHandle) {
        if rl.is_window_resized() {
            let (w, h) = (rl.get_screen_width(), rl.get_screen_height());
            self.shader.set_projection(&self.projection.matrix(w, h));
            log::debug!("framebuffer resized to {}x{}", w, h);
        }

        let focused = rl.is_window_focused();
        let clicked = !self.captured && rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT);
        if focused && (!self.focused || clicked) {
            self.capture(rl);
        }
        self.focused = focused;

        let mouse = rl.get_mouse_position();
        if mouse != self.last_mouse {
            self.last_mouse = mouse;
            self.cam.on_cursor_moved(mouse.x, mouse.y);
        }

        if rl.is_key_pressed(KeyboardKey::KEY_ESCAPE) {
            log::info!("view matrix: {:?}", self.cam.view_columns());
            if self.captured {
                rl.enable_cursor();
                self.captured = false;
            }
        }
    }

    /// Re-baselines the cursor too, so the capture does not read as a large motion.
    fn capture(&mut self, rl: &mut RaylibHandle) {
        rl.disable_cursor();
        self.captured = true;
        self.last_mouse = rl.get_mouse_position();
        self.cam.reset_cursor(self.last_mouse.x, self.last_mouse.y);
        log::info!("pointer captured");
    }

    fn render(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        self.shader.set_view(self.cam.view_matrix());
        let camera3d = Camera3D::perspective(
            vec3_to_rl(self.cam.position()),
            vec3_to_rl(self.cam.target()),
            Vector3::new(0.0, 1.0, 0.0),
            self.projection.fov_y_degrees,
        );
        let mut d = rl.begin_drawing(thread);
        d.clear_background(self.clear);
        {
            let mut d3 = d.begin_mode3D(camera3d);
            self.terrain.draw(&mut d3);
        }
        if !self.captured {
            d.draw_text("Pointer released; click to capture it", 12, 12, 20, Color::DARKGRAY);
        }
    }
}
