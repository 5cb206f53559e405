//! Raylib-based GPU side of the viewer: conversions, terrain upload, and the terrain shader.
// Unsafe is required for Raylib mesh/model upload and material shader binding.

use lookout_mesh_cpu::Mesh;
use raylib::prelude::*;

/// Raylib meshes use 16-bit indices; parts stay below this many vertices.
pub const MAX_PART_VERTICES: usize = 65000;

pub mod conv {
    use lookout_geom::{Mat4, Vec3};

    pub fn vec3_to_rl(v: Vec3) -> raylib::prelude::Vector3 {
        raylib::prelude::Vector3::new(v.x, v.y, v.z)
    }

    /// Both sides are column-major; element `(row, col)` maps to `m{col*4+row}`.
    pub fn mat4_to_rl(m: &Mat4) -> raylib::prelude::Matrix {
        let a = m.to_cols_array();
        raylib::prelude::Matrix {
            m0: a[0],
            m1: a[1],
            m2: a[2],
            m3: a[3],
            m4: a[4],
            m5: a[5],
            m6: a[6],
            m7: a[7],
            m8: a[8],
            m9: a[9],
            m10: a[10],
            m11: a[11],
            m12: a[12],
            m13: a[13],
            m14: a[14],
            m15: a[15],
        }
    }

    pub fn color_to_rgba(c: [f32; 3]) -> [u8; 4] {
        let ch = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [ch(c[0]), ch(c[1]), ch(c[2]), 255]
    }
}

#[derive(Debug)]
pub enum RenderError {
    /// The compiled program lacks a uniform the terrain pass writes.
    ShaderUniformMissing(&'static str),
    /// Positions were baked into clip space; raylib meshes carry xyz only.
    ClipSpaceMesh,
    ModelLoad(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::ShaderUniformMissing(name) => {
                write!(f, "terrain shader has no `{}` uniform (compile or link failed?)", name)
            }
            RenderError::ClipSpaceMesh => {
                write!(f, "mesh positions are baked into clip space; upload needs world space")
            }
            RenderError::ModelLoad(msg) => write!(f, "model load failed: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

const TERRAIN_VS: &str = r#"#version 330
in vec3 vertexPosition;
in vec4 vertexColor;

uniform mat4 proj;
uniform mat4 view;

out vec3 fragColor;

void main() {
    gl_Position = proj * view * vec4(vertexPosition, 1.0);
    fragColor = vertexColor.rgb;
}
"#;

const TERRAIN_FS: &str = r#"#version 330
in vec3 fragColor;
out vec4 finalColor;

void main() {
    finalColor = vec4(fragColor, 1.0);
}
"#;

/// Flat vertex-color shader fed by explicit `proj` and `view` uniforms.
pub struct TerrainShader {
    pub shader: raylib::shaders::WeakShader,
    pub loc_proj: i32,
    pub loc_view: i32,
}

impl TerrainShader {
    pub fn load(rl: &mut RaylibHandle, thread: &RaylibThread) -> Result<Self, RenderError> {
        let shader_strong = rl.load_shader_from_memory(thread, Some(TERRAIN_VS), Some(TERRAIN_FS));
        let shader = unsafe { shader_strong.make_weak() };
        let loc_proj = shader.get_shader_location("proj");
        let loc_view = shader.get_shader_location("view");
        if loc_proj < 0 {
            return Err(RenderError::ShaderUniformMissing("proj"));
        }
        if loc_view < 0 {
            return Err(RenderError::ShaderUniformMissing("view"));
        }
        Ok(Self {
            shader,
            loc_proj,
            loc_view,
        })
    }

    pub fn set_projection(&mut self, proj: &lookout_geom::Mat4) {
        self.shader
            .set_shader_value_matrix(self.loc_proj, conv::mat4_to_rl(proj));
    }

    pub fn set_view(&mut self, view: &lookout_geom::Mat4) {
        self.shader
            .set_shader_value_matrix(self.loc_view, conv::mat4_to_rl(view));
    }

    /// Points the first material of `model` at this shader.
    pub fn bind(&self, model: &mut raylib::core::models::Model) {
        if let Some(mat) = model.materials_mut().get_mut(0) {
            let dest = mat.shader_mut();
            let dest_ptr: *mut raylib::ffi::Shader = dest.as_mut();
            let src_ptr: *const raylib::ffi::Shader = self.shader.as_ref();
            unsafe {
                std::ptr::copy_nonoverlapping(src_ptr, dest_ptr, 1);
            }
        }
    }
}

/// GPU-resident terrain: one model per mesh part.
pub struct TerrainRender {
    pub parts: Vec<raylib::core::models::Model>,
}

impl TerrainRender {
    pub fn draw<D: RaylibDraw3D>(&self, d3: &mut D) {
        for model in &self.parts {
            d3.draw_model(model, Vector3::zero(), 1.0, Color::WHITE);
        }
    }
}

/// Uploads a world-space mesh, splitting it into 16-bit indexable parts.
/// Consumes the CPU mesh; it is not needed once on the GPU.
pub fn upload_terrain_mesh(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    cpu: Mesh,
    shader: &TerrainShader,
) -> Result<TerrainRender, RenderError> {
    if !cpu.is_world_space() {
        return Err(RenderError::ClipSpaceMesh);
    }
    let mut parts_gpu = Vec::new();
    for part in cpu.split_faces(MAX_PART_VERTICES) {
        let v_count = part.vertices.len();
        let i_count = part.indices.len();
        let mut raw: raylib::ffi::Mesh = unsafe { std::mem::zeroed() };
        raw.vertexCount = v_count as i32;
        raw.triangleCount = (i_count / 3) as i32;
        unsafe {
            let vbytes = (v_count * 3 * std::mem::size_of::<f32>()) as u32;
            let cbytes = (v_count * 4 * std::mem::size_of::<u8>()) as u32;
            let ibytes = (i_count * std::mem::size_of::<u16>()) as u32;
            raw.vertices = raylib::ffi::MemAlloc(vbytes) as *mut f32;
            raw.colors = raylib::ffi::MemAlloc(cbytes) as *mut u8;
            raw.indices = raylib::ffi::MemAlloc(ibytes) as *mut u16;
            for (i, v) in part.vertices.iter().enumerate() {
                let p = v.position.truncate().to_array();
                std::ptr::copy_nonoverlapping(p.as_ptr(), raw.vertices.add(i * 3), 3);
                let c = conv::color_to_rgba(v.color);
                std::ptr::copy_nonoverlapping(c.as_ptr(), raw.colors.add(i * 4), 4);
            }
            for (i, &ix) in part.indices.iter().enumerate() {
                *raw.indices.add(i) = ix as u16;
            }
        }
        let mut mesh = unsafe { raylib::core::models::Mesh::from_raw(raw) };
        unsafe {
            mesh.upload(false);
        }
        let mut model = rl
            .load_model_from_mesh(thread, unsafe { mesh.make_weak() })
            .map_err(|e| RenderError::ModelLoad(e.to_string()))?;
        shader.bind(&mut model);
        parts_gpu.push(model);
    }
    log::info!(
        "uploaded terrain: {} vertices, {} triangles in {} part(s)",
        cpu.vertices.len(),
        cpu.triangle_count(),
        parts_gpu.len()
    );
    Ok(TerrainRender { parts: parts_gpu })
}

#[cfg(test)]
mod tests {
    use super::conv::*;
    use lookout_geom::{Mat4, Vec3};

    #[test]
    fn matrix_translation_lands_in_m12_to_m14() {
        let view = Mat4::look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::UP);
        let m = mat4_to_rl(&view);
        assert_eq!(m.m0, 1.0);
        assert_eq!(m.m5, 1.0);
        assert_eq!(m.m12, 0.0);
        assert_eq!(m.m14, -5.0);
        assert_eq!(m.m15, 1.0);
    }

    #[test]
    fn colors_are_quantized_and_opaque() {
        assert_eq!(color_to_rgba([0.0, 1.0, 0.5]), [0, 255, 128, 255]);
        assert_eq!(color_to_rgba([-1.0, 2.0, 0.51]), [0, 255, 130, 255]);
    }
}
