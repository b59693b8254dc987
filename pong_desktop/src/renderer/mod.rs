pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;
pub mod texture;

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::camera::Camera;
use crate::mesh::{create_quad, Mesh};
use draw::QuadBatch;
use pipeline::PipelineState;
use pong_core::{Match, TextureId};
use resources::GameBuffers;
use texture::SpriteTexture;
use wgpu::*;
use winit::window::Window;

/// Half extents of the visible field in world units
pub const VIEW_HALF_WIDTH: f32 = 4.0;
pub const VIEW_HALF_HEIGHT: f32 = 3.0;

#[allow(dead_code)]
pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub size: (u32, u32),
    pub camera: Camera,

    pub pipeline: PipelineState,
    pub camera_bind_group: BindGroup,

    // Resources
    pub buffers: GameBuffers,
    pub quad: Mesh,
    pub textures: HashMap<TextureId, SpriteTexture>,

    // Per-frame scratch
    pub batch: QuadBatch,
}

impl Renderer {
    /// Set up the GPU and load every sprite from `asset_dir`.
    /// A missing or unreadable image is an error.
    pub fn new(window: Arc<Window>, asset_dir: &Path) -> Result<Self, String> {
        let ctx = init::init_wgpu(window)?;
        let camera = Camera::orthographic(VIEW_HALF_WIDTH, VIEW_HALF_HEIGHT);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let pipeline = pipeline::create_pipeline(&ctx.device, ctx.config.format);
        let quad = create_quad(&ctx.device);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipeline.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        let sampler = texture::create_sampler(&ctx.device);
        let mut textures = HashMap::new();
        for id in TextureId::ALL {
            let sprite = texture::load_texture(
                &ctx.device,
                &ctx.queue,
                &pipeline.texture_layout,
                &sampler,
                &asset_dir.join(id.file_name()),
            )?;
            textures.insert(id, sprite);
        }
        log::info!("Loaded {} textures from {}", textures.len(), asset_dir.display());

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            size: ctx.size,
            camera,
            pipeline,
            camera_bind_group,
            buffers,
            quad,
            textures,
            batch: QuadBatch::default(),
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.size = (width, height);
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
    }

    pub fn draw(&mut self, game: &Match) -> Result<(), String> {
        draw::draw_frame(self, game)
    }
}
