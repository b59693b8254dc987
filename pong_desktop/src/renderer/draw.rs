use glam::Mat4;
use pong_core::{DrawSink, Match, TextureId};
use wgpu::*;

use super::resources::{InstanceData, MAX_QUADS};
use super::Renderer;

/// Quads collected from the match for one frame, in draw order
#[derive(Default)]
pub struct QuadBatch {
    pub quads: Vec<(InstanceData, TextureId)>,
}

impl QuadBatch {
    pub fn clear(&mut self) {
        self.quads.clear();
    }

    pub fn instances(&self) -> Vec<InstanceData> {
        self.quads.iter().map(|(instance, _)| *instance).collect()
    }
}

impl DrawSink for QuadBatch {
    fn draw(&mut self, transform: Mat4, texture: TextureId) {
        self.quads.push((InstanceData::from_matrix(transform), texture));
    }
}

pub fn draw_frame(renderer: &mut Renderer, game: &Match) -> Result<(), String> {
    let output = match renderer.surface.get_current_texture() {
        Ok(output) => output,
        Err(SurfaceError::Lost | SurfaceError::Outdated) => {
            log::warn!("Surface lost, reconfiguring");
            renderer
                .surface
                .configure(&renderer.device, &renderer.surface_config);
            return Ok(());
        }
        Err(SurfaceError::OutOfMemory) => {
            return Err("Failed to get current texture: out of memory".to_string());
        }
        Err(e) => {
            log::warn!("Skipping frame: {:?}", e);
            return Ok(());
        }
    };
    let view = output.texture.create_view(&TextureViewDescriptor::default());

    update_buffers(renderer, game);

    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(Color::BLACK),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        draw_quads(renderer, &mut pass);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

fn update_buffers(renderer: &mut Renderer, game: &Match) {
    renderer.batch.clear();
    game.render(&mut renderer.batch);

    if renderer.batch.quads.len() > MAX_QUADS {
        log::warn!(
            "Dropping {} quads over the instance buffer capacity",
            renderer.batch.quads.len() - MAX_QUADS
        );
        renderer.batch.quads.truncate(MAX_QUADS);
    }

    let instances = renderer.batch.instances();
    if !instances.is_empty() {
        renderer
            .queue
            .write_buffer(&renderer.buffers.instances, 0, bytemuck::cast_slice(&instances));
    }
}

fn draw_quads(renderer: &Renderer, pass: &mut RenderPass<'_>) {
    pass.set_pipeline(&renderer.pipeline.sprite_pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);
    pass.set_vertex_buffer(0, renderer.quad.vertex_buffer.slice(..));
    pass.set_vertex_buffer(1, renderer.buffers.instances.slice(..));
    pass.set_index_buffer(renderer.quad.index_buffer.slice(..), IndexFormat::Uint16);

    // One draw per quad since each may sample a different texture
    for (i, (_, texture)) in renderer.batch.quads.iter().enumerate() {
        let Some(sprite) = renderer.textures.get(texture) else {
            log::warn!("No texture loaded for {:?}", texture);
            continue;
        };
        let instance = i as u32;
        pass.set_bind_group(1, &sprite.bind_group, &[]);
        pass.draw_indexed(0..renderer.quad.index_count, 0, instance..instance + 1);
    }
}
