//! Unit quad shared by every sprite

use wgpu::util::DeviceExt;
use wgpu::*;

/// Vertex data for the quad
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
}

impl Vertex {
    pub fn layout() -> VertexBufferLayout<'static> {
        VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as BufferAddress,
            step_mode: VertexStepMode::Vertex,
            attributes: &[
                VertexAttribute {
                    offset: std::mem::offset_of!(Vertex, position) as BufferAddress,
                    shader_location: 0,
                    format: VertexFormat::Float32x2,
                },
                VertexAttribute {
                    offset: std::mem::offset_of!(Vertex, uv) as BufferAddress,
                    shader_location: 1,
                    format: VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// GPU mesh with vertex and index buffers
pub struct Mesh {
    pub vertex_buffer: Buffer,
    pub index_buffer: Buffer,
    pub index_count: u32,
}

/// Quad spanning [-0.5, 0.5] on both axes; image rows run top to bottom
pub fn quad_geometry() -> ([Vertex; 4], [u16; 6]) {
    let vertices = [
        Vertex { position: [-0.5, -0.5], uv: [0.0, 1.0] }, // Lower left
        Vertex { position: [0.5, -0.5], uv: [1.0, 1.0] },  // Lower right
        Vertex { position: [0.5, 0.5], uv: [1.0, 0.0] },   // Upper right
        Vertex { position: [-0.5, 0.5], uv: [0.0, 0.0] },  // Upper left
    ];
    let indices = [0, 1, 2, 0, 2, 3];
    (vertices, indices)
}

pub fn create_quad(device: &Device) -> Mesh {
    let (vertices, indices) = quad_geometry();

    let vertex_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Quad Vertex Buffer"),
        contents: bytemuck::cast_slice(&vertices),
        usage: BufferUsages::VERTEX,
    });

    let index_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Quad Index Buffer"),
        contents: bytemuck::cast_slice(&indices),
        usage: BufferUsages::INDEX,
    });

    Mesh {
        vertex_buffer,
        index_buffer,
        index_count: indices.len() as u32,
    }
}
