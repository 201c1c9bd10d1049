use crate::camera::{Camera, CameraUniform};
use game_core::{Aabb, Color};
use wgpu::util::DeviceExt;
use wgpu::*;

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // centre x, centre y, width, height
    pub tint: [f32; 4],      // rgba
}

impl InstanceData {
    /// Per-instance attributes at locations 1 and 2, after the quad vertex
    pub fn layout() -> VertexBufferLayout<'static> {
        VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceData>() as BufferAddress,
            step_mode: VertexStepMode::Instance,
            attributes: &[
                VertexAttribute {
                    offset: std::mem::offset_of!(InstanceData, transform) as BufferAddress,
                    shader_location: 1,
                    format: VertexFormat::Float32x4,
                },
                VertexAttribute {
                    offset: std::mem::offset_of!(InstanceData, tint) as BufferAddress,
                    shader_location: 2,
                    format: VertexFormat::Float32x4,
                },
            ],
        }
    }

    pub fn from_aabb(area: &Aabb, tint: Color) -> Self {
        let center = (area.min + area.max) * 0.5;
        Self {
            transform: [center.x, center.y, area.width(), area.height()],
            tint,
        }
    }
}

pub const INITIAL_INSTANCE_CAPACITY: usize = 1024;

pub fn create_camera_buffer(device: &Device, camera: &Camera) -> Buffer {
    let camera_uniform = CameraUniform::from_camera(camera);
    device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    })
}

/// One vertex buffer holding every instance drawn this frame
pub struct InstanceBuffer {
    pub buffer: Buffer,
    capacity: usize,
}

impl InstanceBuffer {
    pub fn new(device: &Device, capacity: usize) -> Self {
        Self {
            buffer: create_instance_buffer(device, capacity),
            capacity,
        }
    }

    /// Upload `instances`, growing the buffer first if they don't fit
    pub fn write(&mut self, device: &Device, queue: &Queue, instances: &[InstanceData]) {
        if instances.len() > self.capacity {
            self.capacity = grown_capacity(instances.len());
            log::debug!("Growing instance buffer to {} instances", self.capacity);
            self.buffer = create_instance_buffer(device, self.capacity);
        }
        if !instances.is_empty() {
            queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(instances));
        }
    }
}

fn create_instance_buffer(device: &Device, capacity: usize) -> Buffer {
    device.create_buffer(&BufferDescriptor {
        label: Some("Instance Buffer"),
        size: (capacity * std::mem::size_of::<InstanceData>()) as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn grown_capacity(needed: usize) -> usize {
    needed.next_power_of_two().max(INITIAL_INSTANCE_CAPACITY)
}
