pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use std::sync::Arc;

use crate::camera::Camera;
use crate::error::ClientError;
use crate::mesh::{create_quad, Mesh};
use game_core::Scene;
use resources::{InstanceBuffer, INITIAL_INSTANCE_CAPACITY};
use wgpu::*;
use winit::window::Window;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub size: (u32, u32),
    pub camera: Camera,

    pub main_pipeline: RenderPipeline,
    pub camera_buffer: Buffer,
    pub camera_bind_group: BindGroup,

    pub quad: Mesh,
    pub instances: InstanceBuffer,
}

impl Renderer {
    /// The camera always shows the whole `arena_width` x `arena_height`
    /// arena regardless of the surface size
    pub fn new(window: Arc<Window>, arena_width: f32, arena_height: f32) -> Result<Self, ClientError> {
        let ctx = init::init_wgpu(window)?;
        let camera = Camera::orthographic(arena_width, arena_height);

        let camera_buffer = resources::create_camera_buffer(&ctx.device, &camera);
        let pipes = pipeline::create_pipeline(&ctx.device, ctx.config.format);
        let quad = create_quad(&ctx.device, &ctx.queue);
        let instances = InstanceBuffer::new(&ctx.device, INITIAL_INSTANCE_CAPACITY);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            size: ctx.size,
            camera,
            main_pipeline: pipes.main_pipeline,
            camera_buffer,
            camera_bind_group,
            quad,
            instances,
        })
    }

    /// A zero size (minimised) is remembered but never configured
    pub fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
        if width == 0 || height == 0 {
            return;
        }
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.reconfigure();
    }

    /// Reapply the surface configuration after it was lost or outdated
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.surface_config);
    }

    pub fn draw(&mut self, scene: &Scene) -> Result<(), SurfaceError> {
        draw::draw_frame(self, scene)
    }
}
