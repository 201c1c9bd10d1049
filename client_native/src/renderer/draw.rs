use game_core::{DrawCmd, Scene};
use wgpu::*;

use super::resources::InstanceData;
use super::Renderer;
use crate::camera::CameraUniform;
use crate::glyphs;

pub fn draw_frame(renderer: &mut Renderer, scene: &Scene) -> Result<(), SurfaceError> {
    // Minimised: nothing to present to
    if renderer.size.0 == 0 || renderer.size.1 == 0 {
        return Ok(());
    }

    let output = renderer.surface.get_current_texture()?;
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer.device.create_command_encoder(&CommandEncoderDescriptor {
        label: Some("Render Encoder"),
    });

    let camera_uniform = CameraUniform::from_camera(&renderer.camera);
    renderer
        .queue
        .write_buffer(&renderer.camera_buffer, 0, bytemuck::cast_slice(&[camera_uniform]));

    let instances = build_instances(scene);
    renderer
        .instances
        .write(&renderer.device, &renderer.queue, &instances);

    {
        let [r, g, b, a] = scene.clear;
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(Color {
                        r: r as f64,
                        g: g as f64,
                        b: b as f64,
                        a: a as f64,
                    }),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        draw_objects(renderer, &mut pass, instances.len() as u32);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

/// Flatten the scene into quads, text included, in draw order
pub fn build_instances(scene: &Scene) -> Vec<InstanceData> {
    let mut instances = Vec::with_capacity(scene.commands.len());
    for cmd in &scene.commands {
        match cmd {
            DrawCmd::Rect { area, color } => {
                instances.push(InstanceData::from_aabb(area, *color));
            }
            DrawCmd::Text {
                text,
                pos,
                size,
                align,
                color,
            } => {
                instances.extend(
                    glyphs::layout(text, *pos, *size, *align)
                        .iter()
                        .map(|area| InstanceData::from_aabb(area, *color)),
                );
            }
        }
    }
    instances
}

fn draw_objects(renderer: &Renderer, pass: &mut RenderPass<'_>, count: u32) {
    if count == 0 {
        return;
    }
    pass.set_pipeline(&renderer.main_pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);
    pass.set_vertex_buffer(0, renderer.quad.vertex_buffer.slice(..));
    pass.set_vertex_buffer(1, renderer.instances.buffer.slice(..));
    pass.set_index_buffer(renderer.quad.index_buffer.slice(..), IndexFormat::Uint16);
    pass.draw_indexed(0..renderer.quad.index_count, 0, 0..count);
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Align, Match, BLACK, WHITE};
    use glam::Vec2;

    #[test]
    fn test_rects_become_one_instance_each() {
        let game = Match::new(7);
        let instances = build_instances(&game.scene());
        // Two paddles and the ball come before the score glyphs
        assert!(instances.len() > 3);
        assert_eq!(instances[0].tint, WHITE);
    }

    #[test]
    fn test_text_expands_to_glyph_quads() {
        let mut scene = Scene::new(BLACK);
        scene.text("1", Vec2::ZERO, 7.0, Align::Left, WHITE);
        assert_eq!(build_instances(&scene).len(), 7);

        let mut blank = Scene::new(BLACK);
        blank.text(" ", Vec2::ZERO, 7.0, Align::Left, WHITE);
        assert!(build_instances(&blank).is_empty());
    }
}
