use crate::core::data::point::Point;
use crate::core::editor::session::Session;
use crate::core::render::frame_buffer::FrameBuffer;
use crate::core::render::render_frame::{RenderStats, render_frame};
use crate::core::render::theme::Theme;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::errors::GuiError;
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::Pixels;
use pixels::SurfaceTexture;
use pixels::wgpu;
use winit::dpi::PhysicalPosition;
use winit::window::Window;

/// Presents a fixed-size canvas scaled into the window, with the egui overlay
/// drawn on top at native resolution.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    canvas_width: u32,
    canvas_height: u32,
    surface_width: u32,
    surface_height: u32,
}

impl PixelsPresenter {
    pub fn new(
        window: &'static Window,
        canvas_width: u32,
        canvas_height: u32,
    ) -> Result<Self, GuiError> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        let pixels = Pixels::new(canvas_width, canvas_height, surface_texture)
            .map_err(GuiError::Surface)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            canvas_width,
            canvas_height,
            surface_width: size.width,
            surface_height: size.height,
        })
    }
}

impl GuiPresenterPort for PixelsPresenter {
    fn render(
        &mut self,
        session: &mut Session,
        theme: &Theme,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<RenderStats, GuiError> {
        let stats = {
            let mut canvas = FrameBuffer::new(
                self.pixels.frame_mut(),
                self.canvas_width,
                self.canvas_height,
            )
            .map_err(GuiError::Frame)?;

            render_frame(session, theme, &mut canvas)
        };

        self.pixels
            .render_with(|encoder, render_target, context| {
                // First, render the pixels framebuffer (the scaling pass)
                context.scaling_renderer.render(encoder, render_target);

                let clipped_primitives =
                    egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

                let screen_descriptor = egui_wgpu::ScreenDescriptor {
                    size_in_pixels: [self.surface_width, self.surface_height],
                    pixels_per_point: egui_ctx.pixels_per_point(),
                };

                let textures_delta = egui_output.textures_delta;

                // Upload new/changed egui textures
                for (id, delta) in &textures_delta.set {
                    self.egui_renderer
                        .update_texture(&context.device, &context.queue, *id, delta);
                }

                // Update egui buffers (vertices, indices)
                self.egui_renderer.update_buffers(
                    &context.device,
                    &context.queue,
                    encoder,
                    &clipped_primitives,
                    &screen_descriptor,
                );

                // Render egui on top of the scaled canvas
                {
                    let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                        label: Some("egui"),
                        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                            view: render_target,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Load, // Keep canvas content
                                store: wgpu::StoreOp::Store,
                            },
                        })],
                        depth_stencil_attachment: None,
                        ..Default::default()
                    });

                    self.egui_renderer.render(
                        &mut render_pass,
                        &clipped_primitives,
                        &screen_descriptor,
                    );
                }

                // Free textures no longer needed
                for id in &textures_delta.free {
                    self.egui_renderer.free_texture(id);
                }

                Ok(())
            })
            .map_err(GuiError::Render)?;

        Ok(stats)
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError> {
        self.pixels
            .resize_surface(width, height)
            .map_err(GuiError::Resize)?;

        self.surface_width = width;
        self.surface_height = height;

        Ok(())
    }

    fn window_to_canvas(&self, position: PhysicalPosition<f64>) -> Point {
        let (x, y) = self
            .pixels
            .window_pos_to_pixel((position.x as f32, position.y as f32))
            .unwrap_or_else(|outside| self.pixels.clamp_pixel_pos(outside));

        Point::new(x as f32, y as f32)
    }
}
