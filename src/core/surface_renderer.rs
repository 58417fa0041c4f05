use std::sync::Arc;

use anyhow::{anyhow, Result};
use egui::epaint::{ClippedShape, textures::TexturesDelta};
use wgpu::{Surface, SurfaceConfiguration};
use winit::window::Window;

use super::gpu_context::GpuContext;
use super::window::WindowDimensions;

/// Presents egui output on a transparent window surface
///
/// Each frame clears to fully transparent, so whatever egui does not paint
/// shows the desktop behind the window.
pub struct SurfaceRenderer {
    gpu: GpuContext,
    surface: Surface<'static>,
    surface_config: SurfaceConfiguration,
    egui_renderer: egui_wgpu::Renderer,
}

impl SurfaceRenderer {
    /// Create a renderer for `window`, blocking until the GPU is ready
    pub fn new(window: Arc<Window>) -> Result<Self> {
        let size = window.inner_size();
        let (gpu, surface) = pollster::block_on(GpuContext::for_window(window))?;

        let surface_config = Self::create_surface_config(&surface, &gpu, size.width, size.height)?;
        if size.width > 0 && size.height > 0 {
            surface.configure(gpu.device(), &surface_config);
        }

        let egui_renderer = egui_wgpu::Renderer::new(
            gpu.device(),
            surface_config.format,
            egui_wgpu::RendererOptions::default(),
        );

        Ok(Self {
            gpu,
            surface,
            surface_config,
            egui_renderer,
        })
    }

    fn create_surface_config(
        surface: &Surface<'_>,
        gpu: &GpuContext,
        width: u32,
        height: u32,
    ) -> Result<SurfaceConfiguration> {
        let caps = surface.get_capabilities(gpu.adapter());

        // egui does its own gamma handling and wants a linear-unaware target
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow!("surface reports no supported formats"))?;

        let alpha_mode = [
            wgpu::CompositeAlphaMode::PreMultiplied,
            wgpu::CompositeAlphaMode::PostMultiplied,
        ]
        .into_iter()
        .find(|mode| caps.alpha_modes.contains(mode))
        .or_else(|| caps.alpha_modes.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        if !matches!(
            alpha_mode,
            wgpu::CompositeAlphaMode::PreMultiplied | wgpu::CompositeAlphaMode::PostMultiplied
        ) {
            log::warn!("surface does not support transparency, corners will be opaque");
        }

        Ok(SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        })
    }

    /// Reconfigure for a new window size; zero sizes are ignored until restored
    pub fn resize(&mut self, dimensions: WindowDimensions) {
        if dimensions.is_empty() {
            return;
        }
        self.surface_config.width = dimensions.width;
        self.surface_config.height = dimensions.height;
        self.surface.configure(self.gpu.device(), &self.surface_config);
    }

    /// Tessellate and present one egui frame
    ///
    /// Returns `Ok(false)` when the frame was skipped because the surface had
    /// to be reconfigured or timed out; the caller should redraw.
    pub fn present(
        &mut self,
        ctx: &egui::Context,
        shapes: Vec<ClippedShape>,
        textures_delta: &TexturesDelta,
        pixels_per_point: f32,
    ) -> Result<bool> {
        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::debug!("surface lost, reconfiguring");
                self.surface.configure(self.gpu.device(), &self.surface_config);
                return Ok(false);
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::debug!("surface acquire timed out");
                return Ok(false);
            }
            Err(e) => return Err(anyhow!("failed to acquire surface texture: {e:?}")),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let device = self.gpu.device();
        let queue = self.gpu.queue();

        let tris = ctx.tessellate(shapes, pixels_per_point);
        for (id, image_delta) in &textures_delta.set {
            self.egui_renderer
                .update_texture(device, queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.surface_config.width, self.surface_config.height],
            pixels_per_point,
        };

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Clock Face Encoder"),
        });
        let egui_buffers = self.egui_renderer.update_buffers(
            device,
            queue,
            &mut encoder,
            &tris,
            &screen_descriptor,
        );

        {
            let mut render_pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Clock Face Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                            store: wgpu::StoreOp::Store,
                        },
                        depth_slice: None,
                    })],
                    depth_stencil_attachment: None,
                    occlusion_query_set: None,
                    timestamp_writes: None,
                })
                .forget_lifetime();

            self.egui_renderer
                .render(&mut render_pass, &tris, &screen_descriptor);
        }

        for id in &textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        queue.submit(egui_buffers.into_iter().chain(std::iter::once(encoder.finish())));
        frame.present();
        Ok(true)
    }
}
