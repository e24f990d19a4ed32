use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::coords::{DVec2, Viewport};
use crate::render::{RenderCtx, RenderTarget};

/// View parameters consumed by the fractal program for one frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FractalView {
    /// Plane coordinate shown at the middle of the surface.
    pub center: DVec2,
    /// Magnification; the shorter surface side spans `2 / zoom` plane units.
    pub zoom: f64,
    /// Escape-time iteration budget per pixel.
    pub max_iterations: u32,
}

/// Full-screen Mandelbrot renderer.
///
/// Draws a static quad covering the whole target; every pixel of the previous
/// frame is overwritten, so no separate clear pass is needed.
#[derive(Default)]
pub struct FractalRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    view_ubo: Option<wgpu::Buffer>,

    quad_vbo: Option<wgpu::Buffer>,
    quad_ibo: Option<wgpu::Buffer>,
}

impl FractalRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one fractal pass into `target`.
    ///
    /// Skips the draw when the viewport is degenerate (minimized window).
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, view: FractalView) {
        if !ctx.viewport.is_valid() {
            return;
        }

        self.ensure_pipeline(ctx);
        self.ensure_static_buffers(ctx);
        self.ensure_bindings(ctx);

        let Some(ubo) = self.view_ubo.as_ref() else { return };
        let uniform = ViewUniform::new(view, ctx.viewport);
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&uniform));

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(quad_vbo) = self.quad_vbo.as_ref() else { return };
        let Some(quad_ibo) = self.quad_ibo.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("fractal pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, quad_vbo.slice(..));
        rpass.set_index_buffer(quad_ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..QUAD_INDICES.len() as u32, 0, 0..1);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("fractal shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/fractal.wgsl").into()),
        });

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("fractal bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: Some(ViewUniform::min_binding_size()),
                        },
                        count: None,
                    }],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("fractal pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("fractal pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[QuadVertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!("fractal pipeline built for {:?}", ctx.surface_format);

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);

        // Bindings belong to the old layout.
        self.bind_group = None;
        self.view_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.view_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let view_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("fractal view ubo"),
            size: std::mem::size_of::<ViewUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("fractal bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: view_ubo.as_entire_binding(),
            }],
        });

        self.view_ubo = Some(view_ubo);
        self.bind_group = Some(bind_group);
    }

    fn ensure_static_buffers(&mut self, ctx: &RenderCtx<'_>) {
        if self.quad_vbo.is_some() && self.quad_ibo.is_some() {
            return;
        }

        self.quad_vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("fractal quad vbo"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        }));

        self.quad_ibo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("fractal quad ibo"),
            contents: bytemuck::cast_slice(&QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        }));
    }
}

// ── view uniform ──────────────────────────────────────────────────────────

/// Mirrors `View` in `fractal.wgsl`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct ViewUniform {
    center: [f32; 2],
    viewport: [f32; 2],
    zoom: f32,
    max_iterations: u32,
    _pad: [f32; 2], // 16-byte struct size
}

impl ViewUniform {
    fn new(view: FractalView, viewport: Viewport) -> Self {
        Self {
            center: view.center.to_f32_array(),
            viewport: [viewport.width.max(1.0), viewport.height.max(1.0)],
            // f32 underflows long before f64 does; keep the shader's divisor non-zero.
            zoom: (view.zoom as f32).max(f32::MIN_POSITIVE),
            max_iterations: view.max_iterations.max(1),
            _pad: [0.0; 2],
        }
    }

    fn min_binding_size() -> std::num::NonZeroU64 {
        std::num::NonZeroU64::new(std::mem::size_of::<ViewUniform>() as u64)
            .expect("ViewUniform has non-zero size by construction")
    }
}

// ── full-screen quad ──────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct QuadVertex {
    pos: [f32; 2], // NDC
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { pos: [1.0, 1.0] },   // top right
    QuadVertex { pos: [-1.0, 1.0] },  // top left
    QuadVertex { pos: [-1.0, -1.0] }, // bottom left
    QuadVertex { pos: [1.0, -1.0] },  // bottom right
];

const QUAD_INDICES: [u16; 6] = [0, 1, 3, 1, 2, 3];

#[cfg(test)]
mod tests {
    use super::*;

    fn view(x: f64, y: f64, zoom: f64) -> FractalView {
        FractalView { center: DVec2::new(x, y), zoom, max_iterations: 256 }
    }

    // ── uniform packing ───────────────────────────────────────────────────

    #[test]
    fn uniform_layout_matches_wgsl() {
        assert_eq!(std::mem::size_of::<ViewUniform>(), 32);
        assert_eq!(ViewUniform::min_binding_size().get(), 32);
    }

    #[test]
    fn uniform_carries_center_zoom_and_viewport() {
        let u = ViewUniform::new(view(-1.0, 0.5, 4.0), Viewport::new(1024.0, 768.0));
        assert_eq!(u.center, [-1.0, 0.5]);
        assert_eq!(u.zoom, 4.0);
        assert_eq!(u.viewport, [1024.0, 768.0]);
        assert_eq!(u.max_iterations, 256);
    }

    #[test]
    fn uniform_zoom_never_reaches_zero() {
        let u = ViewUniform::new(view(0.0, 0.0, 1e-300), Viewport::new(10.0, 10.0));
        assert!(u.zoom > 0.0);
    }

    #[test]
    fn uniform_guards_degenerate_inputs() {
        let mut v = view(0.0, 0.0, 1.0);
        v.max_iterations = 0;
        let u = ViewUniform::new(v, Viewport::new(0.0, 0.0));
        assert_eq!(u.max_iterations, 1);
        assert_eq!(u.viewport, [1.0, 1.0]);
    }

    // ── quad ──────────────────────────────────────────────────────────────

    #[test]
    fn quad_covers_clip_space() {
        for idx in QUAD_INDICES {
            assert!((idx as usize) < QUAD_VERTICES.len());
        }
        let xs: Vec<f32> = QUAD_VERTICES.iter().map(|v| v.pos[0]).collect();
        let ys: Vec<f32> = QUAD_VERTICES.iter().map(|v| v.pos[1]).collect();
        assert!(xs.contains(&-1.0) && xs.contains(&1.0));
        assert!(ys.contains(&-1.0) && ys.contains(&1.0));
    }
}
