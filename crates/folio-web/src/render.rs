//! WebGPU rendering of the hero background: two wireframe meshes drawn as
//! line lists and the particle cloud drawn as instanced, circle-masked
//! quads billboarded in view space. The surface clears to transparent so
//! the page background shows through.

use folio_core::constants::*;
use folio_core::geometry;
use folio_core::scene::{Camera, SceneState};
use glam::Mat4;
use web_sys as web;
use wgpu::util::DeviceExt;

use crate::constants::{AVATAR_COLOR, CLEAR_COLOR, KNOT_COLOR, PARTICLE_COLOR};

const LINE_SHADER: &str = r#"
struct Uniforms { mvp: mat4x4<f32>, color: vec4<f32> };
@group(0) @binding(0) var<uniform> u: Uniforms;

@vertex
fn vs_main(@location(0) pos: vec3<f32>) -> @builtin(position) vec4<f32> {
  return u.mvp * vec4<f32>(pos, 1.0);
}

@fragment
fn fs_main() -> @location(0) vec4<f32> {
  return u.color;
}
"#;

const PARTICLE_SHADER: &str = r#"
struct Uniforms {
  view_model: mat4x4<f32>,
  proj: mat4x4<f32>,
  color: vec4<f32>,
  params: vec4<f32>, // x = point size
};
@group(0) @binding(0) var<uniform> u: Uniforms;

struct VsOut {
  @builtin(position) pos: vec4<f32>,
  @location(0) local: vec2<f32>,
};

@vertex
fn vs_main(@location(0) v_pos: vec2<f32>, @location(1) i_pos: vec3<f32>) -> VsOut {
  // Billboard: offset the quad in view space so points always face the eye.
  let view_pos = u.view_model * vec4<f32>(i_pos, 1.0) + vec4<f32>(v_pos * u.params.x, 0.0, 0.0);
  var out: VsOut;
  out.pos = u.proj * view_pos;
  out.local = v_pos;
  return out;
}

@fragment
fn fs_main(inf: VsOut) -> @location(0) vec4<f32> {
  // Circular mask within the quad (unit circle of radius 0.5)
  let r = length(inf.local);
  let shape_alpha = 1.0 - smoothstep(0.48, 0.5, r);
  return vec4<f32>(u.color.rgb, shape_alpha * u.color.a);
}
"#;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct LineUniforms {
    mvp: [[f32; 4]; 4],
    color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct ParticleUniforms {
    view_model: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
    color: [f32; 4],
    params: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct ParticleInstance {
    pos: [f32; 3],
    _pad: f32,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    line_pipeline: wgpu::RenderPipeline,
    particle_pipeline: wgpu::RenderPipeline,
    knot_vb: wgpu::Buffer,
    knot_vertex_count: u32,
    avatar_vb: wgpu::Buffer,
    avatar_vertex_count: u32,
    quad_vb: wgpu::Buffer,
    instance_vb: wgpu::Buffer,
    knot_ub: wgpu::Buffer,
    avatar_ub: wgpu::Buffer,
    particle_ub: wgpu::Buffer,
    knot_bg: wgpu::BindGroup,
    avatar_bg: wgpu::BindGroup,
    particle_bg: wgpu::BindGroup,
    width: u32,
    height: u32,
}

fn flatten(points: &[glam::Vec3]) -> Vec<f32> {
    points.iter().flat_map(|p| [p.x, p.y, p.z]).collect()
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps.formats[0];
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        // Static wireframe geometry
        let knot_lines = geometry::torus_knot_wireframe(
            KNOT_P,
            KNOT_Q,
            KNOT_RADIUS,
            KNOT_TUBE_RADIUS,
            KNOT_TUBULAR_SEGMENTS,
            KNOT_RADIAL_SEGMENTS,
        );
        let avatar_lines = geometry::icosahedron_wireframe(AVATAR_RADIUS, AVATAR_SUBDIVISIONS);
        let knot_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("knot_vb"),
            contents: bytemuck::cast_slice(&flatten(&knot_lines)),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let avatar_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("avatar_vb"),
            contents: bytemuck::cast_slice(&flatten(&avatar_lines)),
            usage: wgpu::BufferUsages::VERTEX,
        });

        // Quad vertex buffer (two triangles)
        let quad_vertices: [f32; 12] = [
            -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
        ];
        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&quad_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let instance_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("instance_vb"),
            size: (std::mem::size_of::<ParticleInstance>() * PARTICLE_COUNT) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let uniform = |label: &str, size: u64| {
            device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(label),
                size,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            })
        };
        let knot_ub = uniform("knot_ub", std::mem::size_of::<LineUniforms>() as u64);
        let avatar_ub = uniform("avatar_ub", std::mem::size_of::<LineUniforms>() as u64);
        let particle_ub = uniform("particle_ub", std::mem::size_of::<ParticleUniforms>() as u64);

        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind = |label: &str, buffer: &wgpu::Buffer| {
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(label),
                layout: &bgl,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                }],
            })
        };
        let knot_bg = bind("knot_bg", &knot_ub);
        let avatar_bg = bind("avatar_bg", &avatar_ub);
        let particle_bg = bind("particle_bg", &particle_ub);

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });

        let line_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("line_shader"),
            source: wgpu::ShaderSource::Wgsl(LINE_SHADER.into()),
        });
        let line_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("line_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &line_shader,
                entry_point: Some("vs_main"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: (std::mem::size_of::<f32>() * 3) as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &[wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x3,
                        offset: 0,
                        shader_location: 0,
                    }],
                }],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &line_shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        let particle_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("particle_shader"),
            source: wgpu::ShaderSource::Wgsl(PARTICLE_SHADER.into()),
        });
        let particle_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("particle_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &particle_shader,
                entry_point: Some("vs_main"),
                buffers: &[
                    // slot 0: quad positions
                    wgpu::VertexBufferLayout {
                        array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &[wgpu::VertexAttribute {
                            format: wgpu::VertexFormat::Float32x2,
                            offset: 0,
                            shader_location: 0,
                        }],
                    },
                    // slot 1: per-particle position
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<ParticleInstance>() as u64,
                        step_mode: wgpu::VertexStepMode::Instance,
                        attributes: &[wgpu::VertexAttribute {
                            format: wgpu::VertexFormat::Float32x3,
                            offset: 0,
                            shader_location: 1,
                        }],
                    },
                ],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &particle_shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            line_pipeline,
            particle_pipeline,
            knot_vb,
            knot_vertex_count: knot_lines.len() as u32,
            avatar_vb,
            avatar_vertex_count: avatar_lines.len() as u32,
            quad_vb,
            instance_vb,
            knot_ub,
            avatar_ub,
            particle_ub,
            knot_bg,
            avatar_bg,
            particle_bg,
            width,
            height,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    pub fn render(
        &mut self,
        scene: &SceneState,
        camera: &Camera,
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        let vp = camera.view_proj();
        let write_lines = |queue: &wgpu::Queue, ub: &wgpu::Buffer, model: Mat4, color: [f32; 4]| {
            queue.write_buffer(
                ub,
                0,
                bytemuck::bytes_of(&LineUniforms {
                    mvp: (vp * model).to_cols_array_2d(),
                    color,
                }),
            );
        };
        write_lines(&self.queue, &self.knot_ub, scene.knot_model(), KNOT_COLOR);
        write_lines(
            &self.queue,
            &self.avatar_ub,
            scene.avatar_model(),
            AVATAR_COLOR,
        );
        self.queue.write_buffer(
            &self.particle_ub,
            0,
            bytemuck::bytes_of(&ParticleUniforms {
                view_model: (camera.view_matrix() * scene.particles_model()).to_cols_array_2d(),
                proj: camera.projection_matrix().to_cols_array_2d(),
                color: PARTICLE_COLOR,
                params: [PARTICLE_SIZE, 0.0, 0.0, 0.0],
            }),
        );

        let instances: Vec<ParticleInstance> = scene
            .particles
            .iter()
            .map(|p| ParticleInstance {
                pos: [p.x, p.y, p.z],
                _pad: 0.0,
            })
            .collect();
        self.queue
            .write_buffer(&self.instance_vb, 0, bytemuck::cast_slice(&instances));

        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            rpass.set_pipeline(&self.line_pipeline);
            rpass.set_bind_group(0, &self.knot_bg, &[]);
            rpass.set_vertex_buffer(0, self.knot_vb.slice(..));
            rpass.draw(0..self.knot_vertex_count, 0..1);

            rpass.set_bind_group(0, &self.avatar_bg, &[]);
            rpass.set_vertex_buffer(0, self.avatar_vb.slice(..));
            rpass.draw(0..self.avatar_vertex_count, 0..1);

            rpass.set_pipeline(&self.particle_pipeline);
            rpass.set_bind_group(0, &self.particle_bg, &[]);
            rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
            rpass.set_vertex_buffer(1, self.instance_vb.slice(..));
            rpass.draw(0..6, 0..PARTICLE_COUNT as u32);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
