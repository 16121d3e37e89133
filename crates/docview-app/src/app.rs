//! Core application state and lifecycle.

use docview_core::MeasureSpec;
use docview_render::{RenderContext, RenderResult, Renderer, RendererError, VelloRenderer};
use kurbo::{Point, Size};
use std::sync::Arc;
use vello::util::RenderSurface;
use vello::wgpu::PresentMode;
use vello::{AaConfig, RenderParams, RendererOptions};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

use crate::binding;
use crate::config::AppConfig;
use crate::host::DemoHost;
use crate::ui::{render_ui, UiAction, UiState};

/// Logical width kept free on the right for the property panel.
const PANEL_WIDTH: f64 = 400.0;
/// Logical margin around the view's parent area.
const MARGIN: f64 = 24.0;

fn create_vello_renderer(device: &vello::wgpu::Device) -> RenderResult<vello::Renderer> {
    vello::Renderer::new(device, RendererOptions::default())
        .map_err(|e| RendererError::InitFailed(format!("{e:?}")))
}

/// Runtime state for the application.
struct AppState {
    // Windowing
    window: Arc<Window>,
    surface: RenderSurface<'static>,

    // Rendering
    vello_renderer: vello::Renderer,
    view_renderer: VelloRenderer,
    /// Texture blitter for RGBA->surface format conversion
    texture_blitter: vello::wgpu::util::TextureBlitter,

    // egui
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
    ui_state: UiState,

    // State
    host: DemoHost,
    config: AppConfig,
}

impl AppState {
    /// Area the view's parent occupies, in physical pixels.
    fn parent_area(&self) -> (Point, u32, u32) {
        let scale = self.window.scale_factor();
        let margin = MARGIN * scale;
        let width = f64::from(self.surface.config.width) - PANEL_WIDTH * scale - 2.0 * margin;
        let height = f64::from(self.surface.config.height) - 2.0 * margin;
        (
            Point::new(margin, margin),
            width.max(0.0) as u32,
            height.max(0.0) as u32,
        )
    }

    fn handle_action(&mut self, action: UiAction) {
        match action {
            UiAction::Apply(property) => {
                let text = self.ui_state.text(property).to_string();
                if binding::apply(&mut self.host, property, &text) {
                    log::info!("Applied {} = {:?}", property.label(), text);
                }
            }
            UiAction::Recreate => {
                if let Err(e) = self.host.recreate() {
                    log::error!("Failed to restore view state: {}", e);
                }
                self.ui_state.reload(&self.host);
            }
            UiAction::Reload => self.ui_state.reload(&self.host),
        }
    }
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    state: Option<AppState>,
    render_cx: Option<vello::util::RenderContext>,
}

impl App {
    /// Create a new application with custom configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            state: None,
            render_cx: None,
        }
    }

    /// Run the application.
    pub async fn run(config: AppConfig) {
        let event_loop = match EventLoop::new() {
            Ok(event_loop) => event_loop,
            Err(e) => {
                log::error!("Failed to create event loop: {}", e);
                return;
            }
        };
        let mut app = App::with_config(config);
        if let Err(e) = event_loop.run_app(&mut app) {
            log::error!("Event loop error: {}", e);
        }
    }

    /// Finish initialization after surface is created.
    fn finish_init(&mut self, window: Arc<Window>, surface: RenderSurface<'static>) {
        let Some(render_cx) = self.render_cx.as_ref() else {
            return;
        };
        let device = &render_cx.devices[surface.dev_id].device;

        let vello_renderer = match create_vello_renderer(device) {
            Ok(renderer) => renderer,
            Err(e) => {
                log::error!("{}", e);
                return;
            }
        };

        // Vello renders to Rgba8Unorm; the surface may be Bgra8Unorm
        let texture_blitter =
            vello::wgpu::util::TextureBlitter::new(device, surface.config.format);

        // Initialize egui
        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            device,
            surface.config.format,
            egui_wgpu::RendererOptions::default(),
        );

        let metrics = self.config.metrics(window.scale_factor());
        let host = DemoHost::new(&self.config, metrics);
        let ui_state = UiState::from_host(&host);

        log::info!(
            "DocumentView demo initialized - {}x{} at density {}",
            surface.config.width,
            surface.config.height,
            metrics.density
        );

        self.state = Some(AppState {
            window: window.clone(),
            surface,
            vello_renderer,
            view_renderer: VelloRenderer::new(),
            texture_blitter,
            egui_ctx,
            egui_state,
            egui_renderer,
            ui_state,
            host,
            config: self.config.clone(),
        });

        // Request initial redraw
        window.request_redraw();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        log::info!("Creating window...");

        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        let (width, height) = if size.width == 0 || size.height == 0 {
            (self.config.width, self.config.height)
        } else {
            (size.width, size.height)
        };

        log::info!("Surface size: {}x{}", width, height);

        let render_cx = self
            .render_cx
            .get_or_insert_with(vello::util::RenderContext::new);

        let surface = match pollster::block_on(render_cx.create_surface(
            window.clone(),
            width,
            height,
            PresentMode::AutoVsync,
        )) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Failed to create surface: {:?}", e);
                event_loop.exit();
                return;
            }
        };

        // Transmute lifetime to 'static - safe because App owns everything
        let surface: RenderSurface<'static> = unsafe { std::mem::transmute(surface) };
        self.finish_init(window, surface);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(state) = &mut self.state else {
            return;
        };

        // Let egui process the event first
        let _ = state.egui_state.on_window_event(&state.window, &event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    return;
                }

                if let Some(render_cx) = self.render_cx.as_mut() {
                    render_cx.resize_surface(&mut state.surface, size.width, size.height);
                }

                state.window.request_redraw();
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                log::info!("Scale factor changed to {}", scale_factor);
                if let Err(e) = state.host.set_metrics(state.config.metrics(scale_factor)) {
                    log::error!("Failed to restore view state: {}", e);
                }
                state.ui_state.reload(&state.host);
                state.window.request_redraw();
            }

            WindowEvent::RedrawRequested => {
                // Lay out the view against its parent area
                let (origin, parent_width, parent_height) = state.parent_area();
                state.host.update(
                    MeasureSpec::Exactly(parent_width),
                    MeasureSpec::Exactly(parent_height),
                    state.view_renderer.text_engine_mut(),
                );
                state.ui_state.view_size = state.host.size();

                // Run egui and get any actions
                let egui_input = state.egui_state.take_egui_input(&state.window);
                let mut ui_action: Option<UiAction> = None;
                let egui_output = state.egui_ctx.run(egui_input, |ctx| {
                    ui_action = render_ui(ctx, &mut state.ui_state);
                });
                if let Some(action) = ui_action {
                    state.handle_action(action);
                }

                state.egui_state.handle_platform_output(&state.window, egui_output.platform_output);
                let egui_primitives = state.egui_ctx.tessellate(egui_output.shapes, egui_output.pixels_per_point);

                let width = state.surface.config.width;
                let height = state.surface.config.height;

                // Build the view scene
                let view_size = state.host.size();
                let background = state.config.background_color.to_color();
                let mut ctx = RenderContext::new(
                    state.host.view_mut(),
                    view_size,
                    Size::new(f64::from(width), f64::from(height)),
                )
                .with_origin(origin)
                .with_background(background);
                state.view_renderer.build_scene(&mut ctx);
                let base_color = state.view_renderer.background_color(&ctx);
                let scene = state.view_renderer.take_scene();

                // Render
                let Some(render_cx) = self.render_cx.as_ref() else {
                    return;
                };

                let device_handle = &render_cx.devices[state.surface.dev_id];
                let device = &device_handle.device;
                let queue = &device_handle.queue;

                let surface_texture = match state.surface.surface.get_current_texture() {
                    Ok(t) => t,
                    Err(e) => {
                        log::warn!("{}", RendererError::Surface(format!("{e:?}")));
                        return;
                    }
                };

                let params = RenderParams {
                    base_color,
                    width,
                    height,
                    antialiasing_method: AaConfig::Area,
                };

                // Vello's compute shaders need StorageBinding, which requires Rgba8Unorm
                let render_texture = device.create_texture(&vello::wgpu::TextureDescriptor {
                    label: Some("vello render texture"),
                    size: vello::wgpu::Extent3d {
                        width,
                        height,
                        depth_or_array_layers: 1,
                    },
                    mip_level_count: 1,
                    sample_count: 1,
                    dimension: vello::wgpu::TextureDimension::D2,
                    format: vello::wgpu::TextureFormat::Rgba8Unorm,
                    usage: vello::wgpu::TextureUsages::STORAGE_BINDING
                        | vello::wgpu::TextureUsages::COPY_SRC
                        | vello::wgpu::TextureUsages::TEXTURE_BINDING,
                    view_formats: &[],
                });

                let render_texture_view = render_texture
                    .create_view(&vello::wgpu::TextureViewDescriptor::default());

                if let Err(e) = state
                    .vello_renderer
                    .render_to_texture(device, queue, &scene, &render_texture_view, &params)
                    .map_err(|e| RendererError::RenderFailed(format!("{e:?}")))
                {
                    log::error!("{}", e);
                    return;
                }

                let surface_view = surface_texture.texture.create_view(
                    &vello::wgpu::TextureViewDescriptor::default()
                );

                // Blit the RGBA intermediate texture to the surface texture
                {
                    let mut blit_encoder = device.create_command_encoder(
                        &vello::wgpu::CommandEncoderDescriptor {
                            label: Some("blit encoder"),
                        },
                    );

                    state.texture_blitter.copy(
                        device,
                        &mut blit_encoder,
                        &render_texture_view,
                        &surface_view,
                    );

                    queue.submit(std::iter::once(blit_encoder.finish()));
                }

                // Update egui textures
                for (id, image_delta) in &egui_output.textures_delta.set {
                    state.egui_renderer.update_texture(device, queue, *id, image_delta);
                }

                // Render egui on top
                let screen_descriptor = egui_wgpu::ScreenDescriptor {
                    size_in_pixels: [width, height],
                    pixels_per_point: egui_output.pixels_per_point,
                };

                {
                    let mut egui_encoder = device.create_command_encoder(
                        &vello::wgpu::CommandEncoderDescriptor {
                            label: Some("egui encoder"),
                        },
                    );

                    state.egui_renderer.update_buffers(
                        device,
                        queue,
                        &mut egui_encoder,
                        &egui_primitives,
                        &screen_descriptor,
                    );

                    let render_pass = egui_encoder.begin_render_pass(&vello::wgpu::RenderPassDescriptor {
                        label: Some("egui render pass"),
                        color_attachments: &[Some(vello::wgpu::RenderPassColorAttachment {
                            view: &surface_view,
                            resolve_target: None,
                            ops: vello::wgpu::Operations {
                                load: vello::wgpu::LoadOp::Load, // Keep Vello content
                                store: vello::wgpu::StoreOp::Store,
                            },
                            depth_slice: None,
                        })],
                        depth_stencil_attachment: None,
                        timestamp_writes: None,
                        occlusion_query_set: None,
                    });

                    // egui-wgpu needs a 'static render pass
                    let mut render_pass = render_pass.forget_lifetime();
                    state.egui_renderer.render(&mut render_pass, &egui_primitives, &screen_descriptor);
                    drop(render_pass);

                    queue.submit(std::iter::once(egui_encoder.finish()));
                }

                // Free egui textures
                for id in &egui_output.textures_delta.free {
                    state.egui_renderer.free_texture(id);
                }
                surface_texture.present();
                state.window.request_redraw();
            }

            _ => {}
        }
    }
}
