pub mod canvas;
pub mod clock;
pub mod controller;
pub mod egui_canvas;
pub mod fonts;
pub mod gpu_context;
pub mod input_adapter;
pub mod layout;
pub mod renderer;
pub mod surface_renderer;
pub mod timer;
pub mod window;

pub use canvas::{Canvas, DrawOp, MeasuredRun, RecordingCanvas, Rect, TextBlock, TextRun};
pub use clock::{ClockSnapshot, FixedClock, LocalClock, Meridiem, TimeSource};
pub use controller::{Action, Button, KeyBindings};
pub use egui_canvas::EguiCanvas;
pub use fonts::{FontChoice, FontRegistry};
pub use gpu_context::GpuContext;
pub use input_adapter::WinitController;
pub use layout::{CanvasSize, ClockLayout, LayoutScale, PaintStyle, Stroke};
pub use renderer::{render, render_now};
pub use surface_renderer::SurfaceRenderer;
pub use timer::{RepeatingTimer, TICK_INTERVAL};
pub use window::{WindowContext, WindowDimensions};
