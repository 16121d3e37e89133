//! A [`DrawTarget`] that records commands instead of drawing them.

use crate::draw::DrawTarget;
use crate::text::TextBlock;
use kurbo::{BezPath, Point, Rect, Stroke};
use peniko::Color;

/// One recorded drawing operation.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    PushLayer(Rect),
    PopLayer,
    Clear(BezPath),
    Fill { path: BezPath, color: Color },
    Stroke { path: BezPath, width: f64, color: Color },
    Text { block: TextBlock, origin: Point, color: Color },
}

/// Records every draw call in order.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Recorded text commands as `(block, origin)` pairs.
    pub fn texts(&self) -> impl Iterator<Item = (&TextBlock, Point)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { block, origin, .. } => Some((block, *origin)),
            _ => None,
        })
    }
}

impl DrawTarget for DisplayList {
    fn push_layer(&mut self, bounds: Rect) {
        self.commands.push(DrawCommand::PushLayer(bounds));
    }

    fn pop_layer(&mut self) {
        self.commands.push(DrawCommand::PopLayer);
    }

    fn clear_path(&mut self, path: &BezPath) {
        self.commands.push(DrawCommand::Clear(path.clone()));
    }

    fn fill_path(&mut self, path: &BezPath, color: Color) {
        self.commands.push(DrawCommand::Fill {
            path: path.clone(),
            color,
        });
    }

    fn stroke_path(&mut self, path: &BezPath, stroke: &Stroke, color: Color) {
        self.commands.push(DrawCommand::Stroke {
            path: path.clone(),
            width: stroke.width,
            color,
        });
    }

    fn draw_text(&mut self, block: &TextBlock, origin: Point, color: Color) {
        self.commands.push(DrawCommand::Text {
            block: block.clone(),
            origin,
            color,
        });
    }
}
