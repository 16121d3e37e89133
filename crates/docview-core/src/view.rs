//! The DocumentView widget.

use crate::attrs::DocumentViewAttrs;
use crate::color::Argb;
use crate::draw::DrawTarget;
use crate::invalidation::Invalidation;
use crate::measure::{Insets, MeasureSpec, ViewSize};
use crate::state::SavedState;
use crate::style::{non_negative, TextField, VisualStyle};
use crate::text::{TextBlock, TextMeasurer};
use crate::units::DisplayMetrics;
use kurbo::{BezPath, Cap, Join, Point, Rect, Shape, Stroke};

/// Paths reused across render passes. Cleared at the start of each pass.
#[derive(Debug, Default)]
struct PathScratch {
    mask: BezPath,
    decor: BezPath,
    border: BezPath,
}

impl PathScratch {
    fn reset(&mut self) {
        self.mask.truncate(0);
        self.decor.truncate(0);
        self.border.truncate(0);
    }
}

/// A bordered panel with a triangular bottom-right decoration and optional
/// centered title and subtitle.
///
/// Property setters never measure or draw; they record an [`Invalidation`]
/// that the host collects with [`DocumentView::take_invalidation`].
#[derive(Debug)]
pub struct DocumentView {
    style: VisualStyle,
    title: TextField,
    subtitle: TextField,
    padding: Insets,
    background: Option<Argb>,
    title_layout: TextBlock,
    subtitle_layout: TextBlock,
    measured: ViewSize,
    scratch: PathScratch,
    pending: Invalidation,
}

impl Default for DocumentView {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentView {
    /// Create a view with default attributes at density 1.
    pub fn new() -> Self {
        Self::from_attrs(&DocumentViewAttrs::default(), &DisplayMetrics::default())
    }

    /// Create a view from construction-time style attributes.
    pub fn from_attrs(attrs: &DocumentViewAttrs, metrics: &DisplayMetrics) -> Self {
        let style = VisualStyle {
            border_color: attrs.border_color,
            border_width: non_negative(attrs.border_width.to_px(metrics)),
            decor_color: attrs.decor_color,
            decor_size: non_negative(attrs.decor_size.to_px(metrics)),
        };
        let title = TextField::new(
            attrs.title_text.clone().unwrap_or_default(),
            attrs.title_color,
            attrs.title_text_size.to_px(metrics),
        );
        let subtitle = TextField::new(
            attrs.subtitle_text.clone().unwrap_or_default(),
            attrs.subtitle_color,
            attrs.subtitle_text_size.to_px(metrics),
        );

        Self {
            style,
            title,
            subtitle,
            padding: Insets::ZERO,
            background: None,
            title_layout: TextBlock::empty(),
            subtitle_layout: TextBlock::empty(),
            measured: ViewSize::default(),
            scratch: PathScratch::default(),
            pending: Invalidation::Relayout,
        }
    }

    // --- invalidation ---

    fn invalidate(&mut self, level: Invalidation) {
        self.pending = self.pending.merge(level);
    }

    /// The pending invalidation, without clearing it.
    pub fn invalidation(&self) -> Invalidation {
        self.pending
    }

    /// Take the pending invalidation, leaving the view clean.
    pub fn take_invalidation(&mut self) -> Invalidation {
        std::mem::take(&mut self.pending)
    }

    // --- measurement ---

    /// Padding plus room reserved for the corner decoration.
    pub fn effective_insets(&self) -> Insets {
        self.padding.reserve_corner(self.style.decor_size)
    }

    /// Compute the view size for the given constraints and rebuild the
    /// wrapped title and subtitle blocks.
    pub fn measure(
        &mut self,
        width_spec: MeasureSpec,
        height_spec: MeasureSpec,
        measurer: &mut dyn TextMeasurer,
    ) -> ViewSize {
        let insets = self.effective_insets();

        let desired_title = desired_width(&self.title, measurer);
        let desired_subtitle = desired_width(&self.subtitle, measurer);

        let desired_width = desired_title
            .max(desired_subtitle)
            .saturating_add(insets.horizontal());
        let width = width_spec.resolve(desired_width);

        let content_width = width.saturating_sub(insets.horizontal());
        self.title_layout = wrap_field(&self.title, content_width.min(desired_title), measurer);
        self.subtitle_layout =
            wrap_field(&self.subtitle, content_width.min(desired_subtitle), measurer);

        let mut desired_height = insets.vertical();
        if !self.title.is_empty() {
            desired_height = desired_height.saturating_add(self.title_layout.height());
        }
        if !self.subtitle.is_empty() {
            desired_height = desired_height.saturating_add(self.subtitle_layout.height());
        }
        let height = height_spec.resolve(desired_height);

        self.measured = ViewSize::new(width, height);
        if self.pending.needs_layout() {
            self.pending = Invalidation::Repaint;
        }

        log::debug!(
            "Measured DocumentView {}x{} (title {}x{}, subtitle {}x{})",
            width,
            height,
            self.title_layout.width(),
            self.title_layout.height(),
            self.subtitle_layout.width(),
            self.subtitle_layout.height(),
        );
        self.measured
    }

    /// Size produced by the last [`DocumentView::measure`].
    pub fn measured_size(&self) -> ViewSize {
        self.measured
    }

    pub fn title_layout(&self) -> &TextBlock {
        &self.title_layout
    }

    pub fn subtitle_layout(&self) -> &TextBlock {
        &self.subtitle_layout
    }

    // --- rendering ---

    /// Draw the view into a `size` rectangle.
    ///
    /// Uses the text blocks from the last measurement as they are.
    pub fn render(&mut self, target: &mut dyn DrawTarget, size: ViewSize) {
        let width = f64::from(size.width);
        let height = f64::from(size.height);
        let decor = f64::from(self.style.decor_size);
        let half_stroke = f64::from(self.style.border_width) / 2.0;

        self.scratch.reset();
        target.push_layer(Rect::new(0.0, 0.0, width, height));

        if let Some(background) = self.background {
            target.fill_path(
                &Rect::new(0.0, 0.0, width, height).to_path(0.1),
                background.to_color(),
            );
        }

        // The erase must come before the decoration fill or it would remove it.
        let mask = &mut self.scratch.mask;
        mask.move_to((width, height));
        mask.line_to((width - decor, height));
        mask.line_to((width, height - decor));
        mask.close_path();
        target.clear_path(mask);

        let triangle = &mut self.scratch.decor;
        triangle.move_to((width - decor, height - decor));
        triangle.line_to((width, height - decor));
        triangle.line_to((width - decor, height));
        triangle.close_path();
        target.fill_path(triangle, self.style.decor_color.to_color());

        let border = &mut self.scratch.border;
        border.move_to((width - decor, height - half_stroke));
        border.line_to((half_stroke, height - half_stroke));
        border.line_to((half_stroke, half_stroke));
        border.line_to((width - half_stroke, half_stroke));
        border.line_to((width - half_stroke, height - decor));
        border.line_to((width - decor, height - half_stroke));
        border.line_to((width - decor, height - decor));
        border.line_to((width - half_stroke, height - decor));
        let stroke = Stroke::new(f64::from(self.style.border_width))
            .with_join(Join::Miter)
            .with_caps(Cap::Butt);
        target.stroke_path(border, &stroke, self.style.border_color.to_color());

        self.render_text(target, size);
        target.pop_layer();
    }

    fn render_text(&self, target: &mut dyn DrawTarget, size: ViewSize) {
        let insets = self.effective_insets();
        let available_width = i64::from(size.width) - i64::from(insets.horizontal());
        let available_height = i64::from(size.height) - i64::from(insets.vertical());

        let blocks = [
            (&self.title_layout, self.title.color),
            (&self.subtitle_layout, self.subtitle.color),
        ];
        let mut content_width = 0i64;
        let mut content_height = 0i64;
        for (block, _) in blocks.iter().filter(|(block, _)| !block.is_empty()) {
            content_width = content_width.max(i64::from(block.width()));
            content_height += i64::from(block.height());
        }

        if content_height == 0 {
            return;
        }
        if content_height > available_height {
            log::trace!(
                "Skipping text: needs {}px, {}px available",
                content_height,
                available_height
            );
            return;
        }

        let x = i64::from(insets.left) + (available_width - content_width) / 2;
        let mut y = i64::from(insets.top) + (available_height - content_height) / 2;
        for (block, color) in blocks.into_iter().filter(|(block, _)| !block.is_empty()) {
            target.draw_text(block, Point::new(x as f64, y as f64), color.to_color());
            y += i64::from(block.height());
        }
    }

    // --- properties ---

    pub fn border_color(&self) -> Argb {
        self.style.border_color
    }

    pub fn set_border_color(&mut self, color: Argb) {
        log::trace!("border color -> {}", color);
        self.style.border_color = color;
        self.invalidate(Invalidation::Repaint);
    }

    pub fn border_width(&self) -> f32 {
        self.style.border_width
    }

    /// Set the border stroke width in device pixels. Negative values clamp to 0.
    pub fn set_border_width(&mut self, width: f32) {
        log::trace!("border width -> {}", width);
        self.style.border_width = non_negative(width);
        self.invalidate(Invalidation::Repaint);
    }

    pub fn decor_color(&self) -> Argb {
        self.style.decor_color
    }

    pub fn set_decor_color(&mut self, color: Argb) {
        log::trace!("decor color -> {}", color);
        self.style.decor_color = color;
        self.invalidate(Invalidation::Repaint);
    }

    pub fn decor_size(&self) -> f32 {
        self.style.decor_size
    }

    /// Set the corner triangle's side length. Only repaints; the reserved
    /// inset follows on the next measurement.
    pub fn set_decor_size(&mut self, size: f32) {
        log::trace!("decor size -> {}", size);
        self.style.decor_size = non_negative(size);
        self.invalidate(Invalidation::Repaint);
    }

    pub fn title_color(&self) -> Argb {
        self.title.color
    }

    pub fn set_title_color(&mut self, color: Argb) {
        log::trace!("title color -> {}", color);
        self.title.color = color;
        self.invalidate(Invalidation::Repaint);
    }

    pub fn title_size(&self) -> f32 {
        self.title.size
    }

    pub fn set_title_size(&mut self, size: f32) {
        log::trace!("title size -> {}", size);
        self.title.size = non_negative(size);
        self.invalidate(Invalidation::Relayout);
    }

    pub fn title(&self) -> &str {
        &self.title.text
    }

    /// Set the title. `None` clears it.
    pub fn set_title<S: Into<String>>(&mut self, title: Option<S>) {
        self.title.text = title.map(Into::into).unwrap_or_default();
        log::trace!("title -> {:?}", self.title.text);
        self.invalidate(Invalidation::Relayout);
    }

    pub fn subtitle_color(&self) -> Argb {
        self.subtitle.color
    }

    pub fn set_subtitle_color(&mut self, color: Argb) {
        log::trace!("subtitle color -> {}", color);
        self.subtitle.color = color;
        self.invalidate(Invalidation::Repaint);
    }

    pub fn subtitle_size(&self) -> f32 {
        self.subtitle.size
    }

    pub fn set_subtitle_size(&mut self, size: f32) {
        log::trace!("subtitle size -> {}", size);
        self.subtitle.size = non_negative(size);
        self.invalidate(Invalidation::Relayout);
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle.text
    }

    /// Set the subtitle. `None` clears it.
    pub fn set_subtitle<S: Into<String>>(&mut self, subtitle: Option<S>) {
        self.subtitle.text = subtitle.map(Into::into).unwrap_or_default();
        log::trace!("subtitle -> {:?}", self.subtitle.text);
        self.invalidate(Invalidation::Relayout);
    }

    pub fn background(&self) -> Option<Argb> {
        self.background
    }

    /// Fill drawn under the border; the corner erase removes it too.
    pub fn set_background(&mut self, color: Option<Argb>) {
        self.background = color;
        self.invalidate(Invalidation::Repaint);
    }

    pub fn padding(&self) -> Insets {
        self.padding
    }

    pub fn set_padding(&mut self, padding: Insets) {
        self.padding = padding;
        self.invalidate(Invalidation::Relayout);
    }

    // --- saved state ---

    /// Snapshot the persisted properties.
    pub fn save_state(&self) -> SavedState {
        SavedState {
            border_color: self.style.border_color,
            border_width: self.style.border_width,
            decor_color: self.style.decor_color,
            decor_size: self.style.decor_size,
            title_color: self.title.color,
            title_size: self.title.size,
            title: self.title.text.clone(),
            subtitle_color: self.subtitle.color,
            subtitle_size: self.subtitle.size,
            subtitle: self.subtitle.text.clone(),
        }
    }

    /// Restore properties from a snapshot and request a relayout.
    pub fn restore_state(&mut self, state: &SavedState) {
        self.style = VisualStyle {
            border_color: state.border_color,
            border_width: non_negative(state.border_width),
            decor_color: state.decor_color,
            decor_size: non_negative(state.decor_size),
        };
        self.title = TextField::new(state.title.clone(), state.title_color, state.title_size);
        self.subtitle = TextField::new(
            state.subtitle.clone(),
            state.subtitle_color,
            state.subtitle_size,
        );
        self.invalidate(Invalidation::Relayout);
    }
}

fn desired_width(field: &TextField, measurer: &mut dyn TextMeasurer) -> u32 {
    if field.is_empty() {
        return 0;
    }
    measurer.line_width(&field.text, field.size).max(0.0).ceil() as u32
}

fn wrap_field(field: &TextField, width: u32, measurer: &mut dyn TextMeasurer) -> TextBlock {
    if field.is_empty() || width == 0 {
        return TextBlock::empty();
    }
    measurer.wrap(&field.text, field.size, width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_list::{DisplayList, DrawCommand};
    use crate::text::MonospaceMeasurer;
    use kurbo::PathEl;

    /// 10px text: 6px per char, 12px per line.
    fn view_with(title: &str, subtitle: &str) -> DocumentView {
        let mut view = DocumentView::new();
        view.set_title(Some(title));
        view.set_subtitle(Some(subtitle));
        view.set_title_size(10.0);
        view.set_subtitle_size(10.0);
        view
    }

    fn measure(view: &mut DocumentView, w: MeasureSpec, h: MeasureSpec) -> ViewSize {
        view.measure(w, h, &mut MonospaceMeasurer::new())
    }

    fn points(path: &BezPath) -> Vec<(f64, f64)> {
        path.elements()
            .iter()
            .filter_map(|el| match el {
                PathEl::MoveTo(p) | PathEl::LineTo(p) => Some((p.x, p.y)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_defaults() {
        let view = DocumentView::new();
        assert_eq!(view.border_color(), Argb::BLACK);
        assert_eq!(view.border_width(), 1.0);
        assert_eq!(view.decor_color(), Argb(0xFF88_8888));
        assert_eq!(view.decor_size(), 20.0);
        assert_eq!(view.title(), "");
        assert_eq!(view.subtitle(), "");
        assert_eq!(view.title_size(), 16.0);
        assert_eq!(view.subtitle_color(), Argb::GRAY);
    }

    #[test]
    fn test_wrap_content_size() {
        let mut view = view_with("hello", "hi");
        let size = measure(&mut view, MeasureSpec::Unspecified, MeasureSpec::Unspecified);
        // 30px of text + 20px reserved for the decoration
        assert_eq!(size.width, 50);
        // two 12px lines + 20px reserved at the bottom
        assert_eq!(size.height, 44);
        assert_eq!(view.title_layout().width(), 30);
        assert_eq!(view.subtitle_layout().width(), 12);
    }

    #[test]
    fn test_exact_constraints_win() {
        let mut view = view_with("hello", "hi");
        let size = measure(&mut view, MeasureSpec::Exactly(240), MeasureSpec::Exactly(7));
        assert_eq!(size, ViewSize::new(240, 7));
        // A wide view never stretches the shorter text.
        assert_eq!(view.title_layout().width(), 30);
        assert_eq!(view.subtitle_layout().width(), 12);
    }

    #[test]
    fn test_at_most_clamps_and_wraps() {
        let mut view = view_with("aaaa bbbb cccc", "");
        let size = measure(&mut view, MeasureSpec::AtMost(50), MeasureSpec::AtMost(1000));
        assert_eq!(size.width, 50);
        assert_eq!(view.title_layout().width(), 30);
        assert_eq!(view.title_layout().lines().len(), 3);
        assert_eq!(size.height, 36 + 20);
    }

    #[test]
    fn test_never_exceeds_bounds() {
        let specs = [
            MeasureSpec::Exactly(0),
            MeasureSpec::Exactly(35),
            MeasureSpec::AtMost(0),
            MeasureSpec::AtMost(25),
            MeasureSpec::AtMost(400),
        ];
        for &w in &specs {
            for &h in &specs {
                let mut view = view_with("the quick brown fox", "jumps over");
                let size = measure(&mut view, w, h);
                let (wb, hb) = (w.bound().unwrap(), h.bound().unwrap());
                assert!(size.width <= wb && size.height <= hb, "{w:?} {h:?} -> {size:?}");
                if let MeasureSpec::Exactly(n) = w {
                    assert_eq!(size.width, n);
                }
                if let MeasureSpec::Exactly(n) = h {
                    assert_eq!(size.height, n);
                }
            }
        }
    }

    #[test]
    fn test_empty_texts_size_to_insets() {
        let mut view = view_with("", "");
        view.set_padding(Insets::new(4, 6, 0, 0));
        let size = measure(&mut view, MeasureSpec::Unspecified, MeasureSpec::Unspecified);
        let insets = view.effective_insets();
        assert_eq!(size.width - insets.horizontal(), 0);
        assert_eq!(size.height - insets.vertical(), 0);
        assert_eq!(size, ViewSize::new(24, 26));
    }

    #[test]
    fn test_effective_inset_reserves_decoration() {
        let mut view = DocumentView::new();
        view.set_padding(Insets::ZERO);
        view.set_decor_size(20.0);
        let insets = view.effective_insets();
        assert_eq!(insets.right, 20);
        assert_eq!(insets.bottom, 20);
        assert_eq!(insets.left, 0);
    }

    #[test]
    fn test_no_content_space_means_empty_blocks() {
        let mut view = view_with("hello", "world");
        view.set_padding(Insets::new(30, 0, 30, 0));
        measure(&mut view, MeasureSpec::Exactly(40), MeasureSpec::Exactly(100));
        assert!(view.title_layout().is_empty());
        assert!(view.subtitle_layout().is_empty());
        assert_eq!(view.title_layout().height(), 0);

        let mut list = DisplayList::new();
        view.render(&mut list, ViewSize::new(40, 100));
        assert_eq!(list.texts().count(), 0);
    }

    #[test]
    fn test_invalidation_levels() {
        let mut view = view_with("hello", "");
        measure(&mut view, MeasureSpec::Unspecified, MeasureSpec::Unspecified);
        view.take_invalidation();

        view.set_border_color(Argb::RED);
        view.set_border_width(4.0);
        view.set_decor_color(Argb::WHITE);
        view.set_decor_size(10.0);
        view.set_title_color(Argb::RED);
        view.set_subtitle_color(Argb::RED);
        assert_eq!(view.take_invalidation(), Invalidation::Repaint);

        view.set_title_size(20.0);
        assert_eq!(view.take_invalidation(), Invalidation::Relayout);
        view.set_subtitle(Some("x"));
        assert_eq!(view.take_invalidation(), Invalidation::Relayout);
        view.set_title::<String>(None);
        assert_eq!(view.take_invalidation(), Invalidation::Relayout);
        view.set_subtitle_size(1.0);
        assert_eq!(view.take_invalidation(), Invalidation::Relayout);
        assert_eq!(view.take_invalidation(), Invalidation::Clean);
    }

    #[test]
    fn test_measure_downgrades_relayout_to_repaint() {
        let mut view = view_with("hello", "");
        assert!(view.invalidation().needs_layout());
        measure(&mut view, MeasureSpec::Unspecified, MeasureSpec::Unspecified);
        assert_eq!(view.invalidation(), Invalidation::Repaint);
    }

    #[test]
    fn test_repaint_only_change_keeps_size() {
        let mut view = view_with("hello", "world");
        let before = measure(&mut view, MeasureSpec::Unspecified, MeasureSpec::Unspecified);
        view.set_border_color(Argb::RED);
        let after = measure(&mut view, MeasureSpec::Unspecified, MeasureSpec::Unspecified);
        assert_eq!(before, after);

        view.set_title_size(20.0);
        let grown = measure(&mut view, MeasureSpec::Unspecified, MeasureSpec::Unspecified);
        assert!(grown.width > before.width);
    }

    #[test]
    fn test_null_text_is_empty() {
        let mut view = view_with("hello", "world");
        view.set_title::<&str>(None);
        view.set_subtitle::<String>(None);
        assert_eq!(view.title(), "");
        assert_eq!(view.subtitle(), "");
    }

    #[test]
    fn test_negative_lengths_clamp() {
        let mut view = DocumentView::new();
        view.set_decor_size(-5.0);
        view.set_border_width(f32::NAN);
        assert_eq!(view.decor_size(), 0.0);
        assert_eq!(view.border_width(), 0.0);
    }

    #[test]
    fn test_render_order() {
        let mut view = view_with("hello", "");
        view.set_background(Some(Argb::WHITE));
        let size = measure(&mut view, MeasureSpec::Exactly(100), MeasureSpec::Exactly(80));
        let mut list = DisplayList::new();
        view.render(&mut list, size);

        let kinds: Vec<&str> = list
            .commands()
            .iter()
            .map(|command| match command {
                DrawCommand::PushLayer(_) => "push",
                DrawCommand::PopLayer => "pop",
                DrawCommand::Clear(_) => "clear",
                DrawCommand::Fill { .. } => "fill",
                DrawCommand::Stroke { .. } => "stroke",
                DrawCommand::Text { .. } => "text",
            })
            .collect();
        assert_eq!(kinds, vec!["push", "fill", "clear", "fill", "stroke", "text", "pop"]);
    }

    #[test]
    fn test_render_geometry() {
        let mut view = DocumentView::new();
        view.set_border_width(2.0);
        view.set_decor_size(20.0);
        view.set_border_color(Argb::RED);
        measure(&mut view, MeasureSpec::Exactly(100), MeasureSpec::Exactly(80));
        let mut list = DisplayList::new();
        view.render(&mut list, ViewSize::new(100, 80));

        let commands = list.commands();
        let DrawCommand::Clear(mask) = &commands[1] else {
            panic!("expected clear, got {:?}", commands[1]);
        };
        assert_eq!(points(mask), vec![(100.0, 80.0), (80.0, 80.0), (100.0, 60.0)]);

        let DrawCommand::Fill { path, color } = &commands[2] else {
            panic!("expected fill, got {:?}", commands[2]);
        };
        assert_eq!(points(path), vec![(80.0, 60.0), (100.0, 60.0), (80.0, 80.0)]);
        assert_eq!(Argb::from(*color), Argb::GRAY);

        let DrawCommand::Stroke { path, width, color } = &commands[3] else {
            panic!("expected stroke, got {:?}", commands[3]);
        };
        assert_eq!(*width, 2.0);
        assert_eq!(Argb::from(*color), Argb::RED);
        assert_eq!(
            points(path),
            vec![
                (80.0, 79.0),
                (1.0, 79.0),
                (1.0, 1.0),
                (99.0, 1.0),
                (99.0, 60.0),
                (80.0, 79.0),
                (80.0, 60.0),
                (99.0, 60.0),
            ]
        );
    }

    #[test]
    fn test_text_is_centered() {
        let mut view = view_with("hello", "hi");
        view.set_padding(Insets::uniform(10));
        let size = measure(&mut view, MeasureSpec::Exactly(131), MeasureSpec::Exactly(100));
        let mut list = DisplayList::new();
        view.render(&mut list, size);

        // content area: 131 - 10 - 20 = 101 wide, 100 - 10 - 20 = 70 tall
        // content: 30 wide, 24 tall
        let origins: Vec<Point> = list.texts().map(|(_, origin)| origin).collect();
        assert_eq!(origins, vec![Point::new(45.0, 33.0), Point::new(45.0, 45.0)]);
    }

    #[test]
    fn test_text_skipped_when_too_tall() {
        let mut view = view_with("hello", "world");
        measure(&mut view, MeasureSpec::Unspecified, MeasureSpec::Exactly(40));
        let mut list = DisplayList::new();
        view.render(&mut list, ViewSize::new(50, 40));
        assert_eq!(list.texts().count(), 0);
        // Border and decoration are still drawn.
        assert!(list.commands().iter().any(|c| matches!(c, DrawCommand::Stroke { .. })));
    }

    #[test]
    fn test_render_uses_previous_measurement() {
        let mut view = view_with("hello", "");
        let size = measure(&mut view, MeasureSpec::Unspecified, MeasureSpec::Unspecified);
        view.set_title(Some("a much longer title"));

        let mut list = DisplayList::new();
        view.render(&mut list, size);
        let (block, _) = list.texts().next().unwrap();
        assert_eq!(block.lines()[0].text, "hello");
    }

    #[test]
    fn test_save_restore_round_trip() {
        let mut view = view_with("Title", "Sub");
        view.set_border_color(Argb(0x7F01_0203));
        view.set_border_width(3.5);
        view.set_decor_color(Argb::RED);
        view.set_decor_size(12.25);
        view.set_title_color(Argb::WHITE);
        view.set_title_size(22.0);
        view.set_subtitle_color(Argb(0xFF00_00FF));
        view.set_subtitle_size(11.0);

        let bytes = view.save_state().encode();
        let mut restored = DocumentView::new();
        restored.take_invalidation();
        restored.restore_state(&SavedState::decode(&bytes).unwrap());

        assert_eq!(restored.save_state(), view.save_state());
        assert_eq!(restored.title(), "Title");
        assert_eq!(restored.subtitle_size(), 11.0);
        assert_eq!(restored.take_invalidation(), Invalidation::Relayout);
    }
}
