//! The container that owns the DocumentView and lays it out.

use crate::config::AppConfig;
use docview_core::{
    Argb, DisplayMetrics, DocumentView, DocumentViewAttrs, Insets, LayoutDimension,
    MeasureSpec, SavedState, StateResult, TextMeasurer, ViewSize,
};

/// A frame-style parent holding a single DocumentView.
///
/// Owns the layout parameters of the view (requested width and height,
/// padding, background) and runs measurement when something changed.
pub struct DemoHost {
    view: DocumentView,
    attrs: DocumentViewAttrs,
    metrics: DisplayMetrics,
    width: LayoutDimension,
    height: LayoutDimension,
    padding: Insets,
    background: Option<Argb>,
    parent: Option<(MeasureSpec, MeasureSpec)>,
    layout_dirty: bool,
}

impl DemoHost {
    pub fn new(config: &AppConfig, metrics: DisplayMetrics) -> Self {
        let mut host = Self {
            view: DocumentView::from_attrs(&config.attrs, &metrics),
            attrs: config.attrs.clone(),
            metrics,
            width: config.view_width,
            height: config.view_height,
            padding: config.padding,
            background: config.view_background,
            parent: None,
            layout_dirty: true,
        };
        host.apply_host_properties();
        host
    }

    fn apply_host_properties(&mut self) {
        self.view.set_padding(self.padding);
        self.view.set_background(self.background);
    }

    pub fn view(&self) -> &DocumentView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut DocumentView {
        &mut self.view
    }

    pub fn metrics(&self) -> DisplayMetrics {
        self.metrics
    }

    /// Size from the view's last layout pass.
    pub fn size(&self) -> ViewSize {
        self.view.measured_size()
    }

    pub fn width(&self) -> LayoutDimension {
        self.width
    }

    pub fn set_width(&mut self, width: LayoutDimension) {
        log::trace!("view width -> {}", width);
        self.width = width;
        self.layout_dirty = true;
    }

    pub fn height(&self) -> LayoutDimension {
        self.height
    }

    pub fn set_height(&mut self, height: LayoutDimension) {
        log::trace!("view height -> {}", height);
        self.height = height;
        self.layout_dirty = true;
    }

    pub fn background(&self) -> Option<Argb> {
        self.background
    }

    pub fn set_background(&mut self, color: Option<Argb>) {
        self.background = color;
        self.view.set_background(color);
    }

    /// Measure the view if its layout parameters, its properties or the
    /// parent constraints changed. Returns true when a repaint is needed.
    pub fn update(
        &mut self,
        parent_width: MeasureSpec,
        parent_height: MeasureSpec,
        measurer: &mut dyn TextMeasurer,
    ) -> bool {
        let parent = (parent_width, parent_height);
        let pending = self.view.take_invalidation();

        if pending.needs_layout() || self.layout_dirty || self.parent != Some(parent) {
            let width_spec = self.width.child_spec(parent_width);
            let height_spec = self.height.child_spec(parent_height);
            self.view.measure(width_spec, height_spec, measurer);
            self.view.take_invalidation();
            self.parent = Some(parent);
            self.layout_dirty = false;
            return true;
        }
        pending.needs_paint()
    }

    /// Change display density. Views are rebuilt the way a configuration
    /// change rebuilds them.
    pub fn set_metrics(&mut self, metrics: DisplayMetrics) -> StateResult<()> {
        self.metrics = metrics;
        self.recreate()
    }

    /// Simulate a configuration change: save the view's state, drop the
    /// view, build a fresh one from the configured attributes and restore.
    pub fn recreate(&mut self) -> StateResult<()> {
        let bytes = self.view.save_state().encode();
        log::info!("Recreating DocumentView ({} bytes of saved state)", bytes.len());

        self.view = DocumentView::from_attrs(&self.attrs, &self.metrics);
        self.apply_host_properties();
        self.layout_dirty = true;

        let state = SavedState::decode(&bytes)?;
        self.view.restore_state(&state);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docview_core::{DisplayList, Invalidation, MonospaceMeasurer};

    fn config() -> AppConfig {
        AppConfig {
            padding: Insets::ZERO,
            view_background: None,
            ..AppConfig::default()
        }
    }

    fn layout(host: &mut DemoHost, width: u32, height: u32) -> ViewSize {
        host.update(
            MeasureSpec::Exactly(width),
            MeasureSpec::Exactly(height),
            &mut MonospaceMeasurer::new(),
        );
        host.size()
    }

    #[test]
    fn test_initial_layout_measures() {
        let mut host = DemoHost::new(&config(), DisplayMetrics::default());
        let repaint = host.update(
            MeasureSpec::Exactly(800),
            MeasureSpec::Exactly(600),
            &mut MonospaceMeasurer::new(),
        );
        assert!(repaint);
        assert!(host.size().width > 0);
        assert_eq!(host.view().invalidation(), Invalidation::Clean);
    }

    #[test]
    fn test_width_modes() {
        let mut host = DemoHost::new(&config(), DisplayMetrics::default());

        host.set_width(LayoutDimension::Match);
        assert_eq!(layout(&mut host, 500, 400).width, 500);

        host.set_width(LayoutDimension::Exact(240));
        assert_eq!(layout(&mut host, 500, 400).width, 240);

        host.set_width(LayoutDimension::Wrap);
        let wrapped = layout(&mut host, 500, 400).width;
        assert!(wrapped < 500);
        assert!(wrapped >= 20);
    }

    #[test]
    fn test_clean_frame_skips_layout() {
        let mut host = DemoHost::new(&config(), DisplayMetrics::default());
        layout(&mut host, 500, 400);
        let repaint = host.update(
            MeasureSpec::Exactly(500),
            MeasureSpec::Exactly(400),
            &mut MonospaceMeasurer::new(),
        );
        assert!(!repaint);

        host.view_mut().set_border_color(Argb::RED);
        let repaint = host.update(
            MeasureSpec::Exactly(500),
            MeasureSpec::Exactly(400),
            &mut MonospaceMeasurer::new(),
        );
        assert!(repaint);
    }

    #[test]
    fn test_resize_relayouts() {
        let mut host = DemoHost::new(&config(), DisplayMetrics::default());
        host.set_width(LayoutDimension::Match);
        layout(&mut host, 500, 400);
        assert_eq!(layout(&mut host, 300, 400).width, 300);
    }

    #[test]
    fn test_layout_size_is_paintable() {
        let mut host = DemoHost::new(&config(), DisplayMetrics::default());
        let size = layout(&mut host, 500, 400);
        let mut list = DisplayList::new();
        host.view_mut().render(&mut list, size);
        assert!(!list.commands().is_empty());
        assert!(list.texts().count() > 0);
    }

    #[test]
    fn test_recreate_keeps_runtime_changes() {
        let mut host = DemoHost::new(&config(), DisplayMetrics::default());
        host.view_mut().set_title(Some("Changed"));
        host.view_mut().set_decor_color(Argb::RED);
        host.view_mut().set_border_width(6.0);
        host.set_background(Some(Argb::WHITE));
        let before = host.view().save_state();

        host.recreate().unwrap();

        assert_eq!(host.view().save_state(), before);
        assert_eq!(host.view().title(), "Changed");
        assert_eq!(host.view().background(), Some(Argb::WHITE));
        assert!(host.view().invalidation().needs_layout());
    }

    #[test]
    fn test_recreated_view_needs_measuring() {
        let mut host = DemoHost::new(&config(), DisplayMetrics::default());
        let size = layout(&mut host, 500, 400);
        host.recreate().unwrap();
        assert_eq!(host.size(), ViewSize::default());
        assert_eq!(layout(&mut host, 500, 400), size);
    }

    #[test]
    fn test_density_change_keeps_saved_sizes() {
        let mut host = DemoHost::new(&config(), DisplayMetrics::default());
        assert_eq!(host.view().decor_size(), 20.0);
        host.set_metrics(DisplayMetrics::new(2.0)).unwrap();
        // Restored state wins over the re-resolved attribute.
        assert_eq!(host.view().decor_size(), 20.0);
        assert_eq!(host.metrics().density, 2.0);
    }
}
