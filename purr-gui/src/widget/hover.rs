use druid::{widget::prelude::*, Color, KeyOrValue, Point, RoundedRectRadii, WidgetPod};

use crate::ui::theme;

/// Paints a highlight behind the child while the pointer is over it. Used
/// by everything clickable: the cat cards and the back button.
pub struct Hover<T> {
    inner: WidgetPod<T, Box<dyn Widget<T>>>,
    corner_radius: KeyOrValue<RoundedRectRadii>,
}

impl<T: Data> Hover<T> {
    pub fn new(inner: impl Widget<T> + 'static) -> Self {
        Self {
            inner: WidgetPod::new(inner).boxed(),
            corner_radius: 0.0.into(),
        }
    }

    pub fn rounded(mut self, radius: impl Into<KeyOrValue<RoundedRectRadii>>) -> Self {
        self.corner_radius = radius.into();
        self
    }
}

impl<T: Data> Widget<T> for Hover<T> {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut T, env: &Env) {
        self.inner.event(ctx, event, data, env);
    }

    fn lifecycle(&mut self, ctx: &mut LifeCycleCtx, event: &LifeCycle, data: &T, env: &Env) {
        if let LifeCycle::HotChanged(_) = event {
            ctx.request_paint();
        }
        self.inner.lifecycle(ctx, event, data, env);
    }

    fn update(&mut self, ctx: &mut UpdateCtx, _old_data: &T, data: &T, env: &Env) {
        self.inner.update(ctx, data, env);
    }

    fn layout(&mut self, ctx: &mut LayoutCtx, bc: &BoxConstraints, data: &T, env: &Env) -> Size {
        let size = self.inner.layout(ctx, bc, data, env);
        self.inner.set_origin(ctx, Point::ORIGIN);
        size
    }

    fn paint(&mut self, ctx: &mut PaintCtx, data: &T, env: &Env) {
        let background = if ctx.is_hot() {
            env.get(theme::HOVER_HOT_COLOR)
        } else {
            env.get(theme::HOVER_COLD_COLOR)
        };
        if has_alpha(&background) {
            let corner_radius = self.corner_radius.resolve(env);
            let rounded_rect = ctx.size().to_rect().to_rounded_rect(corner_radius);
            ctx.fill(rounded_rect, &background);
        }
        self.inner.paint(ctx, data, env);
    }
}

fn has_alpha(color: &Color) -> bool {
    let (_, _, _, alpha) = color.as_rgba();
    alpha > 0.0
}
