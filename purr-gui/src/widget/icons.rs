use druid::{kurbo::BezPath, widget::prelude::*, Affine, Color, KeyOrValue};

use crate::ui::theme;

pub static BACK: SvgIcon = SvgIcon {
    svg_path: "M8.6 0 L10 1.4 L2.9 9 L10 16.6 L8.6 18 L0.2 9 Z",
    svg_size: Size::new(10.0, 18.0),
    op: PaintOp::Fill,
};

// Portrait line art, one drawing per `Artwork` variant.

pub static CAT_TABBY: SvgIcon = SvgIcon {
    svg_path: "M16 24 C16 10 20 8 26 14 C31 11 37 11 42 14 C48 8 52 10 52 24 C56 31 56 41 51 48 C44 56 24 56 17 48 C12 41 12 31 16 24 Z M30 13 L31 19 M34 12 L34 19 M38 13 L37 19 M24 31 C24 29 28 29 28 31 C28 33 24 33 24 31 Z M40 31 C40 29 44 29 44 31 C44 33 40 33 40 31 Z M32 38 L34 40 L36 38 M34 40 L34 43 M34 43 C31 45 29 44 28 43 M34 43 C37 45 39 44 40 43 M10 34 L22 36 M10 40 L22 40 M58 34 L46 36 M58 40 L46 40",
    svg_size: Size::new(64.0, 64.0),
    op: PaintOp::Stroke { width: 2.0 },
};
pub static CAT_TUXEDO: SvgIcon = SvgIcon {
    svg_path: "M16 25 C15 11 20 9 26 15 C31 12 37 12 42 15 C48 9 53 11 52 25 C56 32 56 42 51 49 C44 56 24 56 17 49 C12 42 12 32 16 25 Z M28 47 C30 51 38 51 40 47 C38 49 30 49 28 47 Z M26 53 L32 56 L26 59 Z M42 53 L36 56 L42 59 Z M25 32 C25 30 29 30 29 32 C29 34 25 34 25 32 Z M39 32 C39 30 43 30 43 32 C43 34 39 34 39 32 Z M32 39 L34 41 L36 39 M34 41 L34 44 M11 35 L22 37 M11 41 L22 41 M57 35 L46 37 M57 41 L46 41",
    svg_size: Size::new(64.0, 64.0),
    op: PaintOp::Stroke { width: 2.0 },
};
pub static CAT_CALICO: SvgIcon = SvgIcon {
    svg_path: "M16 24 C16 10 20 8 26 14 C31 11 37 11 42 14 C48 8 52 10 52 24 C56 31 56 41 51 48 C44 56 24 56 17 48 C12 41 12 31 16 24 Z M24 16 C28 12 32 14 31 19 C29 23 23 21 24 16 Z M44 38 C48 36 50 40 47 43 C44 45 42 41 44 38 Z M24 31 C24 29 28 29 28 31 C28 33 24 33 24 31 Z M40 31 C40 29 44 29 44 31 C44 33 40 33 40 31 Z M32 38 L34 40 L36 38 M34 40 L34 44 M10 34 L22 36 M10 40 L22 40 M58 34 L46 36 M58 40 L46 40",
    svg_size: Size::new(64.0, 64.0),
    op: PaintOp::Stroke { width: 2.0 },
};
pub static CAT_SHORTHAIR: SvgIcon = SvgIcon {
    svg_path: "M17 25 C17 11 21 9 27 15 C32 12 36 12 41 15 C47 9 51 11 51 25 C55 32 55 41 50 48 C43 55 25 55 18 48 C13 41 13 32 17 25 Z M17 43 L11 45 M17 47 L12 50 M47 43 L53 45 M47 47 L52 50 M25 31 C25 29 29 29 29 31 C29 33 25 33 25 31 Z M39 31 C39 29 43 29 43 31 C43 33 39 33 39 31 Z M32 38 L34 40 L36 38 M34 40 L34 43 M34 43 C31 45 29 44 28 43 M34 43 C37 45 39 44 40 43",
    svg_size: Size::new(64.0, 64.0),
    op: PaintOp::Stroke { width: 2.0 },
};
pub static CAT_GINGER: SvgIcon = SvgIcon {
    svg_path: "M16 24 C16 10 20 8 26 14 C31 11 37 11 42 14 C48 8 52 10 52 24 C56 31 56 41 51 48 C44 55 24 55 17 48 C12 41 12 31 16 24 Z M24 31 C24 29 28 29 28 31 C28 33 24 33 24 31 Z M40 31 C40 29 44 29 44 31 C44 33 40 33 40 31 Z M32 38 L34 40 L36 38 M34 40 L34 43 M24 51 C29 55 39 55 44 51 M34 54 L34 57 M32 59 C32 57 36 57 36 59 C36 61 32 61 32 59 Z M10 34 L22 36 M58 34 L46 36",
    svg_size: Size::new(64.0, 64.0),
    op: PaintOp::Stroke { width: 2.0 },
};
pub static CAT_SIAMESE: SvgIcon = SvgIcon {
    svg_path: "M15 27 C12 8 21 6 27 14 C31 11 37 11 41 14 C47 6 56 8 53 27 C57 34 56 43 50 49 C43 56 25 56 18 49 C12 43 11 34 15 27 Z M26 36 C28 43 40 43 42 36 C40 39 28 39 26 36 Z M23 30 L29 32 M45 30 L39 32 M32 39 L34 41 L36 39 M34 41 L34 44 M10 35 L22 37 M58 35 L46 37",
    svg_size: Size::new(64.0, 64.0),
    op: PaintOp::Stroke { width: 2.0 },
};

#[derive(Copy, Clone)]
pub enum PaintOp {
    Fill,
    Stroke { width: f64 },
}

pub struct SvgIcon {
    svg_path: &'static str,
    svg_size: Size,
    op: PaintOp,
}

impl SvgIcon {
    pub fn scale(&self, to_size: impl Into<Size>) -> Icon {
        let to_size = to_size.into();
        let path = BezPath::from_svg(self.svg_path).expect("Failed to parse SVG");
        let scale = Affine::scale_non_uniform(
            to_size.width / self.svg_size.width,
            to_size.height / self.svg_size.height,
        );
        Icon {
            op: self.op,
            path,
            size: to_size,
            scale,
            color: theme::ICON_COLOR.into(),
        }
    }
}

pub struct Icon {
    op: PaintOp,
    path: BezPath,
    size: Size,
    scale: Affine,
    color: KeyOrValue<Color>,
}

impl Icon {
    pub fn with_color(mut self, color: impl Into<KeyOrValue<Color>>) -> Self {
        self.color = color.into();
        self
    }
}

impl<T> Widget<T> for Icon {
    fn event(&mut self, _ctx: &mut EventCtx, _event: &Event, _data: &mut T, _env: &Env) {}

    fn lifecycle(&mut self, _ctx: &mut LifeCycleCtx, _event: &LifeCycle, _data: &T, _env: &Env) {}

    fn update(&mut self, _ctx: &mut UpdateCtx, _old_data: &T, _data: &T, _env: &Env) {}

    fn layout(&mut self, _ctx: &mut LayoutCtx, bc: &BoxConstraints, _data: &T, _env: &Env) -> Size {
        bc.constrain(self.size)
    }

    fn paint(&mut self, ctx: &mut PaintCtx, _data: &T, env: &Env) {
        let color = self.color.resolve(env);
        ctx.with_save(|ctx| {
            ctx.transform(self.scale);
            match self.op {
                PaintOp::Fill => ctx.fill(&self.path, &color),
                PaintOp::Stroke { width } => ctx.stroke(&self.path, &color, width),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_bundled_paths_parse() {
        for icon in [
            &BACK,
            &CAT_TABBY,
            &CAT_TUXEDO,
            &CAT_CALICO,
            &CAT_SHORTHAIR,
            &CAT_GINGER,
            &CAT_SIAMESE,
        ] {
            assert!(BezPath::from_svg(icon.svg_path).is_ok());
        }
    }
}
