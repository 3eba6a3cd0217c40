mod click;
mod hover;
pub mod icons;

use druid::{widget::ControllerHost, Data, Env, EventCtx, MouseEvent, Widget};

pub use click::Clicked;
pub use hover::Hover;

pub trait MyWidgetExt<T: Data>: Widget<T> + Sized + 'static {
    fn hover(self) -> Hover<T> {
        Hover::new(self)
    }

    fn on_left_click(
        self,
        f: impl Fn(&mut EventCtx, &MouseEvent, &mut T, &Env) + 'static,
    ) -> ControllerHost<Self, Clicked<T>> {
        ControllerHost::new(self, Clicked::new(f))
    }
}

impl<T: Data, W: Widget<T> + 'static> MyWidgetExt<T> for W {}
