pub mod cat;
pub mod menu;
pub mod theme;

use druid::{
    widget::{CrossAxisAlignment, Either, Flex, Label, Scroll, SizedBox, ViewSwitcher},
    Env, Widget, WidgetExt, WindowDesc,
};

use crate::{
    cmd,
    controller::NavController,
    data::{AppState, Nav},
    widget::{icons, MyWidgetExt},
};

pub fn main_window() -> WindowDesc<AppState> {
    WindowDesc::new(root_widget())
        .title(|data: &AppState, _env: &Env| data.nav.title())
        .menu(menu::main_menu)
        .with_min_size((theme::grid(46.0), theme::grid(50.0)))
        .window_size((theme::grid(46.0), theme::grid(72.0)))
}

fn root_widget() -> impl Widget<AppState> {
    let topbar = Flex::row()
        .must_fill_main_axis(true)
        .with_child(back_button_widget())
        .with_default_spacer()
        .with_child(title_widget());

    Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(topbar)
        .with_flex_child(route_widget(), 1.0)
        .background(theme::BACKGROUND_LIGHT)
        .controller(NavController)
}

fn route_widget() -> impl Widget<AppState> {
    ViewSwitcher::new(
        |data: &AppState, _| data.nav.clone(),
        |nav, _, _| match nav {
            Nav::CatList => Scroll::new(cat::list_widget()).vertical().expand().boxed(),
            Nav::CatDetail(selected) => Scroll::new(cat::detail_widget(selected))
                .vertical()
                .expand()
                .boxed(),
        },
    )
}

fn back_button_widget() -> impl Widget<AppState> {
    let icon_width = 10.0;
    let icon_height = theme::grid(2.0);
    let empty_icon = SizedBox::empty()
        .width(icon_width + theme::grid(2.0))
        .height(icon_height + theme::grid(2.0));
    let back_icon = icons::BACK
        .scale((icon_width, icon_height))
        .padding(theme::grid(1.0))
        .hover()
        .rounded(theme::BUTTON_BORDER_RADIUS)
        .on_left_click(|ctx, _, _, _| {
            ctx.submit_command(cmd::NAVIGATE_BACK);
        });
    Either::new(
        |data: &AppState, _| matches!(data.nav, Nav::CatList),
        empty_icon,
        back_icon,
    )
    .padding(theme::grid(1.0))
}

fn title_widget() -> impl Widget<AppState> {
    Label::dynamic(|data: &AppState, _| data.nav.title())
        .with_font(theme::UI_FONT_MEDIUM)
        .with_text_size(theme::TEXT_SIZE_LARGE)
}
