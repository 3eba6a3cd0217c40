use druid::{
    im::Vector,
    lens,
    widget::{Flex, Label, LineBreaking, List, SizedBox, ViewSwitcher},
    Widget, WidgetExt,
};
use itertools::Itertools;

use crate::{
    cmd,
    data::{AppState, Artwork, Cat, Nav},
    ui::theme,
    widget::{icons, icons::SvgIcon, MyWidgetExt},
};

const LIST_COLUMNS: usize = 2;

pub fn list_widget() -> impl Widget<AppState> {
    List::new(row_widget)
        .lens(lens::Map::new(
            |data: &AppState| rows_of(&data.cats),
            |_, _| {},
        ))
        .padding(theme::grid(1.0))
}

fn rows_of(cats: &Vector<Cat>) -> Vector<Vector<Cat>> {
    cats.iter()
        .cloned()
        .chunks(LIST_COLUMNS)
        .into_iter()
        .map(|row| row.collect())
        .collect()
}

fn row_widget() -> impl Widget<Vector<Cat>> {
    List::new(card_widget).horizontal()
}

fn card_widget() -> impl Widget<Cat> {
    let name = Label::dynamic(|cat: &Cat, _| cat.name.to_string())
        .with_font(theme::UI_FONT_MEDIUM)
        .with_text_size(theme::TEXT_SIZE_LARGE)
        .with_text_color(theme::PRIMARY_DARK);
    let divider = SizedBox::empty()
        .height(1.0)
        .expand_width()
        .background(theme::BORDER_DARK);

    Flex::column()
        .with_child(name)
        .with_spacer(theme::grid(0.5))
        .with_child(divider)
        .with_spacer(theme::grid(1.0))
        .with_child(portrait_widget(theme::grid(12.0)))
        .padding(theme::grid(1.5))
        .fix_size(theme::grid(20.0), theme::grid(20.0))
        .border(theme::BORDER_DARK, 1.0)
        .hover()
        .rounded(theme::BUTTON_BORDER_RADIUS)
        .on_left_click(|ctx, _, cat, _| {
            ctx.submit_command(cmd::NAVIGATE.with(Nav::CatDetail(cat.clone())));
        })
        .padding(theme::grid(1.0))
}

pub fn detail_widget(cat: &Cat) -> impl Widget<AppState> {
    let portrait = artwork_icon(&cat.artwork)
        .scale((theme::grid(22.0), theme::grid(22.0)))
        .with_color(theme::PRIMARY_DARK);
    let name = Label::new(cat.name.to_string()).with_text_size(theme::TEXT_SIZE_DISPLAY);
    let gender = Label::new(cat.gender.symbol()).with_text_size(36.0);
    let curiosity = Label::new(cat.curiosity.to_string())
        .with_text_size(theme::TEXT_SIZE_LARGE)
        .with_line_break_mode(LineBreaking::WordWrap);

    Flex::column()
        .with_child(portrait)
        .with_spacer(theme::grid(1.5))
        .with_child(name)
        .with_spacer(theme::grid(1.0))
        .with_child(gender)
        .with_spacer(theme::grid(1.5))
        .with_child(curiosity)
        .padding(theme::grid(2.5))
}

fn portrait_widget(size: f64) -> impl Widget<Cat> {
    ViewSwitcher::new(
        |cat: &Cat, _| cat.artwork,
        move |artwork, _, _| artwork_icon(artwork).scale((size, size)).boxed(),
    )
}

fn artwork_icon(artwork: &Artwork) -> &'static SvgIcon {
    match artwork {
        Artwork::Tabby => &icons::CAT_TABBY,
        Artwork::Tuxedo => &icons::CAT_TUXEDO,
        Artwork::Calico => &icons::CAT_CALICO,
        Artwork::Shorthair => &icons::CAT_SHORTHAIR,
        Artwork::Ginger => &icons::CAT_GINGER,
        Artwork::Siamese => &icons::CAT_SIAMESE,
    }
}
