pub use druid::theme::*;
use druid::{Color, Env, FontDescriptor, FontFamily, FontWeight, Key};

use crate::data::AppState;

pub fn grid(m: f64) -> f64 {
    GRID * m
}

pub const GRID: f64 = 8.0;

pub const WHITE: Color = Color::WHITE;
pub const BLACK: Color = Color::BLACK;
pub const GREY_1: Color = Color::grey8(0x33);
pub const GREY_2: Color = Color::grey8(0x4f);
pub const GREY_3: Color = Color::grey8(0x82);
pub const GREY_4: Color = Color::grey8(0xbd);
pub const GREY_5: Color = Color::grey8(0xe0);
pub const GREY_6: Color = Color::grey8(0xf2);
pub const BLUE_LIGHT: Color = Color::rgb8(0x5c, 0xc4, 0xff);
pub const BLUE_DARK: Color = Color::rgb8(0x00, 0x8d, 0xdd);

pub const ICON_COLOR: Key<Color> = Key::new("app.icon-color");
pub const HOVER_HOT_COLOR: Key<Color> = Key::new("app.hover-hot-color");
pub const HOVER_COLD_COLOR: Key<Color> = Key::new("app.hover-cold-color");
pub const UI_FONT_MEDIUM: Key<FontDescriptor> = Key::new("app.ui-font-medium");
pub const TEXT_SIZE_SMALL: Key<f64> = Key::new("app.text-size-small");
pub const TEXT_SIZE_DISPLAY: Key<f64> = Key::new("app.text-size-display");

pub fn setup(env: &mut Env, _state: &AppState) {
    env.set(WINDOW_BACKGROUND_COLOR, WHITE);
    env.set(TEXT_COLOR, GREY_1);
    env.set(ICON_COLOR, GREY_2);
    env.set(PLACEHOLDER_COLOR, GREY_3);
    env.set(PRIMARY_LIGHT, BLUE_LIGHT);
    env.set(PRIMARY_DARK, BLUE_DARK);

    env.set(BACKGROUND_LIGHT, WHITE);
    env.set(BACKGROUND_DARK, GREY_6);
    env.set(FOREGROUND_LIGHT, GREY_1);
    env.set(FOREGROUND_DARK, BLACK);

    env.set(BUTTON_BORDER_RADIUS, 4.0);
    env.set(BUTTON_BORDER_WIDTH, 1.0);

    env.set(BORDER_DARK, GREY_5);
    env.set(BORDER_LIGHT, GREY_6);

    env.set(CURSOR_COLOR, BLACK);

    env.set(
        UI_FONT,
        FontDescriptor::new(FontFamily::SYSTEM_UI).with_size(14.0),
    );
    env.set(
        UI_FONT_MEDIUM,
        FontDescriptor::new(FontFamily::SYSTEM_UI)
            .with_size(14.0)
            .with_weight(FontWeight::MEDIUM),
    );
    env.set(TEXT_SIZE_SMALL, 12.0);
    env.set(TEXT_SIZE_NORMAL, 14.0);
    env.set(TEXT_SIZE_LARGE, 18.0);
    env.set(TEXT_SIZE_DISPLAY, 26.0);

    env.set(SCROLLBAR_COLOR, GREY_4);
    env.set(SCROLLBAR_BORDER_COLOR, GREY_3);
    env.set(SCROLLBAR_MAX_OPACITY, 0.7);
    env.set(SCROLLBAR_FADE_DELAY, 1500u64);
    env.set(SCROLLBAR_WIDTH, 8.0);
    env.set(SCROLLBAR_PAD, 2.0);
    env.set(SCROLLBAR_RADIUS, 5.0);
    env.set(SCROLLBAR_EDGE_WIDTH, 1.0);

    env.set(WIDGET_PADDING_VERTICAL, grid(1.0));
    env.set(WIDGET_PADDING_HORIZONTAL, grid(1.0));

    env.set(HOVER_HOT_COLOR, Color::rgba(0.0, 0.0, 0.0, 0.05));
    env.set(HOVER_COLD_COLOR, Color::rgba(0.0, 0.0, 0.0, 0.0));
}
