use druid::{Env, KbKey, LocalizedString, Menu, MenuItem, SysMods, WindowId};

use crate::{
    cmd,
    data::{AppState, Nav},
};

#[allow(unused_mut)]
pub fn main_menu(_window: Option<WindowId>, _data: &AppState, _env: &Env) -> Menu<AppState> {
    let mut menu = Menu::empty();
    #[cfg(target_os = "macos")]
    {
        menu = menu.entry(druid::platform_menus::mac::application::default());
    }
    menu.entry(view_menu())
}

fn view_menu() -> Menu<AppState> {
    Menu::new(LocalizedString::new("menu-view-menu").with_placeholder("View"))
        .entry(
            MenuItem::new(
                LocalizedString::new("menu-item-all-cats").with_placeholder("All Cats"),
            )
            .command(cmd::NAVIGATE.with(Nav::CatList))
            .hotkey(SysMods::Cmd, "1"),
        )
        .entry(
            MenuItem::new(LocalizedString::new("menu-item-back").with_placeholder("Back"))
                .command(cmd::NAVIGATE_BACK)
                .hotkey(SysMods::None, KbKey::Escape),
        )
}
