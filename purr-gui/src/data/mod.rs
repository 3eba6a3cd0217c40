pub mod cat;
mod nav;

pub use crate::data::{
    cat::{Artwork, Cat, Gender},
    nav::{BackNav, Nav},
};

use druid::{im::Vector, Data, Lens};

#[derive(Clone, Debug, Data, Lens)]
pub struct AppState {
    pub nav: Nav,
    pub cats: Vector<Cat>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            nav: Nav::CatList,
            cats: cat::catalog().clone(),
        }
    }
}

impl AppState {
    /// Switches to `nav` unconditionally. Re-selecting the cat already on
    /// screen writes the state again; render suppression for equal states
    /// is left to the data diff.
    pub fn navigate(&mut self, nav: &Nav) {
        log::debug!("navigating to {}", nav.title());
        self.nav = nav.to_owned();
    }

    /// Collapses the detail screen back to the list. Returns `NotConsumed`
    /// when the list is already showing, in which case the caller performs
    /// its own default back action.
    pub fn navigate_back(&mut self) -> BackNav {
        match &self.nav {
            Nav::CatList => BackNav::NotConsumed,
            Nav::CatDetail(_) => {
                self.nav = Nav::CatList;
                BackNav::Consumed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selecting_any_catalog_cat_shows_its_detail() {
        for cat in cat::catalog().iter() {
            let mut state = AppState::default();
            state.navigate(&Nav::CatDetail(cat.clone()));
            assert_eq!(state.nav, Nav::CatDetail(cat.clone()));
        }
    }

    #[test]
    fn test_back_from_list_is_not_consumed_and_keeps_the_list() {
        let mut state = AppState::default();
        assert_eq!(state.navigate_back(), BackNav::NotConsumed);
        assert_eq!(state.nav, Nav::CatList);
    }

    #[test]
    fn test_back_from_detail_is_consumed_and_returns_to_the_list() {
        for cat in cat::catalog().iter() {
            let mut state = AppState::default();
            state.navigate(&Nav::CatDetail(cat.clone()));
            assert_eq!(state.navigate_back(), BackNav::Consumed);
            assert_eq!(state.nav, Nav::CatList);
        }
    }

    #[test]
    fn test_second_back_in_a_row_is_not_consumed() {
        let cat = cat::catalog().front().unwrap().clone();
        let mut state = AppState::default();
        state.navigate(&Nav::CatDetail(cat));
        assert_eq!(state.navigate_back(), BackNav::Consumed);
        assert_eq!(state.navigate_back(), BackNav::NotConsumed);
        assert_eq!(state.nav, Nav::CatList);
    }

    #[test]
    fn test_reselection_replaces_the_detail_without_passing_the_list() {
        let first = cat::catalog().front().unwrap().clone();
        let second = cat::catalog().back().unwrap().clone();
        let mut state = AppState::default();
        state.navigate(&Nav::CatDetail(first));
        state.navigate(&Nav::CatDetail(second.clone()));
        assert_eq!(state.nav, Nav::CatDetail(second));
    }

    #[test]
    fn test_select_back_back_walkthrough() {
        let max = cat::catalog()[1].clone();
        let mut state = AppState::default();
        assert_eq!(state.nav, Nav::CatList);

        state.navigate(&Nav::CatDetail(max.clone()));
        assert_eq!(state.nav, Nav::CatDetail(max));

        assert_eq!(state.navigate_back(), BackNav::Consumed);
        assert_eq!(state.nav, Nav::CatList);

        assert_eq!(state.navigate_back(), BackNav::NotConsumed);
        assert_eq!(state.nav, Nav::CatList);
    }
}
