use druid::Data;

use crate::data::Cat;

/// The screen currently shown in the main window. Detail keeps the full
/// selected record, so the variant can never point at a missing cat.
#[derive(Clone, Debug, Data, Eq, PartialEq)]
pub enum Nav {
    CatList,
    CatDetail(Cat),
}

impl Nav {
    pub fn title(&self) -> String {
        match self {
            Nav::CatList => "All Cats".to_string(),
            Nav::CatDetail(cat) => cat.name.to_string(),
        }
    }
}

/// Outcome of a back request. `NotConsumed` means the navigation state had
/// nothing left to collapse and the caller owns the default action.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BackNav {
    Consumed,
    NotConsumed,
}
