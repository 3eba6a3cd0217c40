use std::sync::Arc;

use druid::{im::Vector, Data, Lens};
use once_cell::sync::Lazy;

/// A single catalog record. Immutable once constructed; the record itself
/// is the key used to open a detail screen.
#[derive(Clone, Debug, Data, Lens, Eq, PartialEq)]
pub struct Cat {
    pub name: Arc<str>,
    pub gender: Gender,
    pub artwork: Artwork,
    pub curiosity: Arc<str>,
}

#[derive(Copy, Clone, Debug, Data, Eq, PartialEq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn symbol(&self) -> &'static str {
        match self {
            Gender::Male => "♂",
            Gender::Female => "♀",
        }
    }
}

/// Names one of the bundled portrait illustrations. Resolved to a
/// paintable icon by the presentation layer.
#[derive(Copy, Clone, Debug, Data, Eq, PartialEq)]
pub enum Artwork {
    Tabby,
    Tuxedo,
    Calico,
    Shorthair,
    Ginger,
    Siamese,
}

/// The fixed, ordered catalog. Populated once, read by the grid, never
/// mutated.
pub fn catalog() -> &'static Vector<Cat> {
    &CATALOG
}

static CATALOG: Lazy<Vector<Cat>> = Lazy::new(|| {
    [
        Cat {
            name: "Tiger".into(),
            gender: Gender::Male,
            artwork: Artwork::Tabby,
            curiosity: "Are you that clean? This behavior serves several purposes: It helps cats tone down their scent so they can avoid predators, it cools them down, it promotes blood flow, and it distributes natural oils evenly around their coat, allowing them to stay warm and dry. Grooming also serves as a sign of affection between two cats, and it's thought that saliva contains enzymes that serve as a natural antibiotic for wounds.".into(),
        },
        Cat {
            name: "Max".into(),
            gender: Gender::Male,
            artwork: Artwork::Tuxedo,
            curiosity: "Ever wonder why catnip lulls felines into a trance? The herb contains several chemical compounds, including one called nepetalactone, which a cat detects with receptors in its nose and mouth. The compounds trigger the typical odd behaviors you associate with the wacky kitty weed, including sniffing, head shaking, head rubbing, and rolling around on the ground.".into(),
        },
        Cat {
            name: "Lily".into(),
            gender: Gender::Female,
            artwork: Artwork::Calico,
            curiosity: "More than half of the world's felines don't respond to catnip. Scientists still don't know quite why some kitties go crazy for the aromatic herb and others don't, but they have figured out that catnip sensitivity is hereditary. If a kitten has one catnip-sensitive parent, there's a one-in-two chance that it will also grow up to crave the plant. And if both parents react to 'nip, the odds increase to at least three in four.".into(),
        },
        Cat {
            name: "Kitty".into(),
            gender: Gender::Female,
            artwork: Artwork::Shorthair,
            curiosity: "A rich British antique dealer named Ben Rea loved his cat Blackie so much that when he died in 1988, he left most of his estate, totaling nearly $13 million, to the lucky (albeit likely indifferent) feline. The money was split among three cat charities, which had been instructed to keep an eye on Rea's beloved companion. To this day, Blackie holds the Guinness World Record for Wealthiest Cat.".into(),
        },
        Cat {
            name: "Simba".into(),
            gender: Gender::Female,
            artwork: Artwork::Ginger,
            curiosity: "On October 18, 1963, French scientists used a rocket to launch the first cat into space. The feline's name was Félicette, and she made it safely to the ground following a parachute descent. Almost definitely landing on her feet.".into(),
        },
        Cat {
            name: "Alfie".into(),
            gender: Gender::Male,
            artwork: Artwork::Siamese,
            curiosity: "A train station in Southeastern Japan is presided over by an adorable \"stationmaster\": a 7-year-old calico cat named Nitama. The Kishi train station near Wakayama City hired Nitama in 2015, just a few months after its prior feline mascot, Tama, died from acute heart failure at the age of 16.".into(),
        },
    ]
    .into_iter()
    .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_six_cats_in_fixed_order() {
        let names: Vec<&str> = catalog().iter().map(|cat| &*cat.name).collect();
        assert_eq!(names, ["Tiger", "Max", "Lily", "Kitty", "Simba", "Alfie"]);
    }

    #[test]
    fn test_catalog_records_are_complete() {
        for cat in catalog().iter() {
            assert!(!cat.name.is_empty());
            assert!(!cat.curiosity.is_empty());
        }
    }
}
