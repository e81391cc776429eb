use tracing::trace;

use crate::models::Landmark;

/// OpenTripMap category keys that are worth showing to a visitor.
///
/// Tags outside this list (technical or overly generic ones such as
/// `other` or `unclassified_objects`) are dropped from display labels.
pub const KNOWN_CATEGORIES: &[&str] = &[
    // Culture
    "interesting_places",
    "cultural",
    "museums",
    "archaeological_museums",
    "art_galleries",
    "biographical_museums",
    "fashion_museums",
    "history_museums",
    "local_museums",
    "military_museums",
    "national_museums",
    "science_museums",
    "technology_museums",
    "zoos",
    "aquariums",
    "planetariums",
    "theatres_and_entertainments",
    "cinemas",
    "concert_halls",
    "opera_houses",
    "music_venues",
    "urban_environment",
    "gardens_and_parks",
    "fountains",
    "sculptures",
    "wall_painting",
    "installation",
    // History
    "historic",
    "archaeology",
    "fortifications",
    "castles",
    "fortresses",
    "defensive_walls",
    "kremlins",
    "historical_places",
    "battlefields",
    "historic_settlements",
    "monuments_and_memorials",
    "monuments",
    "memorials",
    "cemeteries",
    "historic_architecture",
    "palaces",
    "manor_houses",
    "squares",
    // Architecture
    "architecture",
    "bridges",
    "towers",
    "lighthouses",
    "skyscrapers",
    "destroyed_objects",
    // Religion
    "religion",
    "churches",
    "cathedrals",
    "mosques",
    "synagogues",
    "buddhist_temples",
    "hindu_temples",
    "monasteries",
    "other_temples",
    // Nature
    "natural",
    "beaches",
    "geological_formations",
    "caves",
    "rock_formations",
    "mountain_peaks",
    "volcanoes",
    "islands",
    "water",
    "waterfalls",
    "lakes",
    "rivers",
    "canals",
    "nature_reserves",
    "national_parks",
    "view_points",
    // Leisure
    "amusements",
    "amusement_parks",
    "water_parks",
    "ferris_wheels",
    "sport",
    "stadiums",
    "climbing",
    "diving",
    "winter_sports",
    // Industry
    "industrial_facilities",
    "railway_stations",
    "factories",
    "mineshafts",
    "dams",
    // Amenities
    "tourist_facilities",
    "foods",
    "restaurants",
    "cafes",
    "markets",
];

/// Case-insensitive lookup in [`KNOWN_CATEGORIES`].
pub fn is_known_category(tag: &str) -> bool {
    KNOWN_CATEGORIES
        .iter()
        .any(|known| known.eq_ignore_ascii_case(tag))
}

/// Turn a raw tag string into a display label.
///
/// `"museums,foo,historic_architecture"` becomes
/// `"Museums, Historic Architecture"`.
pub fn format_categories(raw: &str) -> String {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty() && is_known_category(tag))
        .map(title_case)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Replace every landmark's raw tags with its display label.
pub fn update_kinds(landmarks: &mut [Landmark]) {
    for landmark in landmarks.iter_mut() {
        let label = format_categories(&landmark.kinds);
        trace!("kinds '{}' -> '{}'", landmark.kinds, label);
        landmark.kinds = label;
    }
}

fn title_case(tag: &str) -> String {
    tag.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let lower = word.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_tag_dropped() {
        assert_eq!(
            format_categories("museums,foo,historic_architecture"),
            "Museums, Historic Architecture"
        );
    }

    #[test]
    fn test_only_unknown_tags() {
        assert_eq!(format_categories("foo,bar"), "");
        assert_eq!(format_categories(""), "");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            format_categories("MUSEUMS, Gardens_And_Parks"),
            "Museums, Gardens And Parks"
        );
    }

    #[test]
    fn test_allow_list_is_lowercase_keys() {
        assert!(KNOWN_CATEGORIES.len() >= 90);
        for key in KNOWN_CATEGORIES {
            assert_eq!(*key, key.to_lowercase());
            assert!(!key.contains(' '));
        }
    }

    #[test]
    fn test_update_kinds_in_place() {
        let mut landmarks = vec![
            Landmark::new(Some("Notre-Dame"), "cathedrals,religion,other", "a"),
            Landmark::new(Some("Somewhere"), "unclassified_objects", "b"),
        ];

        update_kinds(&mut landmarks);

        assert_eq!(landmarks[0].kinds, "Cathedrals, Religion");
        assert_eq!(landmarks[1].kinds, "");
        assert_eq!(landmarks[0].xid, "a");
    }
}
