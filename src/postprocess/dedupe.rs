use hashbrown::HashSet;
use tracing::debug;

use crate::models::Landmark;

/// Drop landmarks whose name was already seen, keeping the first occurrence.
///
/// Landmarks without a name share a single slot, so at most one of them
/// survives.
pub fn dedupe(landmarks: Vec<Landmark>) -> Vec<Landmark> {
    let total = landmarks.len();
    let mut seen: HashSet<Option<String>> = HashSet::with_capacity(total);
    let mut unique = Vec::with_capacity(total);

    for landmark in landmarks {
        if seen.insert(landmark.name.clone()) {
            unique.push(landmark);
        }
    }

    if unique.len() < total {
        debug!("Dropped {} duplicate landmarks", total - unique.len());
    }

    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str, xid: &str) -> Landmark {
        Landmark::new(Some(name), "", xid)
    }

    #[test]
    fn test_first_occurrence_wins() {
        let input = vec![
            named("Louvre", "a"),
            named("Eiffel Tower", "b"),
            named("Louvre", "c"),
            named("Louvre", "d"),
            named("Pantheon", "e"),
        ];

        let out = dedupe(input);
        let xids: Vec<&str> = out.iter().map(|l| l.xid.as_str()).collect();
        assert_eq!(xids, vec!["a", "b", "e"]);
    }

    #[test]
    fn test_adjacent_duplicates() {
        // Removing while indexing would skip the third entry here.
        let input = vec![named("A", "1"), named("A", "2"), named("A", "3"), named("B", "4")];

        let out = dedupe(input);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].xid, "1");
        assert_eq!(out[1].xid, "4");
    }

    #[test]
    fn test_names_unique_and_from_input() {
        let input = vec![
            named("x", "1"),
            named("y", "2"),
            named("x", "3"),
            Landmark::new(None, "", "4"),
            named("z", "5"),
            Landmark::new(None, "", "6"),
            named("y", "7"),
        ];
        let input_names: Vec<Option<String>> = input.iter().map(|l| l.name.clone()).collect();

        let out = dedupe(input);
        let mut names: Vec<Option<String>> = out.iter().map(|l| l.name.clone()).collect();
        assert!(names.iter().all(|n| input_names.contains(n)));

        let before = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), before);
        assert_eq!(before, 4);
    }

    #[test]
    fn test_empty() {
        assert!(dedupe(Vec::new()).is_empty());
    }
}
