use crate::domain::activity::Activity;
use crate::domain::ports::Describe;
use crate::domain::Shared;
use std::hash::{Hash, Hasher};

/// A named stop in an itinerary.
///
/// Equality and hashing use the name alone, so two destinations called
/// "Bali" compare equal whatever activities they list. Activities are kept in
/// insertion order and are not deduplicated.
#[derive(Debug, Clone)]
pub struct Destination {
    name: String,
    activities: Vec<Shared<Activity>>,
}

impl Destination {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            activities: Vec::new(),
        }
    }

    pub fn add_activity(&mut self, activity: Shared<Activity>) {
        self.activities.push(activity);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn activities(&self) -> &[Shared<Activity>] {
        &self.activities
    }

    /// First activity with the given name.
    pub fn activity(&self, name: &str) -> Option<Shared<Activity>> {
        self.activities
            .iter()
            .find(|activity| activity.borrow().name() == name)
            .cloned()
    }

    /// Every (destination, activity) pair, in itinerary order. Each call
    /// starts a fresh traversal.
    pub fn activity_pairs(&self) -> impl Iterator<Item = (&Destination, &Shared<Activity>)> + '_ {
        self.activities.iter().map(move |activity| (self, activity))
    }
}

impl PartialEq for Destination {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Destination {}

impl Hash for Destination {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl Describe for Destination {
    fn describe(&self) -> String {
        let mut out = format!("Destination Name: {}\nActivities:\n", self.name);
        for (_, activity) in self.activity_pairs() {
            out.push_str(&activity.borrow().describe());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared;
    use std::collections::hash_map::DefaultHasher;
    use std::rc::Rc;

    fn hash_of(destination: &Destination) -> u64 {
        let mut hasher = DefaultHasher::new();
        destination.hash(&mut hasher);
        hasher.finish()
    }

    fn activity(name: &str) -> Shared<Activity> {
        shared(Activity::new(name, "Test Description", 100.0, 5).unwrap())
    }

    #[test]
    fn test_new_destination_has_no_activities() {
        let destination = Destination::new("Test Destination");
        assert_eq!(destination.name(), "Test Destination");
        assert!(destination.activities().is_empty());
        assert_eq!(Destination::new("").name(), "");
    }

    #[test]
    fn test_add_activity_keeps_order_and_duplicates() {
        let mut destination = Destination::new("Bali");
        let diving = activity("Diving");
        let surfing = activity("Surfing");

        destination.add_activity(diving.clone());
        destination.add_activity(surfing.clone());
        destination.add_activity(diving.clone());

        let names: Vec<String> = destination
            .activities()
            .iter()
            .map(|a| a.borrow().name().to_string())
            .collect();
        assert_eq!(names, vec!["Diving", "Surfing", "Diving"]);
        assert!(Rc::ptr_eq(&destination.activities()[0], &diving));
    }

    #[test]
    fn test_equality_by_name_only() {
        let mut bali = Destination::new("Bali");
        bali.add_activity(activity("Diving"));
        let other_bali = Destination::new("Bali");
        let hawaii = Destination::new("Hawaii");

        assert_eq!(bali, other_bali);
        assert_eq!(hash_of(&bali), hash_of(&other_bali));
        assert_ne!(bali, hawaii);
    }

    #[test]
    fn test_activity_pairs_is_restartable() {
        let mut bali = Destination::new("Bali");
        bali.add_activity(activity("Diving"));
        bali.add_activity(activity("Surfing"));

        assert_eq!(bali.activity_pairs().count(), 2);
        let first = bali.activity_pairs().next().map(|(d, a)| {
            (d.name().to_string(), a.borrow().name().to_string())
        });
        assert_eq!(first, Some(("Bali".to_string(), "Diving".to_string())));
    }

    #[test]
    fn test_lookup_and_itinerary() {
        let mut bali = Destination::new("Bali");
        bali.add_activity(activity("Diving"));

        assert!(bali.activity("Diving").is_some());
        assert!(bali.activity("Kayaking").is_none());

        let text = bali.describe();
        assert!(text.starts_with("Destination Name: Bali\nActivities:\n"));
        assert!(text.contains("Activity Name: Diving"));
    }
}
