//! The in-memory menu.

use super::dish::{DishId, DishRecord};

/// Ordered collection of dishes, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MenuCatalog {
    dishes: Vec<DishRecord>,
}

impl MenuCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog pre-filled with the given dishes, in order.
    pub fn with_dishes(dishes: Vec<DishRecord>) -> Self {
        Self { dishes }
    }

    /// Append a dish to the end of the menu.
    pub fn add(&mut self, dish: DishRecord) {
        self.dishes.push(dish);
    }

    /// Remove the dish with the given id.
    ///
    /// Returns the removed dish, or `None` when nothing matched.
    pub fn remove(&mut self, id: &DishId) -> Option<DishRecord> {
        let index = self.dishes.iter().position(|dish| &dish.id == id)?;
        Some(self.dishes.remove(index))
    }

    pub fn all(&self) -> &[DishRecord] {
        &self.dishes
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::course::Course;

    fn dish(id: &str, course: Course) -> DishRecord {
        DishRecord {
            id: DishId::new(id),
            dish_name: id.to_string(),
            description: "desc".to_string(),
            course,
            price: "10".to_string(),
            image: String::new(),
        }
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut catalog = MenuCatalog::new();
        catalog.add(dish("a", Course::Mains));
        catalog.add(dish("b", Course::Starters));
        catalog.add(dish("c", Course::Dessert));

        let ids: Vec<&str> = catalog.all().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut catalog = MenuCatalog::with_dishes(vec![
            dish("a", Course::Mains),
            dish("b", Course::Starters),
        ]);

        let removed = catalog.remove(&DishId::new("a"));
        assert_eq!(removed.map(|d| d.dish_name), Some("a".to_string()));
        assert_eq!(catalog.len(), 1);

        assert!(catalog.remove(&DishId::new("a")).is_none());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut catalog = MenuCatalog::with_dishes(vec![dish("a", Course::Mains)]);
        assert!(catalog.remove(&DishId::new("zzz")).is_none());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_remove_preserves_order_of_others() {
        let mut catalog = MenuCatalog::with_dishes(vec![
            dish("a", Course::Mains),
            dish("b", Course::Starters),
            dish("c", Course::Dessert),
        ]);
        catalog.remove(&DishId::new("b"));

        let ids: Vec<&str> = catalog.all().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert!(!catalog.all().iter().any(|d| d.id == DishId::new("b")));
    }
}
