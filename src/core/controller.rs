//! View controller.
//!
//! Owns the menu catalog and the transient view state, and applies user
//! actions to them. The UI only reads from here and sends [`Action`]s back.

use super::catalog::MenuCatalog;
use super::course::Course;
use super::dish::{DishId, DishRecord};
use super::filter::filter_by_course;
use super::stats::{aggregate, MenuStats};
use super::validator::{validate, ValidationError};

/// Top-level screens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Home,
    Admin,
    Filter,
}

impl View {
    pub const ALL: [View; 3] = [View::Home, View::Admin, View::Filter];

    pub fn title(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Admin => "Admin",
            View::Filter => "Filter",
        }
    }
}

/// Text fields of the add-dish form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    DishName,
    Description,
    Price,
}

/// Unsaved values of the add-dish form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DishDraft {
    pub dish_name: String,
    pub description: String,
    pub course: Course,
    pub price: String,
}

impl DishDraft {
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::DishName => &self.dish_name,
            DraftField::Description => &self.description,
            DraftField::Price => &self.price,
        }
    }

    fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::DishName => &mut self.dish_name,
            DraftField::Description => &mut self.description,
            DraftField::Price => &mut self.price,
        }
    }
}

/// Transient UI state. Nothing here outlives the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub current_view: View,
    pub selected_course: Option<Course>,
    pub draft: DishDraft,
    pub last_error: Option<ValidationError>,
}

/// Something the user did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetView(View),
    SetFilter(Option<Course>),
    SetDraftField(DraftField, String),
    SetDraftCourse(Course),
    AddDish,
    RemoveDish(DishId),
    DismissError,
}

/// Result of applying an [`Action`], for status reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Unchanged,
    Added(DishRecord),
    Removed(DishRecord),
    Rejected(ValidationError),
}

/// Holds the menu and view state and applies actions to them.
#[derive(Debug, Clone, Default)]
pub struct MenuController {
    catalog: MenuCatalog,
    state: ViewState,
}

impl MenuController {
    pub fn new(catalog: MenuCatalog) -> Self {
        Self {
            catalog,
            state: ViewState::default(),
        }
    }

    /// Apply one user action.
    pub fn dispatch(&mut self, action: Action) -> Outcome {
        log::debug!("dispatch {:?}", action);
        match action {
            Action::SetView(view) => {
                self.set_view(view);
                Outcome::Unchanged
            }
            Action::SetFilter(course) => {
                self.set_filter(course);
                Outcome::Unchanged
            }
            Action::SetDraftField(field, value) => {
                self.set_draft_field(field, value);
                Outcome::Unchanged
            }
            Action::SetDraftCourse(course) => {
                self.set_draft_course(course);
                Outcome::Unchanged
            }
            Action::AddDish => match self.add_dish() {
                Ok(dish) => Outcome::Added(dish),
                Err(e) => Outcome::Rejected(e),
            },
            Action::RemoveDish(id) => match self.remove_dish(&id) {
                Some(dish) => Outcome::Removed(dish),
                None => Outcome::Unchanged,
            },
            Action::DismissError => {
                self.dismiss_error();
                Outcome::Unchanged
            }
        }
    }

    /// Validate the draft and append it to the menu.
    ///
    /// On success the draft is cleared. On failure the draft is kept and
    /// the error is remembered until dismissed.
    pub fn add_dish(&mut self) -> Result<DishRecord, ValidationError> {
        let draft = &self.state.draft;
        match validate(&draft.dish_name, &draft.description, &draft.price, draft.course) {
            Ok(dish) => {
                log::info!("Added '{}' ({}) as {}", dish.dish_name, dish.course, dish.id);
                self.catalog.add(dish.clone());
                self.state.draft = DishDraft::default();
                self.state.last_error = None;
                Ok(dish)
            }
            Err(e) => {
                log::info!("Rejected new dish: {}", e);
                self.state.last_error = Some(e);
                Err(e)
            }
        }
    }

    /// Remove a dish. Unknown ids are ignored.
    pub fn remove_dish(&mut self, id: &DishId) -> Option<DishRecord> {
        let removed = self.catalog.remove(id);
        match &removed {
            Some(dish) => log::info!("Removed '{}' ({})", dish.dish_name, dish.id),
            None => log::debug!("Remove ignored, no dish with id {}", id),
        }
        removed
    }

    pub fn set_view(&mut self, view: View) {
        self.state.current_view = view;
    }

    /// Select a course to filter by, or `None` to show all.
    pub fn set_filter(&mut self, course: Option<Course>) {
        self.state.selected_course = course;
    }

    pub fn set_draft_field(&mut self, field: DraftField, value: String) {
        *self.state.draft.field_mut(field) = value;
    }

    pub fn set_draft_course(&mut self, course: Course) {
        self.state.draft.course = course;
    }

    pub fn dismiss_error(&mut self) {
        self.state.last_error = None;
    }

    pub fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }

    pub fn dishes(&self) -> &[DishRecord] {
        self.catalog.all()
    }

    pub fn stats(&self) -> MenuStats {
        aggregate(self.catalog.all())
    }

    /// Dishes for the filter view, honouring the selected course.
    pub fn filtered(&self) -> Vec<&DishRecord> {
        filter_by_course(self.catalog.all(), self.state.selected_course)
    }

    pub fn current_view(&self) -> View {
        self.state.current_view
    }

    pub fn selected_course(&self) -> Option<Course> {
        self.state.selected_course
    }

    pub fn draft(&self) -> &DishDraft {
        &self.state.draft
    }

    pub fn last_error(&self) -> Option<ValidationError> {
        self.state.last_error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::seed::sample_menu;

    fn fill_draft(controller: &mut MenuController, name: &str, desc: &str, course: Course, price: &str) {
        controller.dispatch(Action::SetDraftField(DraftField::DishName, name.to_string()));
        controller.dispatch(Action::SetDraftField(DraftField::Description, desc.to_string()));
        controller.dispatch(Action::SetDraftCourse(course));
        controller.dispatch(Action::SetDraftField(DraftField::Price, price.to_string()));
    }

    #[test]
    fn test_starts_on_home() {
        let controller = MenuController::default();
        assert_eq!(controller.current_view(), View::Home);
        assert_eq!(controller.selected_course(), None);
        assert_eq!(controller.draft(), &DishDraft::default());
        assert_eq!(controller.draft().course, Course::Starters);
    }

    #[test]
    fn test_add_soup_and_steak() {
        let mut controller = MenuController::default();

        fill_draft(&mut controller, "Soup", "Hot soup", Course::Starters, "50");
        assert!(matches!(controller.dispatch(Action::AddDish), Outcome::Added(_)));
        fill_draft(&mut controller, "Steak", "Grilled", Course::Mains, "150");
        assert!(matches!(controller.dispatch(Action::AddDish), Outcome::Added(_)));

        let stats = controller.stats();
        assert_eq!(stats.total_count, 2);
        assert_eq!(stats.average_label(Course::Starters), "50.00");
        assert_eq!(stats.average_label(Course::Mains), "150.00");
        assert_eq!(stats.average_label(Course::Dessert), "0.00");
    }

    #[test]
    fn test_successful_add_clears_draft_and_error() {
        let mut controller = MenuController::default();
        fill_draft(&mut controller, "Tart", "Lemon", Course::Dessert, "");
        controller.add_dish().unwrap_err();
        assert_eq!(controller.last_error(), Some(ValidationError::MissingField));

        controller.set_draft_field(DraftField::Price, "40".to_string());
        let dish = controller.add_dish().unwrap();
        assert_eq!(dish.course, Course::Dessert);
        assert_eq!(controller.draft(), &DishDraft::default());
        assert_eq!(controller.last_error(), None);
        assert_eq!(controller.dishes().last(), Some(&dish));
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let mut controller = MenuController::new(MenuCatalog::with_dishes(sample_menu()));
        fill_draft(&mut controller, "Soup", "Hot soup", Course::Starters, "-5");

        let outcome = controller.dispatch(Action::AddDish);
        assert_eq!(outcome, Outcome::Rejected(ValidationError::InvalidPrice));
        assert_eq!(controller.dishes().len(), 3);
        assert_eq!(controller.last_error(), Some(ValidationError::InvalidPrice));
        assert_eq!(controller.draft().price, "-5");
        assert_eq!(controller.draft().dish_name, "Soup");
    }

    #[test]
    fn test_whitespace_name_is_missing_field() {
        let mut controller = MenuController::default();
        fill_draft(&mut controller, "  ", "Hot soup", Course::Starters, "50");
        assert_eq!(controller.add_dish(), Err(ValidationError::MissingField));
        assert!(controller.catalog().is_empty());
    }

    #[test]
    fn test_dismiss_error() {
        let mut controller = MenuController::default();
        controller.dispatch(Action::AddDish);
        assert!(controller.last_error().is_some());
        controller.dispatch(Action::DismissError);
        assert!(controller.last_error().is_none());
    }

    #[test]
    fn test_remove_twice() {
        let mut controller = MenuController::new(MenuCatalog::with_dishes(sample_menu()));
        let id = DishId::new("main-1");

        assert!(matches!(controller.dispatch(Action::RemoveDish(id.clone())), Outcome::Removed(_)));
        assert_eq!(controller.dishes().len(), 2);
        assert_eq!(controller.dispatch(Action::RemoveDish(id)), Outcome::Unchanged);
        assert_eq!(controller.dishes().len(), 2);
    }

    #[test]
    fn test_view_switch_keeps_filter_and_draft() {
        let mut controller = MenuController::default();
        controller.dispatch(Action::SetView(View::Filter));
        controller.dispatch(Action::SetFilter(Some(Course::Dessert)));
        controller.dispatch(Action::SetView(View::Admin));
        fill_draft(&mut controller, "Pie", "Apple", Course::Mains, "30");

        controller.dispatch(Action::SetView(View::Home));
        controller.dispatch(Action::SetView(View::Filter));
        assert_eq!(controller.selected_course(), Some(Course::Dessert));
        assert_eq!(controller.draft().dish_name, "Pie");
        assert_eq!(controller.draft().course, Course::Mains);
    }

    #[test]
    fn test_filter_course_is_independent_of_draft_course() {
        let mut controller = MenuController::default();
        controller.set_draft_course(Course::Dessert);
        controller.set_filter(Some(Course::Mains));
        assert_eq!(controller.draft().course, Course::Dessert);
        assert_eq!(controller.selected_course(), Some(Course::Mains));
    }

    #[test]
    fn test_removing_last_dish_keeps_selected_course() {
        let mut controller = MenuController::new(MenuCatalog::with_dishes(sample_menu()));
        controller.set_filter(Some(Course::Mains));
        assert_eq!(controller.filtered().len(), 1);

        controller.remove_dish(&DishId::new("main-1"));
        assert_eq!(controller.selected_course(), Some(Course::Mains));
        assert!(controller.filtered().is_empty());
    }

    #[test]
    fn test_filtered_show_all() {
        let mut controller = MenuController::new(MenuCatalog::with_dishes(sample_menu()));
        controller.set_filter(Some(Course::Starters));
        controller.set_filter(None);
        let names: Vec<&str> = controller.filtered().iter().map(|d| d.dish_name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Garlic Butter Shrimp", "Grilled Ribeye Steak", "Chocolate Cake"]
        );
    }

    #[test]
    fn test_draft_field_accessor() {
        let mut controller = MenuController::default();
        controller.set_draft_field(DraftField::Description, "Crispy".to_string());
        assert_eq!(controller.draft().field(DraftField::Description), "Crispy");
        assert_eq!(controller.draft().field(DraftField::DishName), "");
    }
}
