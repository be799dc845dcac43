//! Main application window.
//!
//! Renders the home, admin and filter views with egui. Widgets never touch
//! the menu directly: clicks and edits are collected as [`Action`]s during
//! the frame and handed to the [`MenuController`] once rendering is done.

use crate::config::Config;
use crate::core::catalog::MenuCatalog;
use crate::core::controller::{Action, DraftField, MenuController, Outcome, View};
use crate::core::course::Course;
use crate::core::dish::DishRecord;
use crate::core::filter;
use crate::ui::theme;
use egui::{Color32, RichText, TextEdit, Ui};

/// Main window state.
pub struct MainWindow {
    controller: MenuController,
    config: Config,

    // Status bar
    status_message: String,
    status_is_error: bool,

    theme_applied: bool,
}

impl MainWindow {
    pub fn new(config: Config, catalog: MenuCatalog) -> Self {
        let status_message = format!("{} dishes on the menu", catalog.len());
        Self {
            controller: MenuController::new(catalog),
            config,
            status_message,
            status_is_error: false,
            theme_applied: false,
        }
    }

    /// Render the main window.
    pub fn render(&mut self, ctx: &egui::Context) {
        // Apply theme once
        if !self.theme_applied {
            theme::apply_light_theme(ctx);
            self.theme_applied = true;
        }

        let mut actions = Vec::new();

        egui::TopBottomPanel::top("view_switcher").show(ctx, |ui| {
            self.render_view_switcher(ui, &mut actions);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.render_status_bar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match self.controller.current_view() {
                    View::Home => self.render_home(ui),
                    View::Admin => self.render_admin(ui, &mut actions),
                    View::Filter => self.render_filter(ui, &mut actions),
                });
        });

        self.render_error_alert(ctx, &mut actions);

        for action in actions {
            self.apply(action);
        }
    }

    fn render_view_switcher(&self, ui: &mut Ui, actions: &mut Vec<Action>) {
        ui.add_space(4.0);
        ui.columns(View::ALL.len(), |columns| {
            for (column, view) in columns.iter_mut().zip(View::ALL) {
                let selected = self.controller.current_view() == view;
                let fill = if selected {
                    Color32::from_rgb(85, 85, 85)
                } else {
                    theme::muted_color()
                };
                column.vertical_centered_justified(|ui| {
                    if choice_button(ui, view.title(), fill).clicked() {
                        actions.push(Action::SetView(view));
                    }
                });
            }
        });
        ui.add_space(4.0);
    }

    fn render_status_bar(&self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let color = if self.status_is_error {
                theme::danger_color()
            } else {
                theme::price_color()
            };
            ui.label(RichText::new(&self.status_message).color(color));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                        .small()
                        .color(Color32::GRAY),
                );
            });
        });
    }

    // Views

    fn render_home(&self, ui: &mut Ui) {
        render_title(ui, &self.config.restaurant_name);

        let stats = self.controller.stats();
        egui::Frame::none()
            .fill(theme::stats_fill())
            .rounding(8.0)
            .inner_margin(15.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(format!("Total Items: {}", stats.total_count)).size(16.0));
                for (course, _) in stats.courses() {
                    ui.label(
                        RichText::new(format!(
                            "Avg Price - {}: {}",
                            course,
                            self.config.format_price(&stats.average_label(course))
                        ))
                        .size(16.0),
                    );
                }
            });
        ui.add_space(20.0);

        if self.controller.catalog().is_empty() {
            render_empty(ui, "No items yet. Add dishes in Admin!");
        } else {
            for dish in self.controller.dishes() {
                self.render_dish_card(ui, dish, false);
            }
        }
    }

    fn render_admin(&self, ui: &mut Ui, actions: &mut Vec<Action>) {
        render_title(ui, "Chef Admin Panel");

        let draft = self.controller.draft();
        egui::Frame::none()
            .fill(Color32::WHITE)
            .rounding(10.0)
            .inner_margin(15.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new("Add New Dish").strong());
                ui.add_space(8.0);

                draft_input(ui, actions, draft.field(DraftField::DishName), DraftField::DishName, "Dish name");
                draft_input(
                    ui,
                    actions,
                    draft.field(DraftField::Description),
                    DraftField::Description,
                    "Description",
                );

                ui.label(RichText::new("Select Course:").strong());
                ui.horizontal(|ui| {
                    for course in Course::ALL {
                        let fill = if draft.course == course {
                            theme::accent_color()
                        } else {
                            theme::muted_color()
                        };
                        if choice_button(ui, &course.as_str().to_uppercase(), fill).clicked() {
                            actions.push(Action::SetDraftCourse(course));
                        }
                    }
                });
                ui.add_space(12.0);

                draft_input(ui, actions, draft.field(DraftField::Price), DraftField::Price, "Price (e.g., 129)");

                ui.add_space(10.0);
                ui.vertical_centered_justified(|ui| {
                    if choice_button(ui, "Add to Menu", theme::accent_color()).clicked() {
                        actions.push(Action::AddDish);
                    }
                });
            });
        ui.add_space(25.0);

        let dishes = self.controller.dishes();
        render_section_title(ui, &format!("Current Menu ({} items)", dishes.len()));
        if dishes.is_empty() {
            render_empty(ui, "No items added yet.");
        } else {
            for dish in dishes {
                if self.render_dish_card(ui, dish, true) {
                    actions.push(Action::RemoveDish(dish.id.clone()));
                }
            }
        }
    }

    fn render_filter(&self, ui: &mut Ui, actions: &mut Vec<Action>) {
        render_title(ui, "Filter Menu by Course");

        let selected = self.controller.selected_course();
        ui.horizontal_wrapped(|ui| {
            for course in Course::ALL {
                let fill = if selected == Some(course) {
                    theme::accent_color()
                } else {
                    theme::muted_color()
                };
                if choice_button(ui, &course.as_str().to_uppercase(), fill).clicked() {
                    actions.push(Action::SetFilter(Some(course)));
                }
            }

            let fill = if selected.is_none() {
                theme::accent_color()
            } else {
                theme::muted_color()
            };
            if choice_button(ui, "Show All", fill).clicked() {
                actions.push(Action::SetFilter(None));
            }
        });
        ui.add_space(12.0);

        let total = self.controller.catalog().len();
        render_section_title(ui, &filter::section_title(selected, total));

        let filtered = self.controller.filtered();
        if filtered.is_empty() {
            render_empty(ui, &filter::empty_message(selected));
        } else {
            for dish in filtered {
                self.render_dish_card(ui, dish, false);
            }
        }
    }

    /// Draw one dish. Returns true when its remove button was clicked.
    fn render_dish_card(&self, ui: &mut Ui, dish: &DishRecord, removable: bool) -> bool {
        let mut remove_clicked = false;

        egui::Frame::none()
            .fill(Color32::WHITE)
            .stroke(egui::Stroke::new(1.0, Color32::from_rgb(238, 238, 238)))
            .rounding(8.0)
            .inner_margin(15.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(&dish.dish_name).size(18.0).strong().color(Color32::BLACK));
                    ui.hyperlink_to("🖼 Image", &dish.image);
                    ui.label(RichText::new(&dish.description).color(Color32::from_rgb(85, 85, 85)));
                    ui.label(RichText::new(format!("Course: {}", dish.course)).strong());
                    ui.label(
                        RichText::new(format!("Price: {}", self.config.format_price(&dish.price)))
                            .size(16.0)
                            .strong()
                            .color(theme::price_color()),
                    );
                });

                if removable {
                    ui.add_space(10.0);
                    ui.vertical_centered_justified(|ui| {
                        remove_clicked = choice_button(ui, "Remove", theme::danger_color()).clicked();
                    });
                }
            });
        ui.add_space(6.0);

        remove_clicked
    }

    /// Modal-style alert for the last rejected dish.
    fn render_error_alert(&self, ctx: &egui::Context, actions: &mut Vec<Action>) {
        let Some(error) = self.controller.last_error() else {
            return;
        };

        egui::Window::new("Error")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(RichText::new(error.to_string()).color(theme::danger_color()));
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        actions.push(Action::DismissError);
                    }
                });
            });
    }

    // Actions

    fn apply(&mut self, action: Action) {
        match self.controller.dispatch(action) {
            Outcome::Added(dish) => {
                self.set_status(&format!("Added {} to the menu", dish.dish_name), false);
            }
            Outcome::Removed(dish) => {
                self.set_status(&format!("Removed {}", dish.dish_name), false);
            }
            Outcome::Rejected(e) => {
                self.set_status(&e.to_string(), true);
            }
            Outcome::Unchanged => {}
        }
    }

    fn set_status(&mut self, msg: &str, is_error: bool) {
        self.status_message = msg.to_string();
        self.status_is_error = is_error;
    }
}

fn render_title(ui: &mut Ui, title: &str) {
    ui.add_space(8.0);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(title)
                .size(24.0)
                .strong()
                .color(Color32::from_rgb(51, 51, 51)),
        );
    });
    ui.add_space(20.0);
}

fn render_section_title(ui: &mut Ui, title: &str) {
    ui.label(RichText::new(title).size(20.0).strong());
    ui.add_space(12.0);
}

fn render_empty(ui: &mut Ui, message: &str) {
    ui.add_space(20.0);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(message).italics().color(theme::muted_color()));
    });
}

/// Solid button with white text.
fn choice_button(ui: &mut Ui, label: &str, fill: Color32) -> egui::Response {
    ui.add(egui::Button::new(RichText::new(label).strong().color(Color32::WHITE)).fill(fill))
}

/// Text input bound to a draft field. Edits become [`Action::SetDraftField`].
fn draft_input(ui: &mut Ui, actions: &mut Vec<Action>, current: &str, field: DraftField, hint: &str) {
    let mut value = current.to_string();
    let edit = if field == DraftField::Description {
        TextEdit::multiline(&mut value).desired_rows(3)
    } else {
        TextEdit::singleline(&mut value)
    };

    let response = ui.add(edit.hint_text(hint).desired_width(f32::INFINITY));
    if response.changed() {
        actions.push(Action::SetDraftField(field, value));
    }
    ui.add_space(12.0);
}
