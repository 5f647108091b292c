//! Survey filter controls
//!
//! Each widget reads the current criteria and returns the edits the user
//! made this frame. None of them mutate the criteria directly.

use crate::data::{FacilityGroups, SurveyStatus};
use crate::state::{FilterEvent, ResolutionBin};
use egui::Ui;
use std::collections::BTreeSet;

/// One checkbox per survey status
pub struct StatusFilter<'a> {
    statuses: &'a BTreeSet<SurveyStatus>,
}

impl<'a> StatusFilter<'a> {
    pub fn new(statuses: &'a BTreeSet<SurveyStatus>) -> Self {
        Self { statuses }
    }

    pub fn show(self, ui: &mut Ui) -> Vec<FilterEvent> {
        let mut events = Vec::new();
        ui.vertical(|ui| {
            ui.strong("Survey status");
            for status in SurveyStatus::ALL {
                let mut on = self.statuses.contains(&status);
                if ui.checkbox(&mut on, status.label()).changed() {
                    events.push(FilterEvent::SetStatus(status, on));
                }
            }
        });
        events
    }
}

/// Searchable facility picker, split into space- and ground-based groups
pub struct FacilityPicker<'a> {
    selected: &'a BTreeSet<String>,
    groups: &'a FacilityGroups,
    search: &'a mut String,
}

impl<'a> FacilityPicker<'a> {
    pub fn new(
        selected: &'a BTreeSet<String>,
        groups: &'a FacilityGroups,
        search: &'a mut String,
    ) -> Self {
        Self {
            selected,
            groups,
            search,
        }
    }

    pub fn show(self, ui: &mut Ui) -> Vec<FilterEvent> {
        let mut events = Vec::new();

        ui.vertical(|ui| {
            ui.strong("Limit to specific facilities/telescopes");
            ui.horizontal(|ui| {
                ui.label("🔍");
                ui.add(
                    egui::TextEdit::singleline(&mut *self.search)
                        .hint_text("Pick facilities")
                        .desired_width(180.0),
                );
                if ui.small_button("✖").on_hover_text("Clear search").clicked() {
                    self.search.clear();
                }
            });

            if !self.selected.is_empty() {
                ui.horizontal_wrapped(|ui| {
                    for facility in self.selected {
                        if ui
                            .small_button(format!("{} ✖", facility))
                            .on_hover_text("Remove")
                            .clicked()
                        {
                            events.push(FilterEvent::SetFacility(facility.clone(), false));
                        }
                    }
                });
                if ui.button("Show all facilities").clicked() {
                    events.push(FilterEvent::ClearFacilities);
                }
            }

            ui.separator();

            let space = matching_facilities(&self.groups.space_based, self.search.as_str());
            let ground = matching_facilities(&self.groups.ground_based, self.search.as_str());
            if space.is_empty() && ground.is_empty() {
                ui.label("No options found");
                return;
            }

            egui::ScrollArea::vertical().max_height(240.0).show(ui, |ui| {
                for (title, names) in [("Space-based", space), ("Ground-based", ground)] {
                    if names.is_empty() {
                        continue;
                    }
                    ui.label(egui::RichText::new(title).italics());
                    for name in names {
                        let mut on = self.selected.contains(name);
                        if ui.checkbox(&mut on, name).changed() {
                            events.push(FilterEvent::SetFacility(name.to_string(), on));
                        }
                    }
                }
            });
        });

        events
    }
}

/// Names containing `query`, ignoring case; an empty query matches all
pub fn matching_facilities<'a>(names: &'a [String], query: &str) -> Vec<&'a str> {
    let query = query.trim().to_lowercase();
    names
        .iter()
        .map(String::as_str)
        .filter(|name| query.is_empty() || name.to_lowercase().contains(&query))
        .collect()
}

/// One checkbox per spectral resolution bin
pub struct ResolutionFilter<'a> {
    bins: &'a BTreeSet<ResolutionBin>,
}

impl<'a> ResolutionFilter<'a> {
    pub fn new(bins: &'a BTreeSet<ResolutionBin>) -> Self {
        Self { bins }
    }

    pub fn show(self, ui: &mut Ui) -> Vec<FilterEvent> {
        let mut events = Vec::new();
        ui.vertical(|ui| {
            ui.strong("Spectral resolution");
            for bin in ResolutionBin::ALL {
                let mut on = self.bins.contains(&bin);
                if ui.checkbox(&mut on, bin.label()).changed() {
                    events.push(FilterEvent::SetResolutionBin(bin, on));
                }
            }
            if self.bins.is_empty() {
                ui.weak("No bin selected: all resolutions shown");
            }
        });
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_facilities() {
        let names: Vec<String> = ["Mayall", "Subaru", "VLT", "WHT"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(matching_facilities(&names, ""), vec!["Mayall", "Subaru", "VLT", "WHT"]);
        assert_eq!(matching_facilities(&names, "  vl "), vec!["VLT"]);
        assert_eq!(matching_facilities(&names, "A"), vec!["Mayall", "Subaru"]);
        assert!(matching_facilities(&names, "keck").is_empty());
    }
}
