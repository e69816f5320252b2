use bevy::prelude::*;
use bevy_egui::egui::{DragValue, Slider};
use bevy_egui::{egui, EguiContexts};

use crate::{Sim, State};

#[derive(Resource, Debug, Clone, Default)]
pub struct UiState {
    pub selected_body: Option<usize>,
    pub info_visible: bool,
    settings_visible: bool,
}

pub fn render(
    mut ui_state: ResMut<UiState>,
    mut egui_context: EguiContexts,
    mut sim: ResMut<Sim>,
    mut state: ResMut<State>,
) {
    let ctx = egui_context.ctx_mut();

    egui::TopBottomPanel::top("Top").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Speed");

            // Typical range; the drag accepts any value, zero freezes and
            // negative reverses. Takes effect on the next frame.
            ui.add(Slider::new(&mut sim.0.speed, 0.1..=5.0).clamp_to_range(false));
            ui.label(format!("{:.1}x", sim.0.speed));

            ui.separator();

            if ui.button("Settings").clicked() {
                ui_state.settings_visible = !ui_state.settings_visible;
            }
        });
    });

    egui::Window::new("Settings")
        .open(&mut ui_state.settings_visible)
        .show(ctx, |ui| {
            ui.checkbox(&mut state.draw_orbits, "Draw orbits");

            if state.draw_orbits {
                ui.horizontal(|ui| {
                    ui.label("Orbit subdivisions");
                    ui.add(
                        DragValue::new(&mut state.orbit_subdivisions)
                            .speed(1)
                            .clamp_range(3..=1000),
                    );
                });
            }
        });

    if let Some(idx) = ui_state.selected_body {
        let body = sim.0.body(idx);
        let position = sim.0.position(idx);

        egui::Window::new(body.name.clone())
            .open(&mut ui_state.info_visible)
            .show(ctx, |ui| {
                ui.label(format!("Orbits: {}", body.center));
                ui.label(format!("Body radius: {}", body.sphere_radius));
                ui.label(format!("Semi-major axis: {}", body.orbit_radius_x));
                ui.label(format!("Semi-minor axis: {:.3}", body.orbit_radius_y()));
                ui.label(format!("Eccentricity: {}", body.eccentricity));

                ui.separator();

                ui.label(format!("Phase angle: {:.2} rad", body.angle));
                ui.label(format!(
                    "Position: ({:.2}, {:.2}, {:.2})",
                    position.x, position.y, position.z
                ));
            });
    }
}
