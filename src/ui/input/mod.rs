//! Canvas-Input: egui-Zeiger, Mausrad und Tastatur → AppIntent.
//!
//! Positionen werden relativ zur linken oberen Ecke der Zeichenfläche in
//! ganzen Pixeln gemeldet.

use super::keyboard;
use crate::app::{AppIntent, Modifiers, PointerButton};
use crate::core::{ScreenPos, ZoomDirection};

/// Zustand zwischen zwei Frames für Bewegungs-, Leave- und Größen-Erkennung.
#[derive(Debug, Default)]
pub struct CanvasInput {
    last_pointer: Option<ScreenPos>,
    inside: bool,
    last_size: Option<(u32, u32)>,
}

impl CanvasInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt die Canvas-Events dieses Frames.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let rect = response.rect;

        let size = (rect.width().round() as u32, rect.height().round() as u32);
        if self.last_size != Some(size) {
            self.last_size = Some(size);
            events.push(AppIntent::ViewportResized {
                width_px: size.0,
                height_px: size.1,
            });
        }

        let (latest, pressed, released, modifiers, scroll_y) = ui.input(|i| {
            let pressed = [
                (egui::PointerButton::Primary, PointerButton::Primary),
                (egui::PointerButton::Secondary, PointerButton::Secondary),
                (egui::PointerButton::Middle, PointerButton::Middle),
            ]
            .into_iter()
            .find(|(egui_button, _)| i.pointer.button_pressed(*egui_button))
            .map(|(_, button)| button);
            (
                i.pointer.latest_pos(),
                pressed,
                i.pointer.any_released(),
                Modifiers {
                    shift: i.modifiers.shift,
                    ctrl: i.modifiers.command,
                },
                i.raw_scroll_delta.y,
            )
        });

        let to_screen = |p: egui::Pos2| {
            ScreenPos::new(
                (p.x - rect.min.x).round() as i32,
                (p.y - rect.min.y).round() as i32,
            )
        };

        let inside = latest.is_some_and(|p| rect.contains(p));
        if let Some(pos) = latest.map(to_screen) {
            if self.last_pointer != Some(pos) {
                events.push(AppIntent::PointerMoved { pos });
                self.last_pointer = Some(pos);
            }
            if let Some(button) = pressed.filter(|_| inside) {
                events.push(AppIntent::PointerPressed {
                    pos,
                    button,
                    modifiers,
                });
            }
            if released {
                events.push(AppIntent::PointerReleased { pos });
            }
            if inside && scroll_y != 0.0 {
                // egui: nach oben scrollen = positives Delta = hineinzoomen
                events.push(AppIntent::WheelScrolled {
                    pos,
                    direction: ZoomDirection::from_wheel_delta(-scroll_y),
                });
            }
        }

        if self.inside && !inside {
            events.push(AppIntent::PointerLeft);
        }
        self.inside = inside;

        events.extend(keyboard::collect_keyboard_intents(ui));
        events
    }
}
