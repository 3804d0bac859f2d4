//! Small widgets shared by the pages.

use egui::{Color32, RichText, Ui};

use crate::practice::payload::DragPayload;
use crate::practice::selection::SelectionState;
use crate::ui::{dnd, theme};

/// The card background used all over the app.
pub fn card_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(theme::CARD_BG)
        .rounding(8.0)
        .inner_margin(egui::Margin::same(10.0))
        .stroke(egui::Stroke::new(1.0, Color32::from_rgb(229, 231, 235)))
}

/// Muted italic placeholder centered in its container.
pub fn centered_placeholder(ui: &mut Ui, text: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.label(RichText::new(text).italics().color(theme::MUTED_TEXT));
        ui.add_space(24.0);
    });
}

/// Terminal-style dark header bar with the three window dots.
pub fn window_header(ui: &mut Ui, title: &str) {
    egui::Frame::none()
        .fill(theme::HEADER_BG)
        .rounding(egui::Rounding {
            nw: 6.0,
            ne: 6.0,
            sw: 0.0,
            se: 0.0,
        })
        .inner_margin(egui::Margin::symmetric(8.0, 6.0))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                for color in [
                    Color32::from_rgb(239, 68, 68),
                    Color32::from_rgb(234, 179, 8),
                    Color32::from_rgb(34, 197, 94),
                ] {
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
                    ui.painter().circle_filled(rect.center(), 5.0, color);
                }
                ui.label(RichText::new(title).color(Color32::WHITE).monospace());
                ui.allocate_space(egui::vec2(ui.available_width(), 0.0));
            });
        });
}

/// Read-only, selectable copy of `text`. Returns the widget rect and the
/// currently selected substring, if the user has one.
pub fn selectable_copy(ui: &mut Ui, id: &str, text: &str) -> (egui::Rect, Option<String>) {
    let mut view: &str = text;
    let output = egui::TextEdit::multiline(&mut view)
        .id_source(id)
        .desired_rows(5)
        .desired_width(f32::INFINITY)
        .show(ui);

    let mut selected = None;
    if let Some(range) = output.cursor_range {
        let a = range.primary.ccursor.index;
        let b = range.secondary.ccursor.index;
        let (start, end) = (a.min(b), a.max(b));
        if start < end {
            selected = Some(text.chars().skip(start).take(end - start).collect());
        }
    }
    (output.response.rect, selected)
}

/// The draggable chip for the current free-text selection. Renders nothing
/// while the selection is empty.
pub fn selection_chip(ui: &mut Ui, selection: &SelectionState) -> Option<egui::Rect> {
    let text = selection.text()?;
    let inner = egui::Frame::none()
        .stroke(egui::Stroke::new(1.0, theme::SELECTION_BORDER))
        .rounding(6.0)
        .inner_margin(egui::Margin::same(6.0))
        .show(ui, |ui| {
            ui.label(
                RichText::new("可拖拽选中内容:")
                    .small()
                    .color(theme::MUTED_TEXT),
            );
            let payload = DragPayload::selected(text);
            dnd::drag_chip(ui, &payload, theme::SELECTION_BG, theme::BODY_TEXT);
        });
    Some(inner.response.rect)
}
