//! egui glue for drag sources and drop targets.
//!
//! Sources attach a [`DragPayload`] to the egui drag session when a drag
//! starts; targets read the in-flight payload, show the droppable affordance
//! only for allowlisted kinds, and hand the payload back on release.

use std::sync::Arc;

use egui::{Color32, CursorIcon, InnerResponse, Response, RichText, Sense, Ui};

use crate::practice::payload::{DragPayload, PayloadKind};
use crate::ui::theme::{self, DropAffordance};

/// The payload currently attached to the drag session, if any.
pub fn active_payload(ctx: &egui::Context) -> Option<Arc<DragPayload>> {
    egui::DragAndDrop::payload::<DragPayload>(ctx)
}

fn is_dragging(ctx: &egui::Context, payload: &DragPayload) -> bool {
    active_payload(ctx).is_some_and(|active| active.as_ref() == payload)
}

/// A draggable text chip. While a drag sourced from an identical payload is
/// active the chip renders faded, mirroring the reduced-opacity source.
pub fn drag_chip(ui: &mut Ui, payload: &DragPayload, fill: Color32, text_color: Color32) -> Response {
    let faded = is_dragging(ui.ctx(), payload);
    let (fill, text_color) = if faded {
        (fill.gamma_multiply(0.5), text_color.gamma_multiply(0.5))
    } else {
        (fill, text_color)
    };

    let response = egui::Frame::none()
        .fill(fill)
        .rounding(4.0)
        .inner_margin(egui::Margin::symmetric(4.0, 1.0))
        .show(ui, |ui| {
            ui.add(
                egui::Label::new(RichText::new(&payload.text).color(text_color))
                    .selectable(false)
                    .sense(Sense::click_and_drag()),
            )
        })
        .inner
        .on_hover_cursor(CursorIcon::Grab);

    if response.drag_started() {
        egui::DragAndDrop::set_payload(ui.ctx(), payload.clone());
    }
    response
}

/// A drop zone accepting the `accepts` payload kinds. Returns the inner
/// response plus the payload, when one of an allowed kind was released over
/// the zone this frame. Kinds outside the allowlist never light the zone up
/// and are never returned.
pub fn drop_target<R>(
    ui: &mut Ui,
    accepts: &[PayloadKind],
    add_contents: impl FnOnce(&mut Ui) -> R,
) -> (InnerResponse<R>, Option<DragPayload>) {
    let payload = active_payload(ui.ctx());
    let can_accept = payload
        .as_deref()
        .is_some_and(|p| accepts.contains(&p.kind));

    let mut frame = egui::Frame::none()
        .rounding(6.0)
        .inner_margin(egui::Margin::same(8.0))
        .begin(ui);
    let inner = add_contents(&mut frame.content_ui);
    let response = frame.allocate_space(ui);

    let affordance = if can_accept && response.contains_pointer() {
        DropAffordance::Hovered
    } else if can_accept {
        DropAffordance::CanDrop
    } else {
        DropAffordance::Idle
    };
    frame.frame.fill = theme::zone_fill(affordance);
    frame.frame.stroke = egui::Stroke::new(1.0, theme::zone_stroke(affordance));
    frame.paint(ui);

    let dropped = if affordance == DropAffordance::Hovered
        && ui.input(|i| i.pointer.any_released())
    {
        egui::DragAndDrop::clear_payload(ui.ctx());
        payload.map(|p| p.as_ref().clone())
    } else {
        None
    };

    (InnerResponse::new(inner, response), dropped)
}
