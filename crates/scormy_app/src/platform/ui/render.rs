use std::time::Instant;

use eframe::egui::{self, Color32, RichText, ScrollArea};
use scormy_core::{ChatViewModel, MessageView, Msg, OptionView, Origin};

use super::constants::*;
use super::typewriter::Typewriter;

const ACCENT: Color32 = Color32::from_rgb(0x22, 0xC5, 0x5E);

/// Draws the chat widget and returns the gestures it received this frame.
pub fn show_chat(
    ctx: &egui::Context,
    view: &ChatViewModel,
    typewriter: &mut Typewriter,
    now: Instant,
) -> Vec<Msg> {
    let mut msgs = Vec::new();

    if view.collapsed {
        egui::Area::new(egui::Id::new("scormy_reopen"))
            .anchor(egui::Align2::RIGHT_BOTTOM, [-CHAT_MARGIN, -CHAT_MARGIN])
            .show(ctx, |ui| {
                let button =
                    egui::Button::new(RichText::new("Open SCORMy").color(Color32::WHITE)).fill(ACCENT);
                if ui.add(button).clicked() {
                    msgs.push(Msg::CollapseToggled);
                }
            });
        return msgs;
    }

    egui::Window::new("Chat with SCORMy")
        .id(egui::Id::new("scormy_chat"))
        .title_bar(false)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::RIGHT_BOTTOM, [-CHAT_MARGIN, -CHAT_MARGIN])
        .show(ctx, |ui| {
            ui.set_width(CHAT_WIDTH);
            header(ui, &mut msgs);
            ui.separator();
            transcript(ui, &view.messages, typewriter, now);
            options(ui, &view.options, &mut msgs);
            ui.separator();
            input(ui, &view.draft, view.can_send, &mut msgs);
        });

    msgs
}

fn header(ui: &mut egui::Ui, msgs: &mut Vec<Msg>) {
    ui.horizontal(|ui| {
        ui.strong("Chat with SCORMy");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("✕").on_hover_text("Close chat").clicked() {
                msgs.push(Msg::CollapseToggled);
            }
        });
    });
}

fn transcript(
    ui: &mut egui::Ui,
    messages: &[MessageView],
    typewriter: &mut Typewriter,
    now: Instant,
) {
    let dark = ui.visuals().dark_mode;
    ScrollArea::vertical()
        .id_salt("chat_transcript")
        .max_height(CHAT_TRANSCRIPT_HEIGHT)
        .stick_to_bottom(true)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            for message in messages {
                let text = if message.progressive_reveal {
                    let (shown, done) = typewriter.visible(&message.text, now);
                    if done {
                        shown.to_string()
                    } else {
                        ui.ctx().request_repaint_after(TYPE_SPEED);
                        format!("{shown}|")
                    }
                } else {
                    message.text.clone()
                };

                let (fill, color) = bubble_colors(message.origin, dark);
                egui::Frame::new()
                    .fill(fill)
                    .corner_radius(egui::CornerRadius::same(4))
                    .inner_margin(egui::Margin::same(8))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(RichText::new(text).color(color));
                    });
                ui.add_space(4.0);
            }
        });
}

fn options(ui: &mut egui::Ui, options: &[OptionView], msgs: &mut Vec<Msg>) {
    for option in options {
        let button = egui::Button::new(&option.label).fill(ACCENT.gamma_multiply(0.25));
        if ui.add_sized([ui.available_width(), 24.0], button).clicked() {
            msgs.push(Msg::OptionSelected(option.index));
        }
    }
}

fn input(ui: &mut egui::Ui, draft: &str, can_send: bool, msgs: &mut Vec<Msg>) {
    let mut text = draft.to_string();
    let mut trigger = None;
    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut text)
                .desired_width(CHAT_WIDTH - 70.0)
                .hint_text("Type your message..."),
        );
        if response.changed() {
            msgs.push(Msg::DraftChanged(text.clone()));
        }
        let enter_pressed =
            response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let send = egui::Button::new(RichText::new("Send").color(Color32::WHITE)).fill(ACCENT);
        let clicked = ui.add_enabled(can_send, send).clicked();

        trigger = send_trigger(enter_pressed, clicked, can_send);
        // Enter drops focus from a singleline edit; keep typing without a click.
        if trigger == Some(SendTrigger::Enter) {
            response.request_focus();
        }
    });
    if trigger.is_some() {
        msgs.push(Msg::SendClicked);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SendTrigger {
    Enter,
    Button,
}

/// Enter always submits (blank drafts are ignored by the engine); the
/// button only counts while there is something to send.
fn send_trigger(
    enter_pressed: bool,
    button_clicked: bool,
    can_send: bool,
) -> Option<SendTrigger> {
    if enter_pressed {
        Some(SendTrigger::Enter)
    } else if button_clicked && can_send {
        Some(SendTrigger::Button)
    } else {
        None
    }
}

fn bubble_colors(origin: Origin, dark: bool) -> (Color32, Color32) {
    match (origin, dark) {
        (Origin::Bot, false) => (
            Color32::from_rgb(0xDC, 0xFC, 0xE7),
            Color32::from_rgb(0x16, 0x65, 0x34),
        ),
        (Origin::Bot, true) => (
            Color32::from_rgb(0x14, 0x53, 0x2D),
            Color32::from_rgb(0xBB, 0xF7, 0xD0),
        ),
        (Origin::User, false) => (
            Color32::from_rgb(0xF3, 0xF4, 0xF6),
            Color32::from_rgb(0x1F, 0x29, 0x37),
        ),
        (Origin::User, true) => (
            Color32::from_rgb(0x37, 0x41, 0x51),
            Color32::from_rgb(0xE5, 0xE7, 0xEB),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_submits_and_asks_for_refocus() {
        assert_eq!(send_trigger(true, false, true), Some(SendTrigger::Enter));
        assert_eq!(send_trigger(true, false, false), Some(SendTrigger::Enter));
    }

    #[test]
    fn button_needs_a_non_blank_draft() {
        assert_eq!(send_trigger(false, true, true), Some(SendTrigger::Button));
        assert_eq!(send_trigger(false, true, false), None);
        assert_eq!(send_trigger(false, false, true), None);
    }

    #[test]
    fn send_button_follows_view_model() {
        let state = scormy_core::ChatState::new();
        assert!(!state.view().can_send);

        let (state, _) = scormy_core::update(state, Msg::DraftChanged("hi".to_string()));
        let view = state.view();
        assert!(view.can_send);
        assert_eq!(send_trigger(false, true, view.can_send), Some(SendTrigger::Button));
    }
}
