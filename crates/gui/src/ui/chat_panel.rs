use egui::Ui;

use crate::i18n::t;
use crate::state::AppState;
use crate::ui::chat_message;

pub fn show(ui: &mut Ui, state: &mut AppState) {
    // Header row with the new-conversation button
    ui.horizontal(|ui| {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if state.chat.messages.len() > 1
                && ui
                    .small_button(t("chat.new"))
                    .on_hover_text(t("chat.new_tip"))
                    .clicked()
            {
                state.chat.clear();
            }
        });
    });

    // Message history (scrollable, pinned to the newest message)
    let scroll_height = (ui.available_height() - 44.0).max(60.0);
    egui::ScrollArea::vertical()
        .id_salt("chat_scroll")
        .max_height(scroll_height)
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for msg in &state.chat.messages {
                ui.push_id(&msg.id, |ui| {
                    chat_message::show(ui, msg, &state.settings);
                });
                ui.add_space(8.0);
            }

            if state.chat.is_processing {
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.weak(t("chat.generating"));
                });
            }
        });

    // Input area
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        let available_w = ui.available_width() - 44.0;
        let input_resp = ui
            .add_enabled_ui(!state.chat.is_processing, |ui| {
                ui.add_sized(
                    [available_w.max(40.0), 26.0],
                    egui::TextEdit::singleline(&mut state.chat.input)
                        .hint_text(t("chat.placeholder"))
                        .desired_width(available_w.max(40.0)),
                )
            })
            .inner;

        let enter_pressed = input_resp.lost_focus()
            && ui.input(|i| i.key_pressed(egui::Key::Enter) && !i.modifiers.shift);
        let can_send = !state.chat.is_processing && !state.chat.input.trim().is_empty();

        let send_clicked = ui
            .add_enabled(can_send, egui::Button::new(">>"))
            .on_hover_text(t("chat.send_tip"))
            .clicked();

        if (send_clicked || enter_pressed) && can_send {
            state.chat.send_message();
            input_resp.request_focus();
        }
    });
}
