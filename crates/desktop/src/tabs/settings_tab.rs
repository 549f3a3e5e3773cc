use iced::widget::{button, column, container, row, text, text_input, Space};
use iced::{Element, Length, Theme};

use facewatch_core::recording::domain::recording_settings::RecordingSettings;

use crate::app::Message;
use crate::settings::SettingsForm;
use crate::theme::muted_color;

pub fn view<'a>(
    form: &'a SettingsForm,
    notice: Option<&'a str>,
    running: bool,
    theme: &Theme,
) -> Element<'a, Message> {
    let muted = muted_color(theme);
    let palette = theme.extended_palette();
    let danger = palette.danger.base.color;
    let success = palette.success.base.color;

    let applied = form.applied();
    let scope = if running {
        "Changes apply from the next frame."
    } else {
        "Changes apply when the webcam starts."
    };

    let mut col = column![
        text("Recording").size(16),
        Space::new().height(12),
        field(
            RecordingSettings::MIN_RECORD_FIELD,
            "Shorter clips are deleted once they end.",
            &form.min_record,
            Message::MinRecordChanged,
            muted,
        ),
        Space::new().height(10),
        field(
            RecordingSettings::STOP_DELAY_FIELD,
            "Seconds without a face before a clip ends.",
            &form.stop_delay,
            Message::StopDelayChanged,
            muted,
        ),
        Space::new().height(16),
        row![
            button(text("Update Settings").size(14))
                .padding([10, 20])
                .on_press_maybe(form.is_dirty().then_some(Message::ApplySettings)),
            text(scope).size(12).color(muted),
        ]
        .spacing(12)
        .align_y(iced::Alignment::Center),
        Space::new().height(8),
        text(format!(
            "Active: min record {}s, stop delay {}s",
            applied.min_record_secs(),
            applied.stop_delay_secs()
        ))
        .size(12)
        .color(muted),
    ]
    .spacing(0);

    if let Some(error) = form.error() {
        col = col
            .push(Space::new().height(8))
            .push(text(error).size(13).color(danger));
    } else if let Some(notice) = notice {
        col = col
            .push(Space::new().height(8))
            .push(text(notice).size(13).color(success));
    }

    col.into()
}

fn field<'a>(
    label: &'a str,
    hint: &'a str,
    value: &'a str,
    on_input: fn(String) -> Message,
    muted: iced::Color,
) -> Element<'a, Message> {
    let input = text_input("seconds", value)
        .on_input(on_input)
        .on_submit(Message::ApplySettings)
        .padding(8)
        .width(120);

    container(
        row![
            column![
                text(label.to_uppercase()).size(11).color(muted),
                text(hint).size(13),
            ]
            .spacing(4)
            .width(Length::Fill),
            input,
        ]
        .spacing(12)
        .align_y(iced::Alignment::Center),
    )
    .padding([14, 16])
    .style(container::rounded_box)
    .width(Length::Fill)
    .into()
}
