use iced::widget::{button, column, container, image, row, text, Space};
use iced::{Color, Element, Length, Theme};

use facewatch_core::recording::domain::recording_controller::RecorderStatus;

use crate::app::{CaptureState, Message, MonitorView};
use crate::theme::{muted_color, recording_color};

pub fn view<'a>(state: &'a MonitorView, theme: &Theme) -> Element<'a, Message> {
    let muted = muted_color(theme);
    let danger = theme.extended_palette().danger.base.color;

    let mut col = column![
        status_line(state, theme),
        Space::new().height(12),
        preview(state, muted),
        Space::new().height(12),
        controls(&state.capture),
    ]
    .spacing(0);

    if let Some(event) = &state.last_event {
        col = col
            .push(Space::new().height(12))
            .push(text(event.as_str()).size(13).color(muted));
    }

    if let Some(error) = &state.error {
        col = col
            .push(Space::new().height(12))
            .push(
                container(text(error.as_str()).size(13).color(danger))
                    .padding([10, 14])
                    .width(Length::Fill)
                    .style(container::rounded_box),
            );
    }

    col.into()
}

fn status_line<'a>(state: &'a MonitorView, theme: &Theme) -> Element<'a, Message> {
    let muted = muted_color(theme);
    let capture = match &state.capture {
        CaptureState::Off => "Camera off".to_string(),
        CaptureState::Preparing(None) => "Loading face model\u{2026}".to_string(),
        CaptureState::Preparing(Some((downloaded, total))) if *total > 0 => {
            let pct = (*downloaded as f64 / *total as f64 * 100.0) as u32;
            format!("Downloading face model: {pct}%")
        }
        CaptureState::Preparing(Some((downloaded, _))) => {
            format!("Downloading face model\u{2026} {downloaded} bytes")
        }
        CaptureState::Running { device, fps } => format!("{device} @ {fps:.0} fps"),
        CaptureState::Stopping => "Stopping\u{2026}".to_string(),
    };

    let recording = state.status == RecorderStatus::Recording;
    let dot = text("\u{25CF}")
        .size(16)
        .color(recording_color(theme, recording));

    row![
        dot,
        text(state.status.to_string()).size(15),
        text(format!("Faces: {}", state.faces)).size(13).color(muted),
        Space::new().width(Length::Fill),
        text(capture).size(13).color(muted),
    ]
    .spacing(10)
    .align_y(iced::Alignment::Center)
    .into()
}

fn preview<'a>(state: &'a MonitorView, muted: Color) -> Element<'a, Message> {
    let content: Element<'a, Message> = match &state.preview {
        Some(handle) => image(handle.clone()).width(Length::Fill).into(),
        None => text("No video").size(14).color(muted).into(),
    };

    container(content)
        .width(Length::Fill)
        .height(360)
        .center_x(Length::Fill)
        .center_y(360)
        .style(container::rounded_box)
        .into()
}

fn controls<'a>(capture: &CaptureState) -> Element<'a, Message> {
    let idle = *capture == CaptureState::Off;

    let start = button(text("Start Webcam").size(14))
        .padding([10, 20])
        .on_press_maybe(idle.then_some(Message::StartCapture));
    let stop = button(text("Stop Webcam").size(14))
        .padding([10, 20])
        .style(button::secondary)
        .on_press_maybe((!idle && *capture != CaptureState::Stopping).then_some(Message::StopCapture));
    let folder = button(text("Open Recordings Folder").size(14))
        .padding([10, 20])
        .style(button::text)
        .on_press(Message::OpenRecordingsFolder);

    row![start, stop, Space::new().width(Length::Fill), folder]
        .spacing(10)
        .align_y(iced::Alignment::Center)
        .into()
}
