use std::path::PathBuf;
use std::sync::Arc;

use iced::widget::image::Handle;
use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Element, Length, Subscription, Task, Theme};

use facewatch_core::pipeline::frame_loop::StopReason;
use facewatch_core::recording::domain::recording_controller::RecorderStatus;
use facewatch_core::shared::constants::{DETECTION_LOG_FILE, FRAME_POLL_INTERVAL, RECORDINGS_DIR};
use facewatch_core::video::domain::video_source::CaptureDevice;

use crate::settings::SettingsForm;
use crate::tabs;
use crate::theme;
use crate::workers::model_cache::ModelCache;
use crate::workers::monitor_worker::{self, MonitorHandle, MonitorMessage, MonitorParams};

// ---------------------------------------------------------------------------
// Tab enum
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Monitor,
    Settings,
}

impl Tab {
    const ALL: &[Tab] = &[Tab::Monitor, Tab::Settings];

    fn label(self) -> &'static str {
        match self {
            Tab::Monitor => "Monitor",
            Tab::Settings => "Settings",
        }
    }
}

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(Tab),
    StartCapture,
    StopCapture,
    MinRecordChanged(String),
    StopDelayChanged(String),
    ApplySettings,
    OpenRecordingsFolder,
    Tick,
}

/// What the monitor worker is doing, as far as the UI knows.
#[derive(Debug, Clone, PartialEq)]
pub enum CaptureState {
    Off,
    /// Waiting for the face model; carries download progress once known.
    Preparing(Option<(u64, u64)>),
    Running { device: String, fps: f64 },
    Stopping,
}

/// Everything the monitor tab renders.
pub struct MonitorView {
    pub capture: CaptureState,
    pub status: RecorderStatus,
    pub faces: usize,
    pub preview: Option<Handle>,
    pub last_event: Option<String>,
    pub error: Option<String>,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    active_tab: Tab,
    settings: SettingsForm,
    settings_notice: Option<String>,
    model_cache: Arc<ModelCache>,
    device: CaptureDevice,
    monitor: Option<MonitorHandle>,
    view_state: MonitorView,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        (
            Self {
                active_tab: Tab::Monitor,
                settings: SettingsForm::default(),
                settings_notice: None,
                model_cache: ModelCache::new(),
                device: CaptureDevice::default_camera(),
                monitor: None,
                view_state: MonitorView {
                    capture: CaptureState::Off,
                    status: RecorderStatus::Idle,
                    faces: 0,
                    preview: None,
                    last_event: None,
                    error: None,
                },
            },
            Task::none(),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TabSelected(tab) => {
                self.active_tab = tab;
            }
            Message::StartCapture => {
                // A previous worker may still be releasing the device.
                if self.monitor.is_some() {
                    return Task::none();
                }
                log::info!("Starting capture on {}", self.device);
                self.view_state.error = None;
                self.view_state.capture = CaptureState::Preparing(None);
                self.monitor = Some(monitor_worker::spawn(MonitorParams {
                    device: self.device.clone(),
                    settings: self.settings.applied(),
                    clip_dir: PathBuf::from(RECORDINGS_DIR),
                    log_path: PathBuf::from(DETECTION_LOG_FILE),
                    model_cache: self.model_cache.clone(),
                }));
            }
            Message::StopCapture => {
                if let Some(monitor) = &self.monitor {
                    monitor.stop();
                    self.view_state.capture = CaptureState::Stopping;
                }
            }
            Message::MinRecordChanged(value) => {
                self.settings.min_record = value;
                self.settings_notice = None;
            }
            Message::StopDelayChanged(value) => {
                self.settings.stop_delay = value;
                self.settings_notice = None;
            }
            Message::ApplySettings => match self.settings.apply() {
                Ok(settings) => {
                    if let Some(monitor) = &self.monitor {
                        monitor.update_settings(settings);
                    }
                    self.settings_notice = Some(format!(
                        "Applied: min record {}s, stop delay {}s",
                        settings.min_record_secs(),
                        settings.stop_delay_secs()
                    ));
                }
                Err(e) => {
                    log::warn!("Rejected settings: {e}");
                    self.settings_notice = None;
                }
            },
            Message::OpenRecordingsFolder => {
                if let Err(e) = std::fs::create_dir_all(RECORDINGS_DIR)
                    .and_then(|()| open::that(RECORDINGS_DIR))
                {
                    log::warn!("Cannot open {RECORDINGS_DIR}: {e}");
                    self.view_state.error = Some(format!("Cannot open recordings folder: {e}"));
                }
            }
            Message::Tick => self.poll_monitor(),
        }
        Task::none()
    }

    fn poll_monitor(&mut self) {
        let Some(monitor) = &self.monitor else {
            return;
        };
        let (messages, disconnected) = monitor.drain();
        let mut finished = disconnected;

        for message in messages {
            match message {
                MonitorMessage::ModelProgress(downloaded, total) => {
                    if matches!(self.view_state.capture, CaptureState::Preparing(_)) {
                        self.view_state.capture =
                            CaptureState::Preparing(Some((downloaded, total)));
                    }
                }
                MonitorMessage::Started { device, fps } => {
                    if self.view_state.capture != CaptureState::Stopping {
                        self.view_state.capture = CaptureState::Running { device, fps };
                    }
                }
                MonitorMessage::Frame(frame) => {
                    self.view_state.status = frame.status;
                    self.view_state.faces = frame.faces;
                    self.view_state.preview =
                        Some(Handle::from_rgba(frame.width, frame.height, frame.rgba));
                }
                MonitorMessage::Clip(event) => {
                    self.view_state.last_event = Some(event.to_string());
                }
                MonitorMessage::Error(e) => {
                    self.view_state.error = Some(e);
                    finished = true;
                }
                MonitorMessage::Stopped(reason) => {
                    if let StopReason::SourceFailed(e) = &reason {
                        self.view_state.error = Some(format!("Camera stopped: {e}"));
                    } else if reason == StopReason::SourceEnded {
                        self.view_state.error = Some("Camera stream ended".into());
                    }
                    finished = true;
                }
            }
        }

        if finished {
            self.monitor = None;
            self.view_state.capture = CaptureState::Off;
            self.view_state.status = RecorderStatus::Idle;
            self.view_state.faces = 0;
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let tab_bar = row(Tab::ALL
            .iter()
            .map(|&tab| {
                let btn = button(text(tab.label()).size(13))
                    .on_press(Message::TabSelected(tab))
                    .padding([6, 14]);
                if tab == self.active_tab {
                    btn.style(button::primary).into()
                } else {
                    btn.style(button::text).into()
                }
            })
            .collect::<Vec<_>>())
        .spacing(2);

        let theme = self.theme();
        let content: Element<'_, Message> = match self.active_tab {
            Tab::Monitor => tabs::monitor_tab::view(&self.view_state, &theme),
            Tab::Settings => tabs::settings_tab::view(
                &self.settings,
                self.settings_notice.as_deref(),
                self.monitor.is_some(),
                &theme,
            ),
        };

        let tab_content = container(scrollable(content).height(Length::Fill))
            .padding(16)
            .height(Length::Fill);

        column![tab_bar, tab_content]
            .spacing(0)
            .height(Length::Fill)
            .into()
    }

    pub fn theme(&self) -> Theme {
        theme::app_theme()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.monitor.is_some() {
            iced::time::every(FRAME_POLL_INTERVAL).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }
}
