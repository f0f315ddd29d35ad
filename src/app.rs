use iced::widget::{column, container};
use iced::{Length, Task};

use crate::application::{DownloadCoordinator, DownloadEvent};
use crate::ui::navbar::{Navbar, NavbarMessage};
use crate::ui::{DownloadForm, FormMessage};

pub struct DownloadApp {
    navbar: Navbar,
    form: DownloadForm,
    coordinator: DownloadCoordinator,
}

impl Default for DownloadApp {
    fn default() -> Self {
        Self::new()
    }
}

impl DownloadApp {
    pub fn new() -> Self {
        Self {
            navbar: Navbar::default(),
            form: DownloadForm::default(),
            coordinator: DownloadCoordinator::new(Default::default()),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Navbar(NavbarMessage),
    Form(FormMessage),
    Simulation(DownloadEvent),
}

pub fn update(app: &mut DownloadApp, message: Message) -> Task<Message> {
    match message {
        Message::Navbar(navbar_msg) => {
            app.navbar.update(navbar_msg);
        }
        Message::Form(form_msg) => {
            app.form.update(form_msg.clone());

            if let FormMessage::DownloadPressed = form_msg {
                if app.form.attempt.is_in_progress() {
                    return Task::none();
                }

                match app.form.attempt.submit() {
                    Ok(()) => {
                        let url = app.form.attempt.url().to_string();
                        log::info!("download accepted: {}", url.trim());

                        // The delay runs on the background tokio executor;
                        // its completion arrives as a Simulation message.
                        return Task::stream(app.coordinator.run(url)).map(Message::Simulation);
                    }
                    Err(error) => {
                        log::warn!("download rejected: {error}");
                    }
                }
            }
        }
        Message::Simulation(DownloadEvent::Completed) => {
            app.form.attempt.complete();
            log::info!("simulated download finished");
        }
    }
    Task::none()
}

pub fn view(app: &DownloadApp) -> iced::Element<'_, Message> {
    column![
        app.navbar.view().map(Message::Navbar),
        container(app.form.view().map(Message::Form))
            .max_width(560)
            .center_x(Length::Fill),
    ]
    .into()
}
