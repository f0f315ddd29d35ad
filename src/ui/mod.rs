pub mod navbar;

use iced::{
    widget::{button, column, horizontal_rule, row, text, text_editor, Space},
    Element, Length,
};

use crate::domain::{DownloadAttempt, DownloadStatus};

const FEATURES: [&str; 4] = [
    "High quality MP3",
    "Fast downloads",
    "Audio only",
    "Easy access",
];

/// Main form state: the URL being edited and the attempt it drives.
pub struct DownloadForm {
    url_input: text_editor::Content,
    pub attempt: DownloadAttempt,
}

impl Default for DownloadForm {
    fn default() -> Self {
        Self {
            url_input: text_editor::Content::new(),
            attempt: DownloadAttempt::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum FormMessage {
    UrlEdited(text_editor::Action),
    DownloadPressed,
}

impl DownloadForm {
    pub fn update(&mut self, message: FormMessage) {
        match message {
            FormMessage::UrlEdited(action) => {
                // Cursor motion and selection are not edits and must not
                // touch the status.
                let edited = action.is_edit();
                self.url_input.perform(action);
                if edited {
                    self.attempt.edit(self.url_input.text());
                }
            }
            FormMessage::DownloadPressed => {
                // Handled by the app
            }
        }
    }

    pub fn view(&self) -> Element<'_, FormMessage> {
        let downloading = self.attempt.is_in_progress();

        let mut url_input = text_editor(&self.url_input)
            .placeholder("https://www.youtube.com/watch?v=...")
            .height(Length::Fixed(96.0))
            .padding(10);
        if !downloading {
            url_input = url_input.on_action(FormMessage::UrlEdited);
        }

        let download_button = button(
            text(if downloading {
                "Downloading..."
            } else {
                "Download as MP3"
            })
            .size(16),
        )
        .on_press_maybe((!downloading).then_some(FormMessage::DownloadPressed))
        .padding([10, 20]);

        let mut form = column![
            text("Video Downloader").size(32),
            text("Download YouTube videos as MP3").size(16),
            Space::new().height(Length::Fixed(20.0)),
            text("YouTube video URL:").size(16),
            url_input,
            Space::new().height(Length::Fixed(10.0)),
            download_button,
        ]
        .spacing(10);

        if !self.attempt.message().is_empty() {
            form = form.push(self.status_banner());
        }

        form = form
            .push(Space::new().height(Length::Fixed(20.0)))
            .push(horizontal_rule(1))
            .push(feature_list())
            .push(Space::new().height(Length::Fixed(20.0)))
            .push(
                text("Make sure you have permission before downloading copyrighted content.")
                    .size(12),
            );

        form.padding(20).into()
    }

    fn status_banner(&self) -> Element<'_, FormMessage> {
        let banner = text(self.attempt.message()).size(14);

        match self.attempt.status() {
            DownloadStatus::InProgress => banner.style(text::primary),
            DownloadStatus::Success => banner.style(text::success),
            DownloadStatus::Error => banner.style(text::danger),
            DownloadStatus::Idle => banner,
        }
        .into()
    }
}

fn feature_list() -> Element<'static, FormMessage> {
    let mut list = column![text("Features").size(18)].spacing(8);

    for feature in FEATURES {
        list = list.push(row![text("\u{2022}").size(14), text(feature).size(14)].spacing(8));
    }

    list.into()
}
