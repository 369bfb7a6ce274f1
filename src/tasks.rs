//! Background work: file fetches, image conversion and the about panel.
//!
//! Each request runs on its own tokio task and reports a [`Completion`]
//! through an mpsc channel back to the event loop.

use tokio::sync::mpsc;

use crate::app::{mode_name, Completion, Request};
use crate::ascii::{AsciiConverter, RemoteImageDecoder};
use crate::client::PortfolioClient;
use crate::config::{AboutConfig, AsciiConfig};
use crate::shell::{Action, ImageMode};
use crate::terminal::AboutPanel;

/// Shown when the about text cannot be fetched.
pub const ABOUT_MISSING: &str = "[about.txt not found]";

/// Shown when the contacts text cannot be fetched.
pub const CONTACTS_MISSING: &str = "[contacts.txt not found]";

/// Everything a background task needs. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Services {
    client: PortfolioClient,
    converter: AsciiConverter,
    ascii: AsciiConfig,
    about: AboutConfig,
}

impl Services {
    pub fn new(client: PortfolioClient, ascii: AsciiConfig, about: AboutConfig) -> Self {
        Self {
            converter: AsciiConverter::new(ascii.timeout()),
            client,
            ascii,
            about,
        }
    }

    /// Run a request to completion. Never fails; errors are carried in
    /// the completion.
    pub async fn perform(&self, request: Request) -> Completion {
        let id = request.id;
        match request.action {
            Action::LoadText { name, path } => {
                let result = self
                    .client
                    .fetch_text(&path)
                    .await
                    .map_err(|e| e.to_string());
                Completion::Text {
                    request: id,
                    name,
                    result,
                }
            }
            Action::ShowImage { name, path, mode } => {
                log::info!("Opening {} as {} image", path, mode_name(mode));
                let decoder = RemoteImageDecoder::new(self.client.clone());
                let (width, height) = (self.ascii.image_width, self.ascii.image_height);
                match mode {
                    ImageMode::Ascii => Completion::Ascii {
                        request: id,
                        name,
                        art: self.converter.convert(&decoder, &path, width, height).await,
                    },
                    ImageMode::Raw => Completion::Raw {
                        request: id,
                        name,
                        result: self
                            .converter
                            .convert_raw(&decoder, &path, width, height)
                            .await,
                    },
                }
            }
            Action::ShowAbout => Completion::About {
                request: id,
                panel: self.about_panel().await,
            },
        }
    }

    /// Load the face art and both texts concurrently.
    pub async fn about_panel(&self) -> AboutPanel {
        let decoder = RemoteImageDecoder::new(self.client.clone());
        let (art, about, contacts) = tokio::join!(
            self.converter.convert(
                &decoder,
                &self.about.image,
                self.about.image_width,
                self.about.image_height,
            ),
            self.client.fetch_text(&self.about.text),
            self.client.fetch_text(&self.about.contacts),
        );

        AboutPanel {
            art,
            about: about.unwrap_or_else(|e| {
                log::warn!("About text unavailable: {}", e);
                ABOUT_MISSING.to_string()
            }),
            contacts: contacts.unwrap_or_else(|e| {
                log::warn!("Contacts text unavailable: {}", e);
                CONTACTS_MISSING.to_string()
            }),
        }
    }
}

/// Run `request` on a tokio task and send the result to `tx`.
pub fn spawn_request(request: Request, services: &Services, tx: mpsc::Sender<Completion>) {
    let services = services.clone();
    tokio::spawn(async move {
        let completion = services.perform(request).await;
        if tx.send(completion).await.is_err() {
            log::debug!("Event loop closed before a result was delivered");
        }
    });
}
