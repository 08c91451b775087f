//! Create-quote screen flow.
//!
//! The media URL can only be set by a successful upload, so "ready to submit"
//! always means the image actually reached the media service.

use tracing::{debug, warn};

use super::{FlowContext, Redirect, Screen, ViewCell, CREATE_REDIRECT_DELAY};
use crate::api::QuoteApi;
use crate::error::{Error, ValidationError};
use crate::notify::Notifier;
use crate::session::SessionStore;
use crate::upload::PendingUpload;

/// Which remote call, if any, the screen is waiting on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CreateQuotePhase {
    #[default]
    Idle,
    UploadingImage,
    Submitting,
    Done,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CreateQuoteEvent {
    UploadStarted,
    UploadFinished,
    SubmitStarted,
    SubmitSucceeded,
    SubmitFailed,
}

pub const fn transition_create_quote_phase(
    phase: CreateQuotePhase,
    event: CreateQuoteEvent,
) -> CreateQuotePhase {
    match (phase, event) {
        (CreateQuotePhase::Idle, CreateQuoteEvent::UploadStarted) => {
            CreateQuotePhase::UploadingImage
        }
        (CreateQuotePhase::UploadingImage, CreateQuoteEvent::UploadFinished)
        | (CreateQuotePhase::Submitting, CreateQuoteEvent::SubmitFailed) => CreateQuotePhase::Idle,
        (CreateQuotePhase::Idle, CreateQuoteEvent::SubmitStarted) => CreateQuotePhase::Submitting,
        (CreateQuotePhase::Submitting, CreateQuoteEvent::SubmitSucceeded) => {
            CreateQuotePhase::Done
        }
        _ => phase,
    }
}

/// User-visible state of the screen, derived from phase and inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CreateQuoteState {
    Editing,
    UploadingImage,
    ReadyToSubmit,
    Submitting,
    Done,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CreateQuoteModel {
    pub text: String,
    media_url: Option<String>,
    pub image_error: Option<String>,
    pub phase: CreateQuotePhase,
}

impl CreateQuoteModel {
    pub fn media_url(&self) -> Option<&str> {
        self.media_url.as_deref()
    }

    pub fn state(&self) -> CreateQuoteState {
        match self.phase {
            CreateQuotePhase::UploadingImage => CreateQuoteState::UploadingImage,
            CreateQuotePhase::Submitting => CreateQuoteState::Submitting,
            CreateQuotePhase::Done => CreateQuoteState::Done,
            CreateQuotePhase::Idle if self.has_text() && self.media_url.is_some() => {
                CreateQuoteState::ReadyToSubmit
            }
            CreateQuotePhase::Idle => CreateQuoteState::Editing,
        }
    }

    pub fn can_submit(&self) -> bool {
        self.state() == CreateQuoteState::ReadyToSubmit
    }

    /// Spinner overlay: shown while a call is in flight and until the redirect.
    pub fn shows_overlay(&self) -> bool {
        self.phase != CreateQuotePhase::Idle
    }

    fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

/// Validate the picked file and upload it.
///
/// A rejected file never reaches the media service: the previous URL is
/// dropped, the inline error is set and the user is notified. Anonymous
/// sessions get [`Error::SignInRequired`] before the file is looked at.
pub async fn attach_image<A, S, N>(
    ctx: &FlowContext<A, S, N>,
    model: &impl ViewCell<CreateQuoteModel>,
    file: PendingUpload,
) -> Result<String, Error>
where
    A: QuoteApi,
    S: SessionStore,
    N: Notifier,
{
    ctx.require_session().map_err(Error::SignInRequired)?;

    if model.read_with(|model| model.phase != CreateQuotePhase::Idle) {
        return Err(ValidationError::Busy.into());
    }

    let image = match file.validate() {
        Ok(image) => image,
        Err(error) => {
            debug!("Rejected attachment: {error:?}");
            let message = error.to_string();
            model.update(|model| {
                model.media_url = None;
                model.image_error = Some(message.clone());
            });
            ctx.notifier.error(message);
            return Err(error.into());
        }
    };

    model.update(|model| {
        model.image_error = None;
        model.phase = transition_create_quote_phase(model.phase, CreateQuoteEvent::UploadStarted);
    });

    let result = ctx.api.upload_media(&image).await;
    model.update(|model| {
        model.media_url = result.as_ref().ok().cloned();
        model.phase = transition_create_quote_phase(model.phase, CreateQuoteEvent::UploadFinished);
    });

    match result {
        Ok(url) => {
            debug!(%url, "Image uploaded");
            ctx.notifier.success("Image uploaded successfully!");
            Ok(url)
        }
        Err(error) => {
            warn!("Image upload failed: {error}");
            ctx.notifier.error("Image upload failed. Please try again.");
            Err(error.into())
        }
    }
}

/// Post the quote with the uploaded image.
///
/// Anonymous sessions are sent to the login screen without any call.
pub async fn submit_quote<A, S, N>(
    ctx: &FlowContext<A, S, N>,
    model: &impl ViewCell<CreateQuoteModel>,
) -> Result<Redirect, Error>
where
    A: QuoteApi,
    S: SessionStore,
    N: Notifier,
{
    let credentials = match ctx.require_session() {
        Ok(credentials) => credentials,
        Err(redirect) => return Ok(redirect),
    };

    let (text, media_url) = model.update(|model| {
        if model.phase != CreateQuotePhase::Idle {
            return Err(ValidationError::Busy);
        }
        if !model.has_text() {
            return Err(ValidationError::EmptyQuoteText);
        }
        let Some(media_url) = model.media_url.clone() else {
            return Err(ValidationError::MissingMedia);
        };
        model.phase = transition_create_quote_phase(model.phase, CreateQuoteEvent::SubmitStarted);
        Ok((model.text.clone(), media_url))
    })?;

    debug!(username = %credentials.username, "Submitting quote");
    match ctx
        .api
        .submit_quote(&credentials.token, &text, &media_url)
        .await
    {
        Ok(_) => {
            model.update(|model| {
                model.phase =
                    transition_create_quote_phase(model.phase, CreateQuoteEvent::SubmitSucceeded);
            });
            ctx.notifier.success("Quote created successfully!");
            Ok(Redirect::after(Screen::Feed, CREATE_REDIRECT_DELAY))
        }
        Err(error) => {
            warn!("Quote submission failed: {error}");
            model.update(|model| {
                model.phase =
                    transition_create_quote_phase(model.phase, CreateQuoteEvent::SubmitFailed);
            });
            ctx.notifier.error("Quote creation failed. Please try again.");
            Err(error.into())
        }
    }
}
