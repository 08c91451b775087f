//! Create-quote view

use crafto_core::flows::create_quote::{
    attach_image, submit_quote, CreateQuoteModel, CreateQuoteState,
};
use crafto_core::{Error, PendingUpload};
use dioxus::prelude::*;
use rfd::AsyncFileDialog;

use crate::app::follow_redirect;
use crate::components::LoadingOverlay;
use crate::services::{use_flow_context, use_session_guard, SignalCell};
use crate::ui::{ButtonVariant, UiButton, UiTextarea};

#[component]
pub fn CreateQuote() -> Element {
    let flow = use_flow_context();
    let navigator = use_navigator();
    let mut draft = use_signal(CreateQuoteModel::default);

    use_session_guard();

    let pick_flow = flow.clone();
    let on_pick_image = move |_| {
        let Some(flow) = pick_flow.clone() else {
            return;
        };
        spawn(async move {
            let Some(file) = AsyncFileDialog::new()
                .add_filter("JPEG image", &["jpg", "jpeg"])
                .pick_file()
                .await
            else {
                return;
            };
            let file_name = file.file_name();
            let bytes = file.read().await;
            let mut upload = PendingUpload::new(file_name.clone(), bytes);
            if let Some(content_type) = mime_guess::from_path(&file_name).first_raw() {
                upload = upload.with_content_type(content_type);
            }

            match attach_image(&flow, &SignalCell::new(draft), upload).await {
                Ok(_) => {}
                Err(Error::SignInRequired(redirect)) => follow_redirect(navigator, redirect).await,
                Err(error) => tracing::debug!("Attachment not used: {}", error),
            }
        });
    };

    let on_submit = move |_| {
        let Some(flow) = flow.clone() else {
            return;
        };
        spawn(async move {
            match submit_quote(&flow, &SignalCell::new(draft)).await {
                Ok(redirect) => follow_redirect(navigator, redirect).await,
                Err(error) => tracing::debug!("Quote not created: {}", error),
            }
        });
    };

    let current = draft.read().clone();
    let state = current.state();
    let submit_label = if state == CreateQuoteState::Submitting {
        "Creating..."
    } else {
        "Create Quote"
    };

    rsx! {
        section {
            class: "panel",
            h1 { "Create Quote" }

            UiTextarea {
                placeholder: "Quote text",
                value: "{current.text}",
                oninput: move |event: FormEvent| draft.write().text = event.value(),
            }

            div {
                style: "display: flex; align-items: center; gap: 12px;",
                UiButton {
                    variant: ButtonVariant::Outline,
                    disabled: current.shows_overlay(),
                    onclick: on_pick_image,
                    "Attach image"
                }
                span { style: "font-size: 13px; font-style: italic; color: #6b7280;", "Attach a .jpg file" }
            }

            if state == CreateQuoteState::UploadingImage {
                p { "Uploading image..." }
            }

            if let Some(image_error) = current.image_error.as_deref() {
                span { class: "field-error", "{image_error}" }
            }

            if let Some(media_url) = current.media_url() {
                img {
                    src: "{media_url}",
                    alt: "Attached image",
                    style: "max-width: 100%; max-height: 240px; border-radius: 10px; object-fit: cover;",
                }
            }

            UiButton {
                block: true,
                disabled: !current.can_submit(),
                onclick: on_submit,
                "{submit_label}"
            }
        }

        if current.shows_overlay() {
            LoadingOverlay {}
        }
    }
}
