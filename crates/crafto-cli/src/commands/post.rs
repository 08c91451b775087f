use std::cell::RefCell;
use std::path::Path;

use crafto_core::flows::create_quote::{attach_image, submit_quote, CreateQuoteModel};
use crafto_core::flows::{FlowContext, Screen};
use crafto_core::{ClientConfig, Error as CoreError, Notifier, PendingUpload, QuoteApi, SessionStore};

use crate::cli::LoginArgs;
use crate::commands::common::{flow_context, sign_in};
use crate::error::CliError;

pub async fn run_post(
    config: ClientConfig,
    login: &LoginArgs,
    text: &str,
    image: &Path,
) -> Result<(), CliError> {
    let upload = read_image(image).await?;
    let ctx = flow_context(config)?;
    sign_in(&ctx, login).await?;
    let media_url = post_quote(&ctx, text, upload).await?;
    println!("{media_url}");
    Ok(())
}

async fn read_image(path: &Path) -> Result<PendingUpload, CliError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| CliError::ImageRead {
            path: path.to_path_buf(),
            source,
        })?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(PendingUpload::new(file_name, bytes))
}

/// Upload the image and create the quote. Returns the uploaded media URL.
pub async fn post_quote<A, S, N>(
    ctx: &FlowContext<A, S, N>,
    text: &str,
    upload: PendingUpload,
) -> Result<String, CliError>
where
    A: QuoteApi,
    S: SessionStore,
    N: Notifier,
{
    let draft = RefCell::new(CreateQuoteModel::default());
    draft.borrow_mut().text = text.to_string();
    let media_url = match attach_image(ctx, &draft, upload).await {
        Ok(url) => url,
        Err(CoreError::SignInRequired(_)) => return Err(CliError::NotAuthenticated),
        Err(error) => return Err(error.into()),
    };

    let redirect = submit_quote(ctx, &draft).await?;
    if redirect.to == Screen::Login {
        return Err(CliError::NotAuthenticated);
    }
    Ok(media_url)
}
