use super::{AppError, HtmlTemplate};
use crate::{
    confirm::{ConfirmContext, DialogForm, HiddenField},
    extractor::UiLocale,
    i18n::{Locale, SystemInstructionStrings},
};
use askama::Template;
use axum::{extract::Query, response::IntoResponse};
use serde::Deserialize;
use std::{cell::RefCell, rc::Rc};
use tracing::instrument;

#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    #[serde(default)]
    instruction: String,
    /// Set by the reset button to ask before clearing.
    confirm: Option<ConfirmKind>,
    /// Set by the dialog's buttons.
    resolve: Option<Resolution>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfirmKind {
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    Confirm,
    Cancel,
}

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    lang: &'static str,
    strings: &'static SystemInstructionStrings,
    instruction: String,
    dialog: String,
}

#[instrument(skip(query))]
pub async fn home(
    UiLocale(locale): UiLocale,
    Query(query): Query<HomeQuery>,
) -> Result<impl IntoResponse, AppError> {
    Ok(HtmlTemplate(render_home(locale, query)?))
}

/// Builds the page around its one confirmation context.
///
/// The page is rendered per request, so a pending reset travels in the query
/// string: `confirm=reset` opens the dialog and `resolve=...` answers it.
fn render_home(locale: Locale, query: HomeQuery) -> anyhow::Result<HomeTemplate> {
    let (confirmer, surface) = ConfirmContext::new();
    let instruction = Rc::new(RefCell::new(query.instruction));

    if query.confirm.is_some() || query.resolve.is_some() {
        let strings = locale.reset_confirm();
        let target = Rc::clone(&instruction);
        confirmer.request_confirmation(strings.title, strings.message, move || {
            target.borrow_mut().clear();
            Ok(())
        });
    }

    if let Some(resolution) = query.resolve {
        surface.resolve(resolution == Resolution::Confirm)?;
        tracing::debug!(?resolution, "reset dialog resolved");
    }

    let instruction = instruction.borrow().clone();
    let strings = locale.reset_confirm();
    let dialog = surface.render(&DialogForm {
        action: "/",
        confirm_label: strings.confirm,
        cancel_label: strings.cancel,
        hidden: vec![
            HiddenField {
                name: "instruction",
                value: &instruction,
            },
            HiddenField {
                name: "lang",
                value: locale.tag(),
            },
        ],
    })?;

    Ok(HomeTemplate {
        lang: locale.tag(),
        strings: locale.system_instruction(),
        instruction,
        dialog,
    })
}
