//! Contact form handler.
//!
//! Submissions are validated and logged; there is no mail delivery.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use folio_core::contact::{ContactError, ContactRequest, ContactResponse};
use tracing::{info, warn};

fn rejected(message: impl Into<String>) -> (StatusCode, Json<ContactResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ContactResponse {
            success: false,
            message: message.into(),
        }),
    )
}

/// `POST /contact` — accept a contact form submission.
pub async fn contact_handler(
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> (StatusCode, Json<ContactResponse>) {
    let form = match payload {
        Ok(Json(form)) => form,
        Err(e) => {
            warn!("rejected contact body: {e}");
            return rejected("Invalid request format");
        }
    };

    if let Err(e) = form.validate() {
        let message = match e {
            ContactError::Validation(m) => m,
            other => other.to_string(),
        };
        warn!(%message, "contact form rejected");
        return rejected(message);
    }

    info!(
        name = %form.name.trim(),
        email = %form.email.trim(),
        subject = %form.subject.trim(),
        "contact form received"
    );

    (
        StatusCode::OK,
        Json(ContactResponse {
            success: true,
            message: "Thank you for your message! I'll get back to you soon.".into(),
        }),
    )
}
