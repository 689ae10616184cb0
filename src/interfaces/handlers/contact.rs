use actix_web::{error::PayloadError, web, HttpRequest, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::contact::ContactResponse,
    errors::ContactError,
    utils::get_client_ip::get_client_ip,
    AppState,
};

#[instrument(skip(req, state, body), fields(client = tracing::field::Empty))]
pub async fn submit_contact(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: Result<web::Bytes, actix_web::Error>,
) -> Result<impl Responder, ContactError> {
    let client_id = get_client_ip(&req);
    tracing::Span::current().record("client", client_id.as_str());

    let body = body.as_deref().map_err(body_read_error);
    let receipt = state.contact_handler.submit(&client_id, body).await?;

    Ok(HttpResponse::Ok().json(ContactResponse::success(receipt.message())))
}

fn body_read_error(err: &actix_web::Error) -> ContactError {
    match err.as_error::<PayloadError>() {
        Some(PayloadError::Overflow) => {
            ContactError::MalformedRequest("request body exceeds the size limit".to_string())
        }
        _ => {
            tracing::warn!(error = %err, "Failed to read contact request body");
            ContactError::UnexpectedFault(err.to_string())
        }
    }
}
