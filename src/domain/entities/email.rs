use serde::Serialize;

use crate::entities::contact::ContactSubmission;

/// Message body accepted by the provider's send endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub reply_to: String,
    pub subject: String,
    pub html: String,
}

impl OutboundEmail {
    /// Builds the notification for a contact submission. Replies go straight
    /// to the submitter.
    pub fn compose(submission: &ContactSubmission, sender: &str, recipient: &str) -> Self {
        let subject_name: String = submission
            .name
            .chars()
            .map(|c| if c.is_control() { ' ' } else { c })
            .collect();

        let html = format!(
            "<h2>New Contact Form Submission</h2>\n\
             <p><strong>From:</strong> {name} ({email})</p>\n\
             <p><strong>Message:</strong></p>\n\
             <p>{message}</p>",
            name = escape_html(&submission.name),
            email = escape_html(&submission.email),
            message = escape_multiline(&submission.message),
        );

        OutboundEmail {
            from: sender.to_string(),
            to: vec![recipient.to_string()],
            reply_to: submission.email.clone(),
            subject: format!("Portfolio Contact: Message from {subject_name}"),
            html,
        }
    }
}

fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escapes each line and joins them with `<br>`.
fn escape_multiline(text: &str) -> String {
    text.split('\n')
        .map(|line| escape_html(line.trim_end_matches('\r')))
        .collect::<Vec<_>>()
        .join("<br>")
}
