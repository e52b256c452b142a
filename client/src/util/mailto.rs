//! `mailto:` deep links for handing a generated email to the mail client.

#[cfg(test)]
#[path = "mailto_test.rs"]
mod mailto_test;

/// Build `mailto:<recipient>?subject=<enc>&body=<enc>`.
///
/// The recipient is trimmed and percent-encoded around its `@` so the address
/// stays readable to mail clients; subject and body are fully encoded.
pub fn mailto_uri(recipient: &str, subject: &str, body: &str) -> String {
    let to = recipient
        .trim()
        .split('@')
        .map(|part| urlencoding::encode(part).into_owned())
        .collect::<Vec<_>>()
        .join("@");
    format!(
        "mailto:{to}?subject={}&body={}",
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}
