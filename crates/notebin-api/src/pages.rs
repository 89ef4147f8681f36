//! Minimal HTML pages for the public share endpoint.
//!
//! Every dynamic value goes through [`escape_html`].

const STYLE: &str = "body{font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,sans-serif;\
background:#121212;color:#e0e0e0;margin:0;padding:40px}\
main{max-width:860px;margin:0 auto}\
pre{background:#1e1e1e;padding:16px;border-radius:8px;white-space:pre-wrap;word-break:break-word}\
input,button{padding:10px;border-radius:6px;border:1px solid #444;background:#1e1e1e;color:#e0e0e0}\
button{background:#7c4dff;border:none;cursor:pointer}.error{color:#ff6b6b}";

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width,initial-scale=1\">\
<title>{}</title><style>{STYLE}</style></head><body><main>{body}</main></body></html>",
        escape_html(title)
    )
}

/// Error page with a heading and explanation.
pub fn error_page(title: &str, message: &str) -> String {
    layout(
        title,
        &format!(
            "<h2>{}</h2><p>{}</p>",
            escape_html(title),
            escape_html(message)
        ),
    )
}

/// Password prompt that posts back to the same share link.
pub fn password_page(token: &str, raw: bool, rejected: bool) -> String {
    let action = if raw {
        format!("/share?k={token}&raw=true")
    } else {
        format!("/share?k={token}")
    };
    let notice = if rejected {
        "<p class=\"error\">Incorrect password.</p>"
    } else {
        ""
    };
    layout(
        "Password required",
        &format!(
            "<h2>Password required</h2>{notice}\
<form method=\"post\" action=\"{}\">\
<input type=\"password\" name=\"password\" placeholder=\"Password\" autofocus required> \
<button type=\"submit\">Open</button></form>",
            escape_html(&action)
        ),
    )
}

/// Content view. `token` is set when reached through a share link and
/// `None` for an admin preview.
pub fn content_page(file_id: &str, text: &str, token: Option<&str>) -> String {
    let raw_link = token
        .map(|t| {
            format!(
                "<p><a href=\"{}\">raw</a></p>",
                escape_html(&format!("/share?k={t}&raw=true"))
            )
        })
        .unwrap_or_default();
    layout(
        file_id,
        &format!(
            "<h3>{}</h3>{raw_link}<pre>{}</pre>",
            escape_html(file_id),
            escape_html(text)
        ),
    )
}
