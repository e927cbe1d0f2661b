//! Shared HTML components used by every embed layout.
//!
//! These are maud functions that return `Markup` fragments for composition
//! into the embed page.

use maud::{Markup, PreEscaped, html};

/// Inline CSS for embed pages.
///
/// Layout classes mirror the render tree: `.image-*` for image sets,
/// `.link-card`, `.quote-card`, `.generic-card` and `.box` for messages.
pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#fff;--fg:#0b0f14;--fg2:#42576c;--border:#d4dbe2;--hover:#f1f3f5;--brand:#0a7aff;--placeholder:#c8cfd6}
body{font-family:Inter,-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.4;color:var(--fg);background:var(--bg);padding:.5rem}
a{color:inherit;text-decoration:none}
img{display:block;max-width:100%}

.embed{display:flex;flex-direction:column;gap:.5rem;width:100%;max-width:600px}
.stack{display:flex;flex-direction:column;gap:.5rem}

.image-single{width:100%;height:auto;max-height:1000px;object-fit:cover;border-radius:8px}
.image-row{display:flex;gap:4px;width:100%;aspect-ratio:2/1;border-radius:8px;overflow:hidden}
.image-row.pair img{width:50%;height:100%;object-fit:cover;border-radius:2px}
.image-row.triptych .primary{flex:3;min-width:0;height:100%;object-fit:cover;border-radius:2px}
.image-column{flex:2;min-width:0;display:flex;flex-direction:column;gap:4px}
.image-column img{width:100%;height:100%;min-height:0;object-fit:cover;border-radius:2px}
.image-grid{display:grid;grid-template-columns:1fr 1fr;gap:4px;border-radius:8px;overflow:hidden}
.image-grid img{aspect-ratio:1;width:100%;object-fit:cover;border-radius:2px}
.image-missing{background:var(--placeholder);width:100%;height:100%;min-height:2rem;border-radius:2px}

.link-card{display:flex;flex-direction:column;width:100%;border:1px solid var(--border);border-radius:8px;overflow:hidden}
a.link-card:hover{background:var(--hover)}
.link-card-thumb{aspect-ratio:1.91/1;width:100%;object-fit:cover}
.link-card-body{padding:.75rem 1rem}
.link-card-domain{font-size:.875rem;color:var(--fg2);overflow:hidden;text-overflow:ellipsis;white-space:nowrap}
.link-card-title{font-weight:600;display:-webkit-box;-webkit-line-clamp:3;-webkit-box-orient:vertical;overflow:hidden}
.link-card-description{font-size:.875rem;color:var(--fg2);margin-top:.125rem;display:-webkit-box;-webkit-line-clamp:2;-webkit-box-orient:vertical;overflow:hidden}

.quote-card{display:flex;flex-direction:column;gap:.375rem;width:100%;border:1px solid var(--border);border-radius:8px;padding:.5rem}
.quote-card:hover{background:var(--hover)}
.quote-card-link{display:flex;flex-direction:column;gap:.375rem}
.quote-card-author{display:flex;align-items:center;gap:.375rem;font-size:.875rem;min-width:0}
.quote-card-avatar{width:1rem;height:1rem;border-radius:50%;background:var(--placeholder);flex-shrink:0;object-fit:cover}
.quote-card-name{font-weight:700}
.quote-card-handle{color:var(--fg2);overflow:hidden;text-overflow:ellipsis;white-space:nowrap}
.quote-card-time{color:var(--fg2);margin-left:auto;white-space:nowrap}
.quote-card-text{font-size:.875rem;white-space:pre-wrap;word-break:break-word}

.generic-card{display:flex;flex-direction:column;gap:.5rem;width:100%;border:1px solid var(--border);border-radius:8px;padding:.5rem .75rem}
a.generic-card:hover{background:var(--hover)}
.generic-card-header{display:flex;align-items:center;gap:.625rem}
.generic-card-image{width:2rem;height:2rem;border-radius:6px;background:var(--placeholder);flex-shrink:0;object-fit:cover}
.generic-card-placeholder{width:2rem;height:2rem;border-radius:6px;background:var(--brand);flex-shrink:0}
.generic-card-title{font-weight:700;font-size:.875rem}
.generic-card-subtitle,.generic-card-description{color:var(--fg2);font-size:.875rem}

.box{width:100%;border:1px solid var(--border);border-radius:8px;padding:.5rem 1rem}
.box.error{border-style:dashed}

@media(prefers-color-scheme:dark){
:root{--bg:#161e27;--fg:#f1f3f5;--fg2:#aebbc9;--border:#2e4052;--hover:#1e2936;--placeholder:#2e4052}
}
"#;

/// Inline CSS for error pages.
pub const ERROR_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;display:flex;justify-content:center;align-items:center;min-height:100vh;background:#fff;color:#0b0f14;padding:1rem}
.error-page{text-align:center;max-width:400px}
.error-page h1{font-size:1.5rem;margin-bottom:.75rem}
.error-page p{color:#42576c;line-height:1.5}
@media(prefers-color-scheme:dark){
body{background:#161e27;color:#f1f3f5}
.error-page p{color:#aebbc9}
}
"#;

/// Content-Security-Policy header value.
///
/// No scripts at all, inline styles only, HTTPS images.
pub const CSP_HEADER: &str = "default-src 'none'; style-src 'unsafe-inline'; img-src https: data:; form-action 'none'; base-uri 'none'";

/// Render the full HTML page shell around an embed fragment.
pub fn page_shell(title: &str, body_content: Markup) -> Markup {
    html! {
        (maud::DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="robots" content="noindex";
                title { (title) }
                base target="_blank";
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                (body_content)
            }
        }
    }
}

/// Bordered message box used for notices and error placeholders.
pub fn message_box(message: &str, is_error: bool) -> Markup {
    let class = if is_error { "box error" } else { "box" };
    html! {
        div class=(class) {
            p { (message) }
        }
    }
}

/// Check that a URL is safe to put in `href`/`src` (http or https only).
pub fn is_safe_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

/// Join an app-relative path onto the configured link base.
pub fn app_link(base_url: &str, path: &str) -> String {
    format!("{base_url}{path}")
}

/// Truncate a string to at most `max_len` bytes on a char boundary, adding "...".
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let mut end = max_len;
        while !s.is_char_boundary(end) && end > 0 {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

/// Format an RFC 3339 timestamp as ("Mon DD, YYYY", ISO 8601 UTC).
/// Returns None when the input does not parse.
pub fn format_timestamp(rfc3339: &str) -> Option<(String, String)> {
    let ts = chrono::DateTime::parse_from_rfc3339(rfc3339)
        .ok()?
        .with_timezone(&chrono::Utc);
    let display = ts.format("%b %d, %Y").to_string();
    let iso = ts.format("%Y-%m-%dT%H:%M:%SZ").to_string();
    Some((display, iso))
}
