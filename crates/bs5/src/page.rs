//! Standalone HTML page around a rendered fragment.

use std::fmt::Write;

use bs5_components::escape_html;
use bs5_config::PageConfig;

/// Wrap `body` in a complete document linking the configured Bootstrap assets.
pub(crate) fn standalone_page(body: &str, page: &PageConfig) -> String {
    let mut out = String::with_capacity(body.len() + 512);
    let _ = write!(
        out,
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="{css}">
</head>
<body>
{body}
<script src="{js}"></script>
</body>
</html>
"#,
        lang = escape_html(&page.lang),
        title = escape_html(&page.title),
        css = escape_html(&page.bootstrap_css),
        js = escape_html(&page.bootstrap_js),
    );
    out
}
