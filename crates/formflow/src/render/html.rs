use std::fmt::Write;

pub(crate) fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

pub(crate) fn layout(title: &str, body: &str) -> String {
    let title = escape_html(title);
    let mut html = String::with_capacity(body.len() + 256);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    writeln!(html, "<title>{title}</title>").expect("write title");
    html.push_str("</head>\n<body>\n<main>\n");
    writeln!(html, "<h1>{title}</h1>").expect("write heading");
    html.push_str(body);
    html.push_str("</main>\n</body>\n</html>\n");
    html
}

pub(crate) fn error_slot(html: &mut String, field: &str, error: Option<&str>) {
    if let Some(message) = error {
        writeln!(
            html,
            "<span class=\"error\" id=\"{field}-error\">{}</span>",
            escape_html(message)
        )
        .expect("write field error");
    }
}

pub(crate) fn checked(on: bool) -> &'static str {
    if on {
        " checked"
    } else {
        ""
    }
}

pub(crate) fn selected(on: bool) -> &'static str {
    if on {
        " selected"
    } else {
        ""
    }
}
