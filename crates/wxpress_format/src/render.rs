//! Markdown to inline-styled HTML.

use crate::highlight::HighlightStyle;
use crate::themes::Theme;
use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, html};

/// Rendered body plus the first image reference found.
#[derive(Debug)]
pub(crate) struct Rendered {
    pub(crate) html: String,
    pub(crate) first_image: Option<String>,
}

/// Renders a Markdown body wrapped in a styled `<section>`.
pub(crate) fn render(body: &str, theme: &Theme, highlight: &HighlightStyle) -> Rendered {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let mut first_image: Option<String> = None;
    let events = Parser::new_ext(body, options).map(|event| {
        if let Event::Start(Tag::Image { dest_url, .. }) = &event {
            if first_image.is_none() && !dest_url.is_empty() {
                first_image = Some(dest_url.to_string());
            }
        }
        style_event(event, theme, highlight)
    });

    let mut inner = String::with_capacity(body.len() * 2);
    html::push_html(&mut inner, events);
    let inner = style_default_tags(&inner, theme);

    let html = format!(
        "<section id=\"wxpress\" style=\"{}\">{}</section>",
        theme.container_style(),
        inner
    );
    Rendered { html, first_image }
}

/// Replaces opening tags with styled ones. Closing tags come from the
/// default writer.
fn style_event<'a>(event: Event<'a>, theme: &Theme, highlight: &HighlightStyle) -> Event<'a> {
    match event {
        Event::Start(Tag::Heading { level, .. }) => {
            let level = level as u8;
            Event::Html(format!("<h{} style=\"{}\">", level, theme.heading_style(level)).into())
        }
        Event::Start(Tag::Paragraph) => {
            Event::Html(format!("<p style=\"{}\">", theme.paragraph_style()).into())
        }
        Event::Start(Tag::BlockQuote(_)) => {
            Event::Html(format!("<blockquote style=\"{}\">", theme.blockquote_style()).into())
        }
        Event::Start(Tag::CodeBlock(kind)) => {
            let language = match &kind {
                CodeBlockKind::Fenced(info) => info.split_whitespace().next().unwrap_or_default(),
                CodeBlockKind::Indented => "",
            };
            let code = if language.is_empty() {
                "<code>".to_string()
            } else {
                format!("<code class=\"language-{}\">", escape(language))
            };
            Event::Html(format!("<pre style=\"{}\">{}", highlight.pre_style(), code).into())
        }
        Event::Start(Tag::List(Some(start))) => {
            let start_attr = if start == 1 {
                String::new()
            } else {
                format!(" start=\"{}\"", start)
            };
            Event::Html(format!("<ol{} style=\"{}\">", start_attr, theme.list_style()).into())
        }
        Event::Start(Tag::List(None)) => {
            Event::Html(format!("<ul style=\"{}\">", theme.list_style()).into())
        }
        Event::Start(Tag::Item) => {
            Event::Html(format!("<li style=\"{}\">", theme.list_item_style()).into())
        }
        Event::Start(Tag::Link { dest_url, title, .. }) => {
            let title_attr = if title.is_empty() {
                String::new()
            } else {
                format!(" title=\"{}\"", escape(&title))
            };
            Event::Html(
                format!(
                    "<a href=\"{}\"{} style=\"{}\">",
                    escape(&dest_url),
                    title_attr,
                    theme.link_style()
                )
                .into(),
            )
        }
        Event::Code(text) => Event::Html(
            format!("<code style=\"{}\">{}</code>", theme.inline_code_style(), escape(&text)).into(),
        ),
        Event::Rule => Event::Html(format!("<hr style=\"{}\" />\n", theme.rule_style()).into()),
        other => other,
    }
}

/// Styles tags the default writer emits for images and tables.
fn style_default_tags(html: &str, theme: &Theme) -> String {
    let cell = theme.cell_style();
    html.replace("<img src=", &format!("<img style=\"{}\" src=", theme.image_style()))
        .replace("<table>", &format!("<table style=\"{}\">", theme.table_style()))
        .replace("<th>", &format!("<th style=\"{}; font-weight: bold\">", cell))
        .replace("<td>", &format!("<td style=\"{}\">", cell))
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
