pub mod about;
pub mod error;
pub mod face;
pub mod home;
pub mod page;

use faces_core::content::Theme;
use faces_core::meta::PageMeta;
use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::state::PageContext;

/// Document shell shared by every page
pub fn layout(ctx: &PageContext, meta: &PageMeta, theme: Option<&Theme>, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(ctx.locale) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (meta.title) }
                @for (name, content) in meta.named_tags() {
                    meta name=(name) content=(content);
                }
                @for (property, content) in meta.property_tags() {
                    meta property=(property) content=(content);
                }
                @if let Some(canonical) = &meta.canonical {
                    link rel="canonical" href=(canonical);
                }
                link rel="stylesheet" href="/app.css";
                @if let Some(vars) = theme.and_then(theme_vars) {
                    style { (PreEscaped(vars)) }
                }
            }
            body class="h-screen w-screen overflow-hidden font-sans" {
                (body)
            }
        }
    }
}

/// Image of a feed item or section; nothing when the url is empty
pub fn attachment(url: &str, description: &str) -> Markup {
    html! {
        @if !url.is_empty() {
            img class="w-full h-full object-contain" src=(url) alt=(description) loading="lazy";
        }
    }
}

/// Arrow in the top left corner leading back to `href`
pub fn back_link(ctx: &PageContext, href: &str) -> Markup {
    html! {
        div class="absolute top-0 left-0 m-4 z-40 w-16 h-16 mix-blend-multiply" {
            a href=(href) class="underline" {
                p class="sr-only" { (ctx.t("back")) }
                img src="/icons/arrow.png" alt="";
            }
        }
    }
}

/// CSS custom properties for the theme colours. Colours that are not plain
/// CSS colour tokens are left out.
fn theme_vars(theme: &Theme) -> Option<String> {
    let vars: Vec<String> = [
        ("--color-primary", theme.primary_color.as_str()),
        ("--color-secondary", theme.inverted_primary_color.as_str()),
    ]
    .into_iter()
    .filter(|(_, value)| is_css_color(value))
    .map(|(name, value)| format!("{}: {};", name, value))
    .collect();

    if vars.is_empty() {
        None
    } else {
        Some(format!(":root {{ {} }}", vars.join(" ")))
    }
}

fn is_css_color(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= 64
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '#' | '(' | ')' | ',' | '.' | '%' | ' '))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_vars_filters_unsafe_values() {
        let theme = Theme {
            logo_url: String::new(),
            primary_color: "#ff0000".to_string(),
            inverted_primary_color: "red;}</style><script>".to_string(),
        };
        assert_eq!(theme_vars(&theme).unwrap(), ":root { --color-primary: #ff0000; }");

        assert!(theme_vars(&Theme::default()).is_none());
    }

    #[test]
    fn test_attachment_skips_empty_url() {
        assert_eq!(attachment("", "x").into_string(), "");
        assert!(attachment("https://cdn.example.com/a.png", "A").into_string().contains("alt=\"A\""));
    }
}
