use chrono::{DateTime, Utc};
use faces_core::feed::Siblings;
use faces_core::meta::PageMeta;
use maud::{html, Markup, PreEscaped};

use super::{attachment, layout};
use crate::links::face_href;
use crate::state::PageContext;

const PROSE: &str = "block prose max-w-none lg:w-11/12 text-black prose-a:text-blue-500 prose-a:underline-offset-4 prose-blockquote:bg-gray-100 prose-blockquote:p-8 prose-blockquote:border-0";

pub fn render(ctx: &PageContext, meta: &PageMeta, siblings: &Siblings<'_>) -> Markup {
    let item = siblings.item;
    let body = html! {
        div class="grid grid-cols-1 lg:grid-cols-2 overflow-y-auto lg:overflow-y-hidden h-full w-full" data-index=(siblings.index) {
            div class="aspect-square lg:aspect-auto flex items-center justify-center p-4 h-full" {
                div class="w-1/2 h-full max-w-screen-md mx-auto" {
                    (attachment(&item.image, &item.title))
                }
            }
            div class="flex flex-col justify-between p-4" {
                div {
                    h1 class="text-2xl" { (item.title) }
                    @if !item.summary.is_empty() {
                        p class="italic" { (item.summary) }
                    }
                    @if let Some(published) = item.date_published {
                        time datetime=(published.to_rfc3339()) { (format_date(&published)) }
                    }
                    @if item.has_content() {
                        div class="w-full lg:w-9/12 mx-auto mb-2 mr-auto flex flex-col items-end" {
                            article class=(PROSE) { (PreEscaped(&item.content_html)) }
                        }
                    }
                }
                nav class="flex items-center justify-between" {
                    @if siblings.has_previous() {
                        a href=(face_href(&ctx.lang, &siblings.previous_slug)) rel="prev" {
                            p class="sr-only" { (ctx.t("previous")) }
                            img class="w-8 h-8" src="/icons/arrow-left.png" alt="";
                        }
                    } @else {
                        div class="w-8 h-8" {}
                    }
                    a href=(ctx.home_href()) {
                        p class="sr-only" { (ctx.t("grid")) }
                        img class="w-8 h-8" src="/icons/grid.png" alt="";
                    }
                    @if siblings.has_next() {
                        a href=(face_href(&ctx.lang, &siblings.next_slug)) rel="next" {
                            p class="sr-only" { (ctx.t("next")) }
                            img class="w-8 h-8" src="/icons/arrow-right.png" alt="";
                        }
                    } @else {
                        div class="w-8 h-8" {}
                    }
                }
            }
        }
    };

    layout(ctx, meta, None, body)
}

fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%d/%m/%Y").to_string()
}
