use faces_core::content::{WebLink, WebPage, Website};
use faces_core::feed::Pair;
use faces_core::meta::PageMeta;
use maud::{html, Markup};

use super::{attachment, layout};
use crate::links::{face_href, link_icon, split_navbar, LinkTarget};
use crate::state::PageContext;

pub fn render(ctx: &PageContext, meta: &PageMeta, website: &Website, page: &WebPage, pairs: &[Pair<'_>]) -> Markup {
    let hero = page.hero();
    let headline = hero.map(|s| s.title.as_str()).unwrap_or_default();
    let (left, right) = split_navbar(website.navbar());

    let body = html! {
        div class="bg-red-500 h-full w-full p-12 flex flex-col overflow-y-auto" {
            h1 class="relative z-20 lg:hidden text-2xl lg:text-6xl w-full text-center mb-4" { (headline) }
            nav class="relative z-20 font-sans mb-4 flex items-center justify-center lg:justify-between" {
                div class="flex items-center flex-1 lg:flex-none" {
                    @for link in left { (nav_link(ctx, link)) }
                }
                h1 class="hidden lg:block text-2xl lg:text-6xl w-full text-center" { (headline) }
                div class="flex items-center lg:justify-end flex-1 lg:flex-none" {
                    @for link in right { (nav_link(ctx, link)) }
                }
            }
            div class="h-full w-full grid grid-cols-2 lg:grid-cols-6 gap-8 auto-rows-min relative z-20 flex-1" {
                @for pair in pairs {
                    (tile(ctx, pair))
                }
                div {
                    p class="sr-only" { (ctx.t("add_yours")) }
                    a href=(format!("/{}/add-yours", ctx.lang))
                        class="flex items-center justify-center h-full w-full aspect-square hover:scale-125 transition ease-in-out delay-150 duration-200" {
                        img class="w-20 h-20" src="/icons/add.png" alt="";
                    }
                }
            }
            @if let Some(section) = hero {
                @if !section.image.is_empty() {
                    img src=(section.image) alt="" class="absolute inset-0 w-full h-full";
                }
            }
        }
    };

    layout(ctx, meta, Some(&website.theme), body)
}

/// Grid tile: shows the second item of the pair and reveals the first on hover.
/// An anchor without a slug has no page, so its tile is not a link.
fn tile(ctx: &PageContext, pair: &Pair<'_>) -> Markup {
    let anchor = pair.anchor();
    let images = html! {
        div class="w-full aspect-square relative group" {
            div class="w-full h-full relative z-20 group-hover:opacity-0" {
                (attachment(&anchor.image, ""))
            }
            @if pair.second.is_some() {
                div class="w-full h-full inset-0 absolute z-10 opacity-0 group-hover:opacity-100" {
                    (attachment(&pair.first.image, ""))
                }
            }
        }
    };

    html! {
        @if anchor.slug.is_empty() {
            div { (images) }
        } @else {
            a href=(face_href(&ctx.lang, &anchor.slug)) { (images) }
        }
    }
}

fn nav_link(ctx: &PageContext, link: &WebLink) -> Markup {
    let target = LinkTarget::classify(&link.url, &ctx.config.site.origin, &ctx.lang);
    let icon = format!("/icons/{}.png", link_icon(&link.url));
    html! {
        @if target.is_external() {
            a href=(target.href()) class="flex-none" target="_blank" rel="noopener" {
                span class="sr-only" { (link.title) }
                img class="w-16 h-16" src=(icon) alt="";
            }
        } @else {
            a href=(target.href()) class="flex-none" {
                span class="sr-only" { (link.title) }
                img class="w-16 h-16" src=(icon) alt="";
            }
        }
    }
}
