use faces_core::content::{WebPage, WebSection, Website};
use faces_core::meta::PageMeta;
use maud::{html, Markup};

use super::{attachment, back_link, layout};
use crate::links::LinkTarget;
use crate::state::PageContext;
use crate::style::{heading_style, subheading_style};

const BUTTON: &str = "inline-block relative z-10 uppercase bg-black text-white rounded-full px-4 py-2 hover:shadow-2xl hover:scale-110 tracking-wide transition ease-in-out delay-150 duration-200 mt-4";

pub fn render(ctx: &PageContext, meta: &PageMeta, website: &Website, page: &WebPage) -> Markup {
    let body = html! {
        div class="bg-white h-full w-full p-4 overflow-y-scroll" {
            (back_link(ctx, &ctx.home_href()))
            @for (index, section) in page.sections.iter().enumerate() {
                (render_section(ctx, index, section))
            }
        }
    };

    layout(ctx, meta, Some(&website.theme), body)
}

fn render_section(ctx: &PageContext, index: usize, section: &WebSection) -> Markup {
    let spacing = if index == 0 { "pt-16 pb-4" } else { "py-4" };
    html! {
        section class={ (spacing) " relative z-20 font-sans max-w-screen-xl mx-auto flex flex-col items-center" } {
            h1 class="w-full text-center" style=(heading_style()) { (section.title) }
            @if !section.description.is_empty() {
                h2 class="max-w-screen-md mx-auto text-center mt-4" style=(subheading_style()) { (section.description) }
            }
            @if let Some(link) = section.link() {
                @let target = LinkTarget::classify(&link.url, &ctx.config.site.origin, &ctx.lang);
                @if target.is_external() {
                    a class=(BUTTON) href=(target.href()) target="_blank" rel="noopener" { (link.title) }
                } @else {
                    a class=(BUTTON) href=(target.href()) { (link.title) }
                }
            }
            @if !section.image.is_empty() {
                div class="w-full overflow-hidden relative z-0 mt-8" {
                    (attachment(&section.image, ""))
                }
            }
        }
    }
}
