use faces_core::feed::FeedItem;
use faces_core::meta::PageMeta;
use maud::{html, Markup, PreEscaped};

use super::{back_link, layout};
use crate::state::PageContext;
use crate::style::{heading_style, subheading_style};

const PROSE: &str = "block prose max-w-none w-full mx-auto text-center text-black prose-a:text-blue-500 prose-a:underline-offset-4 prose-blockquote:bg-gray-100 prose-blockquote:p-8 prose-blockquote:border-0 prose-img:w-full prose-img:h-full";

pub fn render(ctx: &PageContext, meta: &PageMeta, item: &FeedItem) -> Markup {
    let body = html! {
        div class="overflow-y-auto h-full w-full pt-16" {
            (back_link(ctx, &ctx.home_href()))
            div class="py-4 lg:py-16 px-4 mb-8 lg:mb-16 text-center" {
                div class="flex justify-start w-full lg:w-9/12 mx-auto mb-4 lg:mb-8" {
                    div class="w-full" {
                        h1 style=(heading_style()) { (item.title) }
                        @if !item.summary.is_empty() {
                            div class="w-full py-4 mt-2 lg:px-4" {
                                h2 class="italic text-center" style=(subheading_style()) { (item.summary) }
                            }
                        }
                        img src="/icons/divider-hr.png" class="w-full" alt="";
                    }
                }
                @if item.has_content() {
                    div class="w-full mx-auto mb-2" {
                        // content_html is authored in the CMS and rendered as is
                        article class=(PROSE) { (PreEscaped(&item.content_html)) }
                    }
                }
            }
        }
    };

    layout(ctx, meta, None, body)
}
