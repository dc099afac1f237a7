use axum::http::StatusCode;
use faces_core::meta::PageMeta;
use maud::{html, Markup};

use super::layout;
use crate::state::PageContext;

pub fn render(ctx: &PageContext, meta: &PageMeta, status: StatusCode) -> Markup {
    let heading = if status == StatusCode::NOT_FOUND {
        ctx.t("not_found_title")
    } else {
        ctx.t("error_title")
    };

    let body = html! {
        main class="h-full w-full flex flex-col items-center justify-center p-4 text-center" {
            p class="text-6xl" { (status.as_u16()) }
            h1 class="text-2xl mt-4" { (heading) }
            a href=(ctx.home_href()) class="underline mt-8" { (ctx.t("error_home")) }
        }
    };

    layout(ctx, meta, None, body)
}
