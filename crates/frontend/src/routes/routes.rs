use crate::layout::scroll_to_top::ScrollToTop;
use crate::layout::Shell;
use crate::pages::{
    about_us::AboutUsPage, contact::ContactPage, documents::DocumentsPage, domain::DomainPage,
    home::HomePage, milestones::MilestonesPage, presentations::PresentationsPage,
};
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <ScrollToTop />
        <Shell>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/domain") view=DomainPage />
                <Route path=path!("/milestones") view=MilestonesPage />
                <Route path=path!("/documents") view=DocumentsPage />
                <Route path=path!("/presentations") view=PresentationsPage />
                <Route path=path!("/about") view=AboutUsPage />
                <Route path=path!("/contact") view=ContactPage />
            </Routes>
        </Shell>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <section class="page page--narrow not-found">
            <h1 class="page__title">"Page not found"</h1>
            <a class="button button--primary" href="/">"Back to home"</a>
        </section>
    }
}
