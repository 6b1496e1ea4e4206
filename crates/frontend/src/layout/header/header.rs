use crate::shared::icons::icon;
use contracts::content;
use contracts::domain::NavigationItem;
use contracts::state::MobileMenu;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
pub fn Header() -> impl IntoView {
    let pathname = use_location().pathname;
    let menu = RwSignal::new(MobileMenu::default());
    let items: &'static [NavigationItem] = &content::site().navigation;

    // Any route change collapses the mobile menu
    Effect::new(move |_| {
        pathname.track();
        menu.update(|m| m.close());
    });

    let nav_link = move |item: &'static NavigationItem, base: &'static str| {
        let is_active = move || pathname.with(|path| item.is_active(path));
        view! {
            <a
                href=item.path.as_str()
                class=base
                class:nav-link--active=is_active
                aria-current=move || is_active().then_some("page")
                on:click=move |_| menu.update(|m| m.close())
            >
                {item.label.as_str()}
            </a>
        }
    };

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <a href="/" class="header__title">"Water360"</a>

                <nav class="header__nav">
                    {items.iter().map(|item| nav_link(item, "nav-link")).collect_view()}
                </nav>

                <button
                    type="button"
                    class="button button--ghost header__menu-toggle"
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu.get().is_open().to_string()
                    on:click=move |_| menu.update(|m| m.toggle())
                >
                    {move || if menu.get().is_open() { icon("x") } else { icon("menu") }}
                </button>
            </div>

            <Show when=move || menu.get().is_open()>
                <nav class="header__mobile-nav">
                    {items.iter().map(|item| nav_link(item, "nav-link nav-link--block")).collect_view()}
                </nav>
            </Show>
        </header>
    }
}
