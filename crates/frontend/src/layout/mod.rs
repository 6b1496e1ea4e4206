pub mod footer;
pub mod header;
pub mod scroll_to_top;

use footer::Footer;
use header::Header;
use leptos::prelude::*;

/// Page frame shared by every route.
///
/// ```text
/// +------------------------------------------+
/// |        Header (sticky navigation)        |
/// +------------------------------------------+
/// |                 <main>                   |
/// +------------------------------------------+
/// |                 Footer                   |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Header />
            <main class="app-main">
                {children()}
            </main>
            <Footer />
        </div>
    }
}
