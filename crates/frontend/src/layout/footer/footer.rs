use chrono::Datelike;
use contracts::domain::SiteRoute;
use leptos::prelude::*;

const QUICK_LINKS: [(SiteRoute, &str); 3] = [
    (SiteRoute::Domain, "Research Domain"),
    (SiteRoute::AboutUs, "About Us"),
    (SiteRoute::Contact, "Contact"),
];

const SOCIAL_LINKS: [(&str, &str); 2] = [
    ("GitHub", "https://github.com"),
    ("LinkedIn", "https://linkedin.com"),
];

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer data-zone="footer" class="footer">
            <div class="footer__grid">
                <div>
                    <h3 class="footer__heading">"Water360"</h3>
                    <p class="footer__text">"Autonomous IoT-Based Water Quality Monitoring System"</p>
                </div>
                <div>
                    <h3 class="footer__heading">"Quick Links"</h3>
                    <ul class="footer__links">
                        {QUICK_LINKS.iter().map(|(route, label)| view! {
                            <li><a href=route.path() class="footer__link">{*label}</a></li>
                        }).collect_view()}
                    </ul>
                </div>
                <div>
                    <h3 class="footer__heading">"Connect"</h3>
                    <div class="footer__social">
                        {SOCIAL_LINKS.iter().map(|(label, url)| view! {
                            <a href=*url target="_blank" rel="noopener noreferrer" class="footer__link">
                                {*label}
                            </a>
                        }).collect_view()}
                    </div>
                </div>
            </div>
            <div class="footer__bottom">
                <p>{format!("© {} Water360 Research Group. All rights reserved.", year)}</p>
            </div>
        </footer>
    }
}
