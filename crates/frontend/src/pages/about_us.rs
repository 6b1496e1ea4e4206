use crate::shared::components::card_animated::{stagger, CardAnimated};
use crate::shared::components::page_header::SectionHeader;
use crate::shared::icons::icon;
use contracts::content;
use contracts::domain::Person;
use leptos::prelude::*;

#[component]
pub fn AboutUsPage() -> impl IntoView {
    let team = &content::site().team;

    view! {
        <div class="page">
            <SectionHeader
                title="About Us"
                subtitle="The people behind Water360"
                primary=true
            />

            <section class="page__section">
                <div class="grid grid--3">
                    {team.members.iter().enumerate().map(|(i, person)| view! {
                        <CardAnimated delay_ms=stagger(i) class="member-card">
                            <MemberCard person=person />
                        </CardAnimated>
                    }).collect_view()}
                </div>
            </section>

            <section class="page__section supervisor">
                <SectionHeader title="Supervisor" />
                <div class="supervisor__card">
                    <h3 class="supervisor__name">{team.supervisor.name.as_str()}</h3>
                    <p class="supervisor__role">{team.supervisor.role.as_str()}</p>
                    <p class="supervisor__bio">{team.supervisor.bio.as_str()}</p>
                </div>
            </section>
        </div>
    }
}

#[component]
fn MemberCard(person: &'static Person) -> impl IntoView {
    let avatar = match person.image_ref.as_deref() {
        Some(src) => view! {
            <img class="member-card__avatar" src=src alt=person.name.as_str() />
        }
        .into_any(),
        None => view! {
            <div class="member-card__avatar member-card__avatar--initial" aria-hidden="true">
                {person.initial().to_string()}
            </div>
        }
        .into_any(),
    };

    view! {
        {avatar}
        <h3 class="member-card__name">{person.name.as_str()}</h3>
        <p class="member-card__role">{person.role.as_str()}</p>
        <p class="member-card__affiliation">{person.affiliation.as_str()}</p>
        {(!person.achievements.is_empty()).then(|| view! {
            <p class="member-card__achievements">{person.achievements.as_str()}</p>
        })}
        <a class="member-card__email" href=person.mailto()>
            {icon("mail")}
            <span>{person.email.as_str()}</span>
        </a>
    }
}
