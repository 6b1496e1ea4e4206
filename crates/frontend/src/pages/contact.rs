use crate::shared::components::page_header::SectionHeader;
use crate::shared::components::ui::{Button, Input, Textarea};
use crate::shared::icons::icon;
use contracts::content;
use contracts::domain::{ContactField, ContactFormDraft, SubmitOutcome};
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    let draft = RwSignal::new(ContactFormDraft::default());
    let outcome = RwSignal::new(None::<SubmitOutcome>);

    let field_value =
        move |field: ContactField| Signal::derive(move || draft.with(|d| d.get(field).to_string()));
    let field_input = move |field: ContactField| {
        Callback::new(move |value: String| {
            draft.update(|d| d.update(field, value));
            outcome.set(None);
        })
    };

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let result = draft.try_update(|d| d.submit()).unwrap_or(SubmitOutcome::Incomplete);
        match result {
            SubmitOutcome::NotWired => log::info!("contact form submitted; no endpoint configured, draft discarded"),
            SubmitOutcome::Incomplete => log::debug!("contact form incomplete"),
        }
        outcome.set(Some(result));
    };

    let members = &content::site().team.members;

    view! {
        <div class="page page--narrow">
            <SectionHeader
                title="Contact Us"
                subtitle="Questions about the project? Send the team a message."
                primary=true
            />

            <div class="contact">
                <form class="form contact__form" on:submit=handle_submit novalidate=true>
                    <Input
                        label="Name"
                        id="contact-name"
                        value=field_value(ContactField::Name)
                        on_input=field_input(ContactField::Name)
                        placeholder="Your name"
                        required=true
                    />
                    <Input
                        label="Email"
                        id="contact-email"
                        input_type="email"
                        value=field_value(ContactField::Email)
                        on_input=field_input(ContactField::Email)
                        placeholder="you@example.com"
                        required=true
                    />
                    <Textarea
                        label="Message"
                        id="contact-message"
                        value=field_value(ContactField::Message)
                        on_input=field_input(ContactField::Message)
                        placeholder="How can we help?"
                        required=true
                    />

                    {move || outcome.get().map(|o| match o {
                        SubmitOutcome::NotWired => view! {
                            <p class="form__notice form__notice--info" role="status">
                                "Thanks! Online submission is not available yet, please email the team directly."
                            </p>
                        }.into_any(),
                        SubmitOutcome::Incomplete => view! {
                            <p class="form__notice form__notice--error" role="alert">
                                "Please fill in your name, a valid email address and a message."
                            </p>
                        }.into_any(),
                    })}

                    <Button button_type="submit">"Send message"</Button>
                </form>

                <aside class="contact__aside">
                    <h2 class="contact__aside-title">"Reach us directly"</h2>
                    <ul class="contact__list">
                        {members.iter().map(|m| view! {
                            <li>
                                <a href=m.mailto()>
                                    {icon("mail")}
                                    <span>{format!("{} ({})", m.name, m.role)}</span>
                                </a>
                            </li>
                        }).collect_view()}
                    </ul>
                </aside>
            </div>
        </div>
    }
}
