//! Circular image carousel on the landing page.

use crate::shared::autoplay::AutoplayTicker;
use crate::shared::icons::icon;
use contracts::domain::CarouselItem;
use contracts::state::Carousel;
use leptos::prelude::*;

#[component]
pub fn ShowcaseCarousel(items: &'static [CarouselItem]) -> impl IntoView {
    let carousel = match Carousel::new(items.len()) {
        Ok(c) => RwSignal::new(c),
        Err(e) => {
            log::warn!("showcase carousel not rendered: {}", e);
            return view! {
                <div class="carousel carousel--empty">"No showcase images yet."</div>
            }
            .into_any();
        }
    };

    let on_tick = Callback::new(move |_| {
        carousel.update(|c| {
            c.tick();
        });
    });

    let go_to = move |index: usize| {
        carousel.update(|c| match c.go_to(index) {
            Ok(()) => log::debug!("showcase -> slide {}", index),
            Err(e) => log::warn!("showcase: {}", e),
        });
    };

    view! {
        <div
            class="carousel"
            on:mouseenter=move |_| carousel.update(|c| c.hover_start())
            on:mouseleave=move |_| carousel.update(|c| c.hover_end())
        >
            <Show when=move || carousel.with(|c| c.autoplay().is_enabled())>
                <AutoplayTicker on_tick=on_tick />
            </Show>

            <div class="carousel__viewport">
                {items.iter().enumerate().map(|(i, item)| {
                    let active = move || carousel.with(|c| c.index() == i);
                    view! {
                        <figure
                            class="carousel__slide"
                            class:carousel__slide--active=active
                            aria-hidden=move || (!active()).to_string()
                        >
                            <img class="carousel__image" src=item.image_ref.as_str() alt=item.caption.as_str() />
                            <figcaption class="carousel__caption">
                                <h3>{item.caption.as_str()}</h3>
                                <p>{item.description.as_str()}</p>
                            </figcaption>
                        </figure>
                    }
                }).collect_view()}
            </div>

            <button
                class="carousel__arrow carousel__arrow--prev"
                aria-label="Previous slide"
                on:click=move |_| carousel.update(|c| c.prev())
            >
                {icon("chevron-left")}
            </button>
            <button
                class="carousel__arrow carousel__arrow--next"
                aria-label="Next slide"
                on:click=move |_| carousel.update(|c| c.next())
            >
                {icon("chevron-right")}
            </button>

            <div class="carousel__dots">
                {(0..items.len()).map(|i| view! {
                    <button
                        class="carousel__dot"
                        class:carousel__dot--active=move || carousel.with(|c| c.index() == i)
                        aria-label=format!("Go to slide {}", i + 1)
                        on:click=move |_| go_to(i)
                    ></button>
                }).collect_view()}
            </div>
        </div>
    }
    .into_any()
}
