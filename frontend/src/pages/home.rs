use chrono::Datelike;
use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::hero_slider::{HeroSlider, Slide};
use crate::components::lightbox::{Portfolio, PortfolioItem};
use crate::components::nav::{navigate_callback, Header, MenuAction, MenuState};
use crate::config::SiteConfig;

pub fn hero_slides() -> Vec<Slide> {
    vec![
        Slide {
            image: "/assets/slides/workspace.jpg",
            alt: "Designers sketching a layout at a shared desk",
            title: "Websites that work as hard as you do",
            subtitle: "Strategy, design and build for small teams with big plans.",
            cta_label: "Start a project",
            cta_href: "#contact",
        },
        Slide {
            image: "/assets/slides/brand.jpg",
            alt: "Printed brand guidelines spread on a table",
            title: "Brands people remember",
            subtitle: "Identity systems that stay consistent from print to pixel.",
            cta_label: "See our work",
            cta_href: "#portfolio",
        },
        Slide {
            image: "/assets/slides/launch.jpg",
            alt: "Laptop showing a live analytics dashboard",
            title: "Launch, measure, improve",
            subtitle: "We stay on after go-live to tune what matters.",
            cta_label: "What we do",
            cta_href: "#services",
        },
    ]
}

pub fn portfolio_items() -> Vec<PortfolioItem> {
    vec![
        PortfolioItem {
            src: "/assets/work/bakery-full.jpg",
            thumb: "/assets/work/bakery-thumb.jpg",
            alt: "Storefront site for a neighbourhood bakery",
            caption: "Crumb & Co. storefront",
        },
        PortfolioItem {
            src: "/assets/work/clinic-full.jpg",
            thumb: "/assets/work/clinic-thumb.jpg",
            alt: "Appointment booking flow for a physiotherapy clinic",
            caption: "Motion Physio booking",
        },
        PortfolioItem {
            src: "/assets/work/festival-full.jpg",
            thumb: "/assets/work/festival-thumb.jpg",
            alt: "Poster series and landing page for a music festival",
            caption: "Northern Lights Fest",
        },
        PortfolioItem {
            src: "/assets/work/cafe-full.jpg",
            thumb: "/assets/work/cafe-thumb.jpg",
            alt: "Menu boards and brand mark for a coffee roaster",
            caption: "Ember Roasters identity",
        },
    ]
}

const SERVICES: &[(&str, &str)] = &[
    ("Web design", "Responsive sites built around what your visitors came to do."),
    ("Branding", "Logos, type and colour that hold together everywhere."),
    ("Content", "Copy and photography that say what you mean."),
];

#[function_component(Home)]
pub fn home() -> Html {
    let config = SiteConfig::current();
    let year = chrono::Local::now().year();
    let menu = use_reducer(MenuState::default);
    let navigate = navigate_callback(menu.dispatcher());
    let toggle_menu = {
        let menu = menu.dispatcher();
        Callback::from(move |_| menu.dispatch(MenuAction::Toggle))
    };

    html! {
        <>
            <Header
                menu_open={menu.open}
                on_toggle={toggle_menu}
                on_navigate={navigate.clone()}
                scroll_threshold={config.header_scroll_threshold}
            />
            <main id="top">
                <HeroSlider
                    slides={hero_slides()}
                    autoplay_delay_ms={config.autoplay_delay_ms}
                    on_cta={navigate}
                />

                <section id="services" class="section">
                    <h2 class="title">{"What we do"}</h2>
                    <div class="columns">
                        { for SERVICES.iter().map(|(name, blurb)| html! {
                            <div class="column">
                                <h3 class="subtitle">{*name}</h3>
                                <p>{*blurb}</p>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="portfolio" class="section">
                    <h2 class="title">{"Recent work"}</h2>
                    <Portfolio items={portfolio_items()} />
                </section>

                <section id="contact" class="section">
                    <h2 class="title">{"Get in touch"}</h2>
                    <ContactForm
                        endpoint={config.contact_endpoint}
                        submit_delay_ms={config.submit_delay_ms}
                    />
                </section>
            </main>
            <footer class="footer">
                <p>{format!("© {} Brightside Studio", year)}</p>
            </footer>
        </>
    }
}
