use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use std::rc::Rc;

use yew::prelude::*;

use crate::config::HEADER_SCROLL_THRESHOLD;

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#services", "Services"),
    ("#portfolio", "Work"),
    ("#contact", "Contact"),
];

pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// The element id an in-page link points at, if it is one.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Smoothly scrolls to the element behind an in-page link.
pub fn scroll_to_anchor(href: &str) {
    if anchor_target(href).is_none() {
        return;
    }
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    match document.query_selector(href) {
        Ok(Some(element)) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        Ok(None) => log::debug!("No element for anchor {}", href),
        Err(e) => log::warn!("Bad anchor selector {}: {:?}", href, e),
    }
}

/// Mobile menu visibility, shared by the header and every in-page link.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

pub enum MenuAction {
    Toggle,
    Close,
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: MenuAction) -> Rc<Self> {
        let open = match action {
            MenuAction::Toggle => !self.open,
            MenuAction::Close => false,
        };
        if open == self.open {
            return self;
        }
        MenuState { open }.into()
    }
}

/// Scrolls to `href` and closes the mobile menu. Every `#id` link on the
/// page goes through here.
pub fn navigate_callback(menu: UseReducerDispatcher<MenuState>) -> Callback<&'static str> {
    Callback::from(move |href: &'static str| {
        scroll_to_anchor(href);
        menu.dispatch(MenuAction::Close);
    })
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub menu_open: bool,
    pub on_toggle: Callback<()>,
    pub on_navigate: Callback<&'static str>,
    #[prop_or(HEADER_SCROLL_THRESHOLD)]
    pub scroll_threshold: f64,
}

fn anchor_click(on_navigate: &Callback<&'static str>, href: &'static str) -> Callback<MouseEvent> {
    let on_navigate = on_navigate.clone();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        on_navigate.emit(href);
    })
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let scrolled = use_state(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(move |threshold| {
            let threshold = *threshold;
            let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                let update = {
                    let scrolled = scrolled.clone();
                    move || {
                        if let Some(win) = web_sys::window() {
                            if let Ok(scroll_y) = win.scroll_y() {
                                scrolled.set(is_scrolled(scroll_y, threshold));
                            }
                        }
                    }
                };
                // initial state, in case the page loads scrolled
                update();
                let callback = Closure::<dyn Fn()>::new(update);
                if let Err(e) = window.add_event_listener_with_callback(
                    "scroll",
                    callback.as_ref().unchecked_ref(),
                ) {
                    log::warn!("Failed to watch scrolling: {:?}", e);
                }
                Box::new(move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                })
            } else {
                Box::new(|| ())
            };
            destructor
        }, props.scroll_threshold);
    }

    let toggle_menu = props.on_toggle.reform(|_: MouseEvent| ());

    let links = NAV_LINKS.iter().map(|(href, label)| {
        html! {
            <a class="navbar-item" href={*href} onclick={anchor_click(&props.on_navigate, *href)}>{*label}</a>
        }
    });

    let open = props.menu_open;
    html! {
        <header class={classes!("header", (*scrolled).then(|| "scrolled"))}>
            <nav class="navbar" role="navigation" aria-label="main navigation">
                <div class="navbar-brand">
                    <a class="navbar-item brand" href="#top" onclick={anchor_click(&props.on_navigate, "#top")}>
                        {"Brightside Studio"}
                    </a>
                    <button
                        class={classes!("navbar-burger", open.then(|| "is-active"))}
                        aria-label="menu"
                        aria-controls="mainMenu"
                        aria-expanded={open.to_string()}
                        onclick={toggle_menu}
                    >
                        <span aria-hidden="true"></span>
                        <span aria-hidden="true"></span>
                        <span aria-hidden="true"></span>
                    </button>
                </div>
                <div id="mainMenu" class={classes!("navbar-menu", open.then(|| "is-active"))}>
                    <div class="navbar-end">
                        { for links }
                    </div>
                </div>
            </nav>
        </header>
    }
}
