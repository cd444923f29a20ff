use wasm_bindgen::JsCast;
use web_sys::{FocusEvent, HtmlElement, KeyboardEvent, Node};
use yew::prelude::*;
use yew_hooks::prelude::*;

#[derive(Clone, PartialEq)]
pub struct PortfolioItem {
    pub src: &'static str,
    pub thumb: &'static str,
    pub alt: &'static str,
    pub caption: &'static str,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LightboxState {
    #[default]
    Closed,
    Open { src: String, alt: String },
}

impl LightboxState {
    pub fn open(src: &str, alt: &str) -> Self {
        LightboxState::Open { src: src.to_string(), alt: alt.to_string() }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, LightboxState::Open { .. })
    }

    /// Image source to render; empty while closed so the old image is released.
    pub fn src(&self) -> &str {
        match self {
            LightboxState::Open { src, .. } => src,
            LightboxState::Closed => "",
        }
    }

    pub fn alt(&self) -> &str {
        match self {
            LightboxState::Open { alt, .. } => alt,
            LightboxState::Closed => "",
        }
    }

    pub fn closes_on(&self, key: &str) -> bool {
        self.is_open() && key == "Escape"
    }
}

pub fn opens_item(key: &str) -> bool {
    key == "Enter" || key == " "
}

fn focus(node: &NodeRef) {
    if let Some(element) = node.cast::<HtmlElement>() {
        let _ = element.focus();
    }
}

#[derive(Properties, PartialEq)]
pub struct PortfolioProps {
    pub items: Vec<PortfolioItem>,
}

/// Portfolio grid plus the modal it opens.
#[function_component(Portfolio)]
pub fn portfolio(props: &PortfolioProps) -> Html {
    let state = use_state(LightboxState::default);
    let modal_ref = use_node_ref();
    let close_ref = use_node_ref();

    {
        let close_ref = close_ref.clone();
        use_effect_with_deps(move |is_open| {
            if *is_open {
                focus(&close_ref);
            }
            || ()
        }, state.is_open());
    }

    let close = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.set(LightboxState::Closed))
    };

    {
        let state = state.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if state.closes_on(&e.key()) {
                log::debug!("Lightbox closed with Escape");
                state.set(LightboxState::Closed);
            }
        });
    }

    {
        // keep keyboard focus inside the open modal
        let state = state.clone();
        let modal_ref = modal_ref.clone();
        let close_ref = close_ref.clone();
        use_event_with_window("focusin", move |e: FocusEvent| {
            if !state.is_open() {
                return;
            }
            let Some(modal) = modal_ref.get() else {
                return;
            };
            let inside = e
                .target()
                .and_then(|t| t.dyn_into::<Node>().ok())
                .map(|target| modal.contains(Some(&target)))
                .unwrap_or(false);
            if !inside {
                focus(&close_ref);
            }
        });
    }

    let items = props.items.iter().map(|item| {
        let onclick = {
            let state = state.clone();
            let (src, alt) = (item.src, item.alt);
            Callback::from(move |_: MouseEvent| state.set(LightboxState::open(src, alt)))
        };
        let onkeydown = {
            let state = state.clone();
            let (src, alt) = (item.src, item.alt);
            Callback::from(move |e: KeyboardEvent| {
                if opens_item(&e.key()) {
                    e.prevent_default();
                    state.set(LightboxState::open(src, alt));
                }
            })
        };
        html! {
            <figure class="portfolio-item" data-src={item.src} tabindex="0" role="button" {onclick} {onkeydown}>
                <img src={item.thumb} alt={item.alt} loading="lazy" />
                <figcaption>{item.caption}</figcaption>
            </figure>
        }
    });

    let is_open = state.is_open();
    html! {
        <>
            <div class="portfolio-grid">
                { for items }
            </div>
            <div
                id="lightbox"
                ref={modal_ref}
                class={classes!("modal", is_open.then(|| "is-active"))}
                role="dialog"
                aria-modal="true"
                aria-hidden={(!is_open).to_string()}
            >
                <div class="modal-background" onclick={close.clone()}></div>
                <div class="modal-content">
                    <img id="lightbox-img" src={state.src().to_string()} alt={state.alt().to_string()} />
                </div>
                <button ref={close_ref} class="modal-close is-large" aria-label="close" onclick={close}></button>
            </div>
        </>
    }
}
