use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::config::AUTOPLAY_DELAY_MS;
use crate::slider::autoplay::IntervalTimer;
use crate::slider::controller::SliderController;
use crate::slider::indicator::ClassIndicator;

#[derive(Clone, PartialEq)]
pub struct Slide {
    pub image: &'static str,
    pub alt: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cta_label: &'static str,
    pub cta_href: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct HeroSliderProps {
    pub slides: Vec<Slide>,
    #[prop_or(AUTOPLAY_DELAY_MS)]
    pub autoplay_delay_ms: u32,
    #[prop_or_default]
    pub on_cta: Option<Callback<&'static str>>,
}

pub enum SliderMsg {
    Prev,
    Next,
    GoTo(usize),
    Tick,
    Pause,
    Resume,
}

/// Maps a key pressed inside the slider to a navigation message.
pub fn key_to_msg(key: &str) -> Option<SliderMsg> {
    match key {
        "ArrowLeft" => Some(SliderMsg::Prev),
        "ArrowRight" => Some(SliderMsg::Next),
        _ => None,
    }
}

pub struct HeroSlider {
    slide_refs: Vec<NodeRef>,
    dot_refs: Vec<NodeRef>,
    controller: Option<SliderController<ClassIndicator, IntervalTimer>>,
}

impl Component for HeroSlider {
    type Message = SliderMsg;
    type Properties = HeroSliderProps;

    fn create(ctx: &Context<Self>) -> Self {
        let count = ctx.props().slides.len();
        Self {
            slide_refs: (0..count).map(|_| NodeRef::default()).collect(),
            dot_refs: (0..count).map(|_| NodeRef::default()).collect(),
            controller: None,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        // the indicators need mounted nodes, so the controller starts here
        let slides: Vec<ClassIndicator> = self.slide_refs.iter().cloned().map(ClassIndicator::slide).collect();
        let dots: Vec<ClassIndicator> = self.dot_refs.iter().cloned().map(ClassIndicator::dot).collect();
        let timer = IntervalTimer::new(ctx.link().callback(|_| SliderMsg::Tick));
        let controller = SliderController::initialize(
            slides,
            dots,
            timer,
            ctx.props().autoplay_delay_ms,
        );
        if !controller.is_inert() {
            log::info!(
                "Hero slider ready: {} slides, autoplay {}",
                controller.len(),
                if controller.is_autoplaying() { "on" } else { "off" }
            );
        }
        self.controller = Some(controller);
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let Some(controller) = self.controller.as_mut() else {
            return false;
        };
        match msg {
            SliderMsg::Prev => controller.prev(),
            SliderMsg::Next | SliderMsg::Tick => controller.next(),
            SliderMsg::GoTo(index) => controller.go_to(index as i64),
            SliderMsg::Pause => controller.pause(),
            SliderMsg::Resume => controller.resume(),
        }
        // indicators already updated the DOM
        false
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        log::debug!("Hero slider unmounted, stopping autoplay");
        self.controller = None;
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let props = ctx.props();

        let onkeydown = link.batch_callback(|e: KeyboardEvent| key_to_msg(&e.key()));

        html! {
            <section
                class="slider"
                aria-roledescription="carousel"
                tabindex="0"
                onmouseenter={link.callback(|_: MouseEvent| SliderMsg::Pause)}
                onmouseleave={link.callback(|_: MouseEvent| SliderMsg::Resume)}
                onfocusin={link.callback(|_: FocusEvent| SliderMsg::Pause)}
                onfocusout={link.callback(|_: FocusEvent| SliderMsg::Resume)}
                {onkeydown}
            >
                <div class="slides">
                    { for props.slides.iter().zip(&self.slide_refs).map(|(slide, node)| {
                        let on_cta = props.on_cta.clone();
                        let href = slide.cta_href;
                        let onclick = Callback::from(move |e: MouseEvent| {
                            if !href.starts_with('#') {
                                return;
                            }
                            if let Some(on_cta) = &on_cta {
                                e.prevent_default();
                                on_cta.emit(href);
                            }
                        });
                        html! {
                            <article class="slide" ref={node.clone()} aria-hidden="true">
                                <img src={slide.image} alt={slide.alt} />
                                <div class="slide-caption">
                                    <h2>{slide.title}</h2>
                                    <p>{slide.subtitle}</p>
                                    <a class="button is-primary" href={slide.cta_href} {onclick}>
                                        {slide.cta_label}
                                    </a>
                                </div>
                            </article>
                        }
                    }) }
                </div>
                <button class="slider-prev" aria-label="Previous slide"
                    onclick={link.callback(|_| SliderMsg::Prev)}>
                    {"‹"}
                </button>
                <button class="slider-next" aria-label="Next slide"
                    onclick={link.callback(|_| SliderMsg::Next)}>
                    {"›"}
                </button>
                <div class="slider-dots" role="tablist">
                    { for self.dot_refs.iter().enumerate().map(|(i, node)| html! {
                        <button
                            ref={node.clone()}
                            role="tab"
                            aria-selected="false"
                            aria-label={format!("Go to slide {}", i + 1)}
                            onclick={link.callback(move |_| SliderMsg::GoTo(i))}
                        />
                    }) }
                </div>
            </section>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys_navigate() {
        assert!(matches!(key_to_msg("ArrowLeft"), Some(SliderMsg::Prev)));
        assert!(matches!(key_to_msg("ArrowRight"), Some(SliderMsg::Next)));
        assert!(key_to_msg("Enter").is_none());
        assert!(key_to_msg(" ").is_none());
    }
}
