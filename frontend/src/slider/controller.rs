//! Hero slider state machine.
//!
//! The controller owns the active index and the autoplay handle. It touches
//! the page only through [`Indicator`] and schedules ticks only through
//! [`AutoplayTimer`], so the same code drives the browser and the tests.

use thiserror::Error;

use super::autoplay::AutoplayTimer;
use super::indicator::Indicator;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SliderError {
    #[error("slider has no slides")]
    Empty,
    #[error("slider has {slides} slides but {dots} dots")]
    DotMismatch { slides: usize, dots: usize },
}

fn check_sets<I>(slides: &[I], dots: &[I]) -> Result<usize, SliderError> {
    if slides.is_empty() {
        return Err(SliderError::Empty);
    }
    if slides.len() != dots.len() {
        return Err(SliderError::DotMismatch { slides: slides.len(), dots: dots.len() });
    }
    Ok(slides.len())
}

pub struct SliderController<I: Indicator, T: AutoplayTimer> {
    slides: Vec<I>,
    dots: Vec<I>,
    current: usize,
    timer: T,
    delay_ms: u32,
    autoplay: Option<T::Handle>,
    inert: bool,
}

impl<I: Indicator, T: AutoplayTimer> SliderController<I, T> {
    /// Activates slide 0 and starts autoplay. A malformed slide/dot set
    /// yields an inert controller that ignores every call.
    pub fn initialize(slides: Vec<I>, dots: Vec<I>, timer: T, delay_ms: u32) -> Self {
        let inert = match check_sets(&slides, &dots) {
            Ok(n) => {
                log::debug!("Slider initialized with {} slides", n);
                false
            }
            Err(e) => {
                log::warn!("Slider disabled: {}", e);
                true
            }
        };

        let mut controller = Self {
            slides,
            dots,
            current: 0,
            timer,
            delay_ms,
            autoplay: None,
            inert,
        };

        if !controller.inert {
            for (slide, dot) in controller.slides.iter().zip(&controller.dots).skip(1) {
                slide.deactivate();
                dot.deactivate();
            }
            controller.show(0);
            controller.start_autoplay();
        }
        controller
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_inert(&self) -> bool {
        self.inert
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_some()
    }

    /// Jumps to `index`, wrapping in both directions, and resets the
    /// autoplay countdown.
    pub fn go_to(&mut self, index: i64) {
        if self.inert {
            return;
        }
        let n = self.slides.len() as i64;
        let target = index.rem_euclid(n) as usize;

        self.slides[self.current].deactivate();
        self.dots[self.current].deactivate();
        self.current = target;
        self.show(target);

        self.restart_autoplay();
    }

    pub fn next(&mut self) {
        self.go_to(self.current as i64 + 1);
    }

    pub fn prev(&mut self) {
        self.go_to(self.current as i64 - 1);
    }

    pub fn start_autoplay(&mut self) {
        if self.inert {
            return;
        }
        // at most one schedule may exist
        self.autoplay = None;
        self.autoplay = Some(self.timer.start(self.delay_ms));
    }

    pub fn stop_autoplay(&mut self) {
        self.autoplay = None;
    }

    pub fn restart_autoplay(&mut self) {
        self.stop_autoplay();
        self.start_autoplay();
    }

    /// Pointer entered or focus moved into the slider.
    pub fn pause(&mut self) {
        self.stop_autoplay();
    }

    /// Pointer left or focus moved out; restarts the full interval.
    pub fn resume(&mut self) {
        self.start_autoplay();
    }

    fn show(&self, index: usize) {
        self.slides[index].activate();
        self.dots[index].activate();
    }
}
