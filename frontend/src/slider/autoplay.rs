use gloo_timers::callback::Interval;
use yew::Callback;

/// Something that can run a recurring tick. Dropping the returned handle
/// cancels the schedule.
pub trait AutoplayTimer {
    type Handle;

    fn start(&self, period_ms: u32) -> Self::Handle;
}

/// Browser timer: each tick is emitted into a component callback, so it
/// arrives as an ordinary message and never interleaves with other handlers.
pub struct IntervalTimer {
    on_tick: Callback<()>,
}

impl IntervalTimer {
    pub fn new(on_tick: Callback<()>) -> Self {
        Self { on_tick }
    }
}

impl AutoplayTimer for IntervalTimer {
    type Handle = Interval;

    fn start(&self, period_ms: u32) -> Interval {
        let on_tick = self.on_tick.clone();
        Interval::new(period_ms, move || on_tick.emit(()))
    }
}
