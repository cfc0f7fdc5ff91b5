use crate::audio::BeepCue;
use gloo_timers::callback::Interval;
use session_clock::config::TICK_MS;
use session_clock::engine::{Scheduler, TickOutcome, TimerEngine};
use session_clock::{ClockView, LengthKind};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use yew::prelude::*;

type ClockEngine = TimerEngine<IntervalScheduler, BeepCue>;

/// Drives engine ticks from a browser interval.
///
/// Only holds a weak reference, so a tick that fires after the component is
/// gone finds nothing to update.
pub struct IntervalScheduler {
    engine: Weak<RefCell<ClockEngine>>,
    redraw: UseForceUpdateHandle,
}

impl Scheduler for IntervalScheduler {
    type Handle = Interval;

    fn every_tick(&self) -> Interval {
        let engine = self.engine.clone();
        let redraw = self.redraw.clone();
        Interval::new(TICK_MS, move || {
            let Some(engine) = engine.upgrade() else {
                return;
            };
            let outcome = engine.borrow_mut().on_tick();
            if outcome != TickOutcome::Ignored {
                redraw.force_update();
            }
        })
    }
}

/// What the clock component needs: the current display values and the
/// callbacks for every control.
#[derive(Clone)]
pub struct ClockHandle {
    pub view: ClockView,
    /// `(kind, delta)` from the increment/decrement buttons.
    pub on_adjust: Callback<(LengthKind, i32)>,
    pub on_toggle: Callback<()>,
    pub on_reset: Callback<()>,
}

/// Custom hook owning one clock engine for the lifetime of the component.
#[hook]
pub fn use_clock() -> ClockHandle {
    let redraw = use_force_update();

    // Created once; the scheduler needs a handle back to its own engine.
    let engine = {
        let redraw = redraw.clone();
        use_state(move || {
            Rc::new_cyclic(|weak: &Weak<RefCell<ClockEngine>>| {
                RefCell::new(TimerEngine::new(
                    IntervalScheduler {
                        engine: weak.clone(),
                        redraw,
                    },
                    BeepCue,
                ))
            })
        })
    };

    // Cancel the interval on unmount
    {
        let engine = (*engine).clone();
        use_effect_with((), move |_| move || engine.borrow_mut().teardown());
    }

    let on_adjust = {
        let engine = (*engine).clone();
        let redraw = redraw.clone();
        Callback::from(move |(kind, delta): (LengthKind, i32)| {
            if engine.borrow_mut().adjust(kind, delta).is_ok() {
                redraw.force_update();
            }
        })
    };

    let on_toggle = {
        let engine = (*engine).clone();
        let redraw = redraw.clone();
        Callback::from(move |_: ()| {
            engine.borrow_mut().toggle();
            redraw.force_update();
        })
    };

    let on_reset = {
        let engine = (*engine).clone();
        Callback::from(move |_: ()| {
            engine.borrow_mut().reset();
            redraw.force_update();
        })
    };

    let view = engine.borrow().state().view();

    ClockHandle {
        view,
        on_adjust,
        on_toggle,
        on_reset,
    }
}
