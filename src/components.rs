//! Pure Yew view components for the clock.
//!
//! Each one renders from props only; the element ids are the ones a test
//! harness looks for.

use session_clock::{LengthKind, Phase};
use yew::prelude::*;

/// Build a `{prefix}-{suffix}` element id.
fn element_id(kind: LengthKind, suffix: &str) -> String {
    format!("{}-{}", kind.id_prefix(), suffix)
}

/// Caption, current value and Down/Up buttons for one configured length.
#[derive(Properties, PartialEq)]
pub struct LengthControlProps {
    pub kind: LengthKind,
    pub minutes: u32,
    pub on_adjust: Callback<(LengthKind, i32)>,
}

#[function_component(LengthControl)]
pub fn length_control(props: &LengthControlProps) -> Html {
    let kind = props.kind;
    let step = |delta: i32| {
        let on_adjust = props.on_adjust.clone();
        Callback::from(move |_: MouseEvent| on_adjust.emit((kind, delta)))
    };

    html! {
        <div id={element_id(kind, "settings")} class="settings">
            <p id={element_id(kind, "label")}>
                { format!("{} Length", kind.label()) }
            </p>
            <div id={element_id(kind, "controls")} class="controls">
                <button id={element_id(kind, "decrement")} onclick={step(-1)}>
                    { "Down" }
                </button>
                <p id={element_id(kind, "length")}>{ props.minutes }</p>
                <button id={element_id(kind, "increment")} onclick={step(1)}>
                    { "Up" }
                </button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TimerDisplayProps {
    pub phase: Phase,
    /// Already formatted as `MM:SS`.
    pub time_left: AttrValue,
}

#[function_component(TimerDisplay)]
pub fn timer_display(props: &TimerDisplayProps) -> Html {
    html! {
        <div id="timer">
            <p id="timer-label">{ props.phase.label() }</p>
            <p id="time-left">{ props.time_left.clone() }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ClockControlsProps {
    pub running: bool,
    pub on_toggle: Callback<()>,
    pub on_reset: Callback<()>,
}

#[function_component(ClockControls)]
pub fn clock_controls(props: &ClockControlsProps) -> Html {
    html! {
        <div id="controls" class={classes!(props.running.then_some("running"))}>
            <button id="start_stop" onclick={props.on_toggle.reform(|_: MouseEvent| ())}>
                { "Start / Stop" }
            </button>
            <button id="reset" onclick={props.on_reset.reform(|_: MouseEvent| ())}>
                { "Reset" }
            </button>
        </div>
    }
}
