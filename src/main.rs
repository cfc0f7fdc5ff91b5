//! Main module for the 25 + 5 clock using Yew.
//! Wires the clock hook into the view components and the beep element.

use session_clock::config::{BEEP_ELEMENT_ID, BEEP_SRC};
use session_clock::LengthKind;
use yew::prelude::*;

mod audio;
mod components;
mod hooks;

use components::{ClockControls, LengthControl, TimerDisplay};
use hooks::use_clock;

/// The clock: settings, countdown display, controls and the beep.
#[function_component]
pub fn App() -> Html {
    let clock = use_clock();
    let view = &clock.view;

    html! {
        <div>
            <header>{ "25 + 5 Clock" }</header>
            <main>
                <div id="settings">
                    <LengthControl
                        kind={LengthKind::Break}
                        minutes={view.break_length}
                        on_adjust={clock.on_adjust.clone()}
                    />
                    <LengthControl
                        kind={LengthKind::Session}
                        minutes={view.session_length}
                        on_adjust={clock.on_adjust.clone()}
                    />
                </div>

                <TimerDisplay phase={view.phase} time_left={AttrValue::from(view.time_left.clone())} />

                <ClockControls
                    running={view.running}
                    on_toggle={clock.on_toggle.clone()}
                    on_reset={clock.on_reset.clone()}
                />
            </main>
            <audio id={BEEP_ELEMENT_ID} preload="auto" src={BEEP_SRC}></audio>
        </div>
    }
}

/// Entry point: initializes Yew renderer for the App component.
fn main() {
    // Set the panic hook to log detailed errors to the console
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
