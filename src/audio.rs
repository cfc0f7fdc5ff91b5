//! Binding between the page's `<audio id="beep">` element and the engine's
//! [`Cue`] trait.

use log::warn;
use session_clock::config::BEEP_ELEMENT_ID;
use session_clock::engine::Cue;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

/// Plays the beep. Looks the element up on every use since the engine is
/// created before the first render puts it in the document.
#[derive(Debug, Default)]
pub struct BeepCue;

impl BeepCue {
    fn element(&self) -> Option<HtmlAudioElement> {
        let audio = gloo_utils::document()
            .get_element_by_id(BEEP_ELEMENT_ID)
            .and_then(|el| el.dyn_into::<HtmlAudioElement>().ok());
        if audio.is_none() {
            warn!("No <audio id=\"{}\"> element found", BEEP_ELEMENT_ID);
        }
        audio
    }
}

/// Fire-and-forget: only a rejected play promise gets reported.
fn report_rejection(promise: js_sys::Promise) {
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = JsFuture::from(promise).await {
            warn!("Beep playback rejected: {:?}", err);
        }
    });
}

impl Cue for BeepCue {
    fn play_from_start(&mut self) {
        let Some(audio) = self.element() else {
            return;
        };
        audio.set_current_time(0.0);
        match audio.play() {
            Ok(promise) => report_rejection(promise),
            Err(err) => warn!("Beep playback failed: {:?}", err),
        }
    }

    fn silence(&mut self) {
        let Some(audio) = self.element() else {
            return;
        };
        if let Err(err) = audio.pause() {
            warn!("Could not pause beep: {:?}", err);
        }
        audio.set_current_time(0.0);
    }
}
