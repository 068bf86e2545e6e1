use thiserror::Error;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

/// Failure to set the celebration track up. A rejected play attempt is not
/// an error here: it is caught and logged where the play promise resolves.
#[derive(Error, Debug)]
pub(crate) enum AudioError {
    #[error("audio element could not be created: {0:?}")]
    Unavailable(JsValue),
}

/// Handle to the looping celebration track
#[derive(Debug)]
pub(crate) struct CelebrationAudio {
    element: HtmlAudioElement,
}

impl CelebrationAudio {
    const SRC: &'static str = "birthday.mp3";
    const VOLUME: f64 = 0.8;

    pub(crate) fn new() -> Result<Self, AudioError> {
        let element = HtmlAudioElement::new_with_src(Self::SRC).map_err(AudioError::Unavailable)?;
        element.set_preload("auto");
        element.set_loop(true);
        element.set_volume(Self::VOLUME);
        Ok(Self { element })
    }

    /// Start playback. Best-effort: the browser may refuse to play without a
    /// qualifying user gesture, in which case the refusal is logged and the
    /// visual celebration goes on without music.
    pub(crate) fn play(&self) {
        match self.element.play() {
            Ok(promise) => {
                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(err) = JsFuture::from(promise).await {
                        log::warn!("audio playback rejected: {:?}", err);
                    }
                });
            }
            Err(err) => log::warn!("audio playback could not start: {:?}", err),
        }
    }
}
