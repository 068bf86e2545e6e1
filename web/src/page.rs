use crate::audio::CelebrationAudio;
use crate::effects::{BubbleFieldView, CelebrationView, ConfettiView, FloatingHeartsView, LoaderView};
use crate::utils::*;
use clap::Args;
use gloo::timers::callback::{Interval, Timeout};
use omedeto_core as greeting;
use yew::prelude::*;

/// How long the loading placeholder stays up before the countdown appears
const LOADER_DELAY_MS: u32 = 1_500;

/// One countdown tick per second
const TICK_MS: u32 = 1_000;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    FinishLoading,
    Tick,
    Reveal,
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct PageProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<String>,

    /// Override the countdown length in seconds
    #[arg(long)]
    seconds: Option<greeting::Secs>,
}

/// Which visual subtree is active
#[derive(Copy, Clone, Debug, PartialEq)]
enum ViewMode {
    Loading,
    Waiting,
    Unlocked,
    Celebrating,
}

/// Pure render decision: everything the markup branches on comes from here.
/// The session only exists once the loading delay elapsed, so a missing
/// session means the loader is still up.
fn view_mode(session: Option<&greeting::RevealSession>) -> ViewMode {
    use greeting::SessionState::*;

    match session.map(greeting::RevealSession::cur_state) {
        None => ViewMode::Loading,
        Some(Waiting) => ViewMode::Waiting,
        Some(Unlocked) => ViewMode::Unlocked,
        Some(Celebrating) => ViewMode::Celebrating,
    }
}

#[derive(Debug)]
pub(crate) struct PageView {
    config: greeting::CountdownConfig,
    session: Option<greeting::RevealSession>,
    bubbles: greeting::BubbleField,
    audio: Option<CelebrationAudio>,
    countdown: Option<Interval>,
    _loading_delay: Timeout,
}

impl PageView {
    fn countdown_config(props: &PageProps) -> greeting::CountdownConfig {
        match props.seconds {
            Some(seconds) => greeting::CountdownConfig::new(seconds),
            None => greeting::CountdownConfig::default(),
        }
    }

    fn bubble_seed(props: &PageProps) -> u64 {
        match props.seed.as_deref().map(str::parse) {
            Some(Ok(seed)) => seed,
            Some(Err(err)) => {
                log::warn!("could not parse seed, falling back to random: {}", err);
                js_random_seed()
            }
            None => js_random_seed(),
        }
    }

    fn create_loading_delay(ctx: &Context<Self>) -> Timeout {
        let link = ctx.link().clone();
        Timeout::new(LOADER_DELAY_MS, move || link.send_message(Msg::FinishLoading))
    }

    fn create_countdown(ctx: &Context<Self>) -> Interval {
        let link = ctx.link().clone();
        Interval::new(TICK_MS, move || link.send_message(Msg::Tick))
    }

    fn seconds_left(&self) -> greeting::Secs {
        self.session
            .as_ref()
            .map_or(self.config.seconds, greeting::RevealSession::seconds_left)
    }
}

impl Component for PageView {
    type Message = Msg;
    type Properties = PageProps;

    fn create(ctx: &Context<Self>) -> Self {
        use greeting::BubbleGenerator;

        let props = ctx.props();
        let bubbles = greeting::RandomBubbleGenerator::new(Self::bubble_seed(props))
            .generate(greeting::FieldConfig::default());
        let audio = match CelebrationAudio::new() {
            Ok(audio) => Some(audio),
            Err(err) => {
                log::error!("celebration audio unavailable: {}", err);
                None
            }
        };

        Self {
            config: Self::countdown_config(props),
            session: None,
            bubbles,
            audio,
            countdown: None,
            _loading_delay: Self::create_loading_delay(ctx),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            FinishLoading => {
                self.session = Some(greeting::RevealSession::new(self.config));
                self.countdown = Some(Self::create_countdown(ctx));
                log::debug!("countdown started at {} seconds", self.config.seconds);
                true
            }
            Tick => {
                let Some(session) = self.session.as_mut() else {
                    return false;
                };
                let outcome = session.tick();
                if outcome.is_unlocked() {
                    // the tick source has done its job, release it
                    self.countdown.take();
                }
                outcome.has_update()
            }
            Reveal => {
                let Some(session) = self.session.as_mut() else {
                    return false;
                };
                let outcome = session.reveal();
                if outcome.started() {
                    if let Some(audio) = &self.audio {
                        audio.play();
                    }
                }
                outcome.has_update()
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let mode = view_mode(self.session.as_ref());
        if mode == ViewMode::Loading {
            return html! { <LoaderView/> };
        }

        let countdown_text = format_countdown(self.seconds_left());
        let cb_reveal = ctx.link().callback(|_: MouseEvent| Reveal);

        html! {
            <main class="omedeto">
                if mode == ViewMode::Celebrating {
                    <ConfettiView/>
                }
                <FloatingHeartsView/>
                <div class="card">
                    if mode == ViewMode::Celebrating {
                        <CelebrationView/>
                    } else {
                        <div class="countdown">
                            <h1>{"Your Special Day ❤"}</h1>
                            <p>{"Just a little more…"}</p>
                            <div class="clock">{countdown_text}</div>
                        </div>
                    }
                </div>
                if mode == ViewMode::Unlocked {
                    <button class="reveal" onclick={cb_reveal}>
                        <span>{"For you"}</span>
                        <span class="arrow">{"→"}</span>
                    </button>
                }
                <BubbleFieldView field={self.bubbles.clone()}/>
            </main>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::greeting::{CountdownConfig, RevealOutcome, RevealSession, Secs};
    use super::*;

    fn session(seconds: Secs) -> RevealSession {
        RevealSession::new(CountdownConfig::new_unchecked(seconds))
    }

    #[test]
    fn missing_session_shows_the_loader() {
        assert_eq!(view_mode(None), ViewMode::Loading);
    }

    #[test]
    fn full_run_unlocks_the_reveal_button() {
        let mut session = session(10);
        for _ in 0..10 {
            session.tick();
        }

        assert_eq!(view_mode(Some(&session)), ViewMode::Unlocked);
        assert_eq!(format_countdown(session.seconds_left()), "00 : 00 : 00");
    }

    #[test]
    fn early_reveal_keeps_the_countdown_on_screen() {
        let mut session = session(10);
        for _ in 0..7 {
            session.tick();
        }

        assert_eq!(session.reveal(), RevealOutcome::Ignored);
        assert_eq!(view_mode(Some(&session)), ViewMode::Waiting);
        assert_eq!(format_countdown(session.seconds_left()), "00 : 00 : 03");
    }

    #[test]
    fn reveal_switches_to_celebration_and_hides_the_button() {
        let mut session = session(1);
        session.tick();
        assert_eq!(session.reveal(), RevealOutcome::Started);

        assert_eq!(view_mode(Some(&session)), ViewMode::Celebrating);

        // further attempts change nothing
        assert_eq!(session.reveal(), RevealOutcome::Ignored);
        assert_eq!(view_mode(Some(&session)), ViewMode::Celebrating);
    }

    #[test]
    fn countdown_text_pads_to_two_digits() {
        assert_eq!(format_countdown(10), "00 : 00 : 10");
        assert_eq!(format_countdown(3), "00 : 00 : 03");
        assert_eq!(format_countdown(0), "00 : 00 : 00");
    }
}
