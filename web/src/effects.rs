use omedeto_core::{BubbleColor, BubbleField};
use yew::prelude::*;

/// Placeholder shown while the page pretends to load
#[function_component(LoaderView)]
pub(crate) fn loader_view() -> Html {
    html! {
        <div class="loader">
            <div class="spinner"/>
        </div>
    }
}

fn random_pct() -> f64 {
    js_sys::Math::random() * 100.0
}

fn random_color() -> &'static str {
    let index = (js_sys::Math::random() * BubbleColor::ALL.len() as f64) as usize;
    BubbleColor::ALL[index % BubbleColor::ALL.len()].css_class()
}

/// Full-screen particle burst, mounted only while celebrating
#[function_component(ConfettiView)]
pub(crate) fn confetti_view() -> Html {
    use js_sys::Math::random;

    const PIECES: usize = 60;

    html! {
        <div class="confetti">
            {
                for (0..PIECES).map(|_| {
                    let style = format!(
                        "left:{:.1}%;animation-duration:{:.2}s;animation-delay:{:.2}s",
                        random_pct(),
                        1.5 + random(),
                        random() * 0.5,
                    );
                    html! {
                        <span class={classes!("confetti-piece", random_color())} {style}/>
                    }
                })
            }
        </div>
    }
}

/// Continuously drifting hearts, mounted for the whole page lifetime
#[function_component(FloatingHeartsView)]
pub(crate) fn floating_hearts_view() -> Html {
    use js_sys::Math::random;

    const HEARTS: usize = 12;

    html! {
        <div class="hearts">
            {
                for (0..HEARTS).map(|_| {
                    let style = format!(
                        "left:{:.1}%;animation-duration:{:.2}s;animation-delay:{:.2}s",
                        random_pct(),
                        6.0 + random() * 4.0,
                        random() * 8.0,
                    );
                    html! {
                        <span class="heart" {style}>{"❤"}</span>
                    }
                })
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct BubbleFieldProps {
    pub field: BubbleField,
}

/// Background field of pulsing shapes, generated once at page creation
#[function_component(BubbleFieldView)]
pub(crate) fn bubble_field_view(props: &BubbleFieldProps) -> Html {
    html! {
        <div class="bubbles">
            {
                for props.field.iter().map(|bubble| {
                    let style = format!(
                        "left:{:.1}%;top:{:.1}%;width:{}px;height:{}px;\
                         animation-duration:{:.2}s;animation-delay:{:.2}s",
                        bubble.left_pct,
                        bubble.top_pct,
                        bubble.size_px,
                        bubble.size_px,
                        bubble.duration_secs,
                        bubble.delay_secs,
                    );
                    html! {
                        <div class={classes!("bubble", bubble.color.css_class())} {style}/>
                    }
                })
            }
        </div>
    }
}

/// Celebration card content
#[function_component(CelebrationView)]
pub(crate) fn celebration_view() -> Html {
    html! {
        <div class="celebration">
            <h1>{"Happy Birthday!"}</h1>
            <p>{"Wishing you the sweetest day ❤"}</p>
        </div>
    }
}
