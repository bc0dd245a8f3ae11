use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use log::warn;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use yew::prelude::*;

use crate::config::{COUNTER_FRAME_MS, COUNTER_VISIBLE_THRESHOLD};
use crate::counter::CounterAnimation;
use crate::observer;

#[derive(Clone, PartialEq)]
pub struct Stat {
    pub target: AttrValue,
    pub suffix: AttrValue,
    pub label: AttrValue,
}

impl Stat {
    pub fn new(target: &'static str, suffix: &'static str, label: &'static str) -> Self {
        Self {
            target: target.into(),
            suffix: suffix.into(),
            label: label.into(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct StatsSectionProps {
    pub stats: Vec<Stat>,
    #[prop_or(AttrValue::Static("stats-section"))]
    pub class: AttrValue,
}

/// Counts every stat up once, the first time half the section is visible.
#[function_component(StatsSection)]
pub fn stats_section(props: &StatsSectionProps) -> Html {
    let section_ref = use_node_ref();
    let started = use_state(|| false);

    {
        let section_ref = section_ref.clone();
        let started = started.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(section) = section_ref.cast::<Element>() {
                    let has_animated = Rc::new(Cell::new(false));
                    observer::observe(
                        &[section],
                        COUNTER_VISIBLE_THRESHOLD,
                        None,
                        move |target, observer| {
                            if !has_animated.replace(true) {
                                started.set(true);
                            }
                            observer.unobserve(&target);
                        },
                    );
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class={props.class.to_string()} ref={section_ref}>
            <div class="stats-grid">
                { for props.stats.iter().map(|stat| html! {
                    <StatCounter stat={stat.clone()} started={*started} />
                }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub stat: Stat,
    pub started: bool,
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let text = use_state(|| "0".to_string());

    {
        let text = text.clone();
        let target = props.stat.target.clone();
        use_effect_with_deps(
            move |started| {
                if *started {
                    match CounterAnimation::parse(&target) {
                        Some(mut animation) => spawn_local(async move {
                            loop {
                                let frame = animation.step();
                                text.set(frame.text);
                                if frame.finished {
                                    break;
                                }
                                TimeoutFuture::new(COUNTER_FRAME_MS).await;
                            }
                        }),
                        None => warn!("stat counter target `{}` is not a number", target),
                    }
                }
                || ()
            },
            props.started,
        );
    }

    html! {
        <div class="stat-item fade-in">
            <div class="stat-value">
                <span class="stat-number" data-target={props.stat.target.clone()}>{(*text).clone()}</span>
                <span class="stat-suffix">{props.stat.suffix.clone()}</span>
            </div>
            <div class="stat-label">{props.stat.label.clone()}</div>
        </div>
    }
}
