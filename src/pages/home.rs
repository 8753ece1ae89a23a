use std::rc::Rc;

use log::{debug, error, warn};
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::browser::{BrowserPage, BrowserScheduler, DomTarget};
use crate::carousel::{self, CarouselHandle, SLIDE_COUNT};
use crate::components::hero::Hero;
use crate::config::SiteConfig;
use crate::content::{slide_counter, Candidate, Content, Segment};
use crate::intro::{self, IntroFrame, IntroHandle};
use crate::reveal::{self, RevealHandle, Revealable};
use crate::styles::HOME_CSS;

/// Sections that slide in once scrolled into view.
const REVEAL_SECTIONS: usize = 4;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    #[prop_or_default]
    pub config: SiteConfig,
}

fn mount_intro(config: &SiteConfig, on_frame: Callback<IntroFrame>) -> Option<IntroHandle> {
    let mounted = BrowserPage::new().and_then(|page| {
        intro::mount(
            config,
            Rc::new(page),
            Rc::new(DomTarget::window()?),
            Rc::new(BrowserScheduler),
            on_frame.clone(),
        )
    });
    match mounted {
        Ok(handle) => Some(handle),
        Err(err) => {
            // Never leave the visitor stuck behind a locked intro.
            error!("Intro unavailable, showing the page directly: {}", err);
            on_frame.emit(IntroFrame::complete());
            None
        }
    }
}

fn mount_carousel(track: &NodeRef, prev: &NodeRef, next: &NodeRef) -> Option<CarouselHandle> {
    let (Some(track), Some(prev), Some(next)) = (
        track.cast::<HtmlElement>(),
        prev.cast::<HtmlElement>(),
        next.cast::<HtmlElement>(),
    ) else {
        debug!("Carousel elements not rendered, skipping");
        return None;
    };
    carousel::mount(
        Rc::new(track),
        Rc::new(DomTarget::new(prev)),
        Rc::new(DomTarget::new(next)),
        SLIDE_COUNT,
    )
    .map_err(|err| warn!("Carousel disabled: {}", err))
    .ok()
}

fn mount_reveal(sections: &[NodeRef], threshold: f64) -> Option<RevealHandle> {
    let targets: Vec<Rc<dyn Revealable>> = sections
        .iter()
        .filter_map(|section| section.cast::<Element>())
        .map(|element| Rc::new(element) as Rc<dyn Revealable>)
        .collect();
    BrowserPage::new()
        .and_then(|page| {
            reveal::mount(
                Rc::new(page),
                Rc::new(DomTarget::window()?),
                targets,
                threshold,
            )
        })
        .map_err(|err| warn!("Section reveal disabled: {}", err))
        .ok()
}

fn bio(segments: &[Segment]) -> Html {
    segments
        .iter()
        .map(|segment| match segment {
            Segment::Text(text) => html! { <>{text.clone()}</> },
            Segment::Link { label, href } => html! {
                <a href={href.clone()} target="_blank" rel="noopener noreferrer" class="inline-link">
                    {label.clone()}
                </a>
            },
        })
        .collect()
}

fn profile(candidate: &Candidate) -> Html {
    html! {
        <div class="candidate-profile">
            <div class="candidate-image">
                <img src={candidate.image.src.clone()} alt={candidate.image.alt.clone()} />
            </div>
            <h3>{candidate.name.clone()}</h3>
            <div class="candidate-info">{candidate.info.clone()}</div>
            <p>{bio(&candidate.bio)}</p>
        </div>
    }
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let content = use_memo(|_| Content::embedded(), ());
    let frame = use_state(IntroFrame::initial);
    let track_ref = use_node_ref();
    let prev_ref = use_node_ref();
    let next_ref = use_node_ref();
    let reveal_refs = use_memo(
        |_| {
            (0..REVEAL_SECTIONS)
                .map(|_| NodeRef::default())
                .collect::<Vec<_>>()
        },
        (),
    );

    // Intro: lock, slide the candidates in, unlock.
    {
        let on_frame = {
            let frame = frame.setter();
            Callback::from(move |next: IntroFrame| frame.set(next))
        };
        use_effect_with_deps(
            move |config: &SiteConfig| {
                let handle = mount_intro(config, on_frame);
                move || drop(handle)
            },
            props.config.clone(),
        );
    }

    // Carousel buttons only come alive after the intro.
    {
        let track_ref = track_ref.clone();
        let prev_ref = prev_ref.clone();
        let next_ref = next_ref.clone();
        use_effect_with_deps(
            move |complete: &bool| {
                let handle = if *complete {
                    mount_carousel(&track_ref, &prev_ref, &next_ref)
                } else {
                    None
                };
                move || drop(handle)
            },
            frame.is_complete(),
        );
    }

    {
        let reveal_refs = reveal_refs.clone();
        let threshold = props.config.reveal_threshold;
        use_effect_with_deps(
            move |_| {
                let handle = mount_reveal(&reveal_refs, threshold);
                move || drop(handle)
            },
            (),
        );
    }

    let content = match &*content {
        Ok(content) => content,
        Err(err) => {
            error!("Site content failed to parse: {}", err);
            return html! {
                <div class="campaign-container">
                    <p class="content-error">{"This page could not be loaded."}</p>
                </div>
            };
        }
    };
    let slide_total = content.slides.len();

    html! {
        <div class="campaign-container">
            <style>{HOME_CSS}</style>

            <Hero content={content.hero.clone()} frame={*frame} />

            <section class="platform-section">
                <div class="section-content slide-in-right" ref={reveal_refs[0].clone()}>
                    <h2>{"Our Platform"}</h2>
                    <div class="platform-grid">
                        { for content.platform.iter().map(|item| html! {
                            <div class="platform-item">
                                <h3>{item.title.clone()}</h3>
                                <p>{item.body.clone()}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="in-detail-section">
                <div class="section-content slide-in-bottom" ref={reveal_refs[1].clone()}>
                    <h2>{"In Detail"}</h2>
                    <div class="carousel-container">
                        <div class="carousel-track" ref={track_ref}>
                            { for content.slides.iter().enumerate().map(|(index, slide)| html! {
                                <div class="carousel-item">
                                    <h3>{slide.title.clone()}</h3>
                                    <p>{slide.body.clone()}</p>
                                    <div class="slide-counter">{slide_counter(index, slide_total)}</div>
                                </div>
                            }) }
                        </div>
                        <div class="carousel-controls">
                            <button class="nav-button prev" ref={prev_ref} aria-label="Previous slide">
                                {"\u{276E}"}
                            </button>
                            <button class="nav-button next" ref={next_ref} aria-label="Next slide">
                                {"\u{276F}"}
                            </button>
                        </div>
                    </div>
                </div>
            </section>

            <section class="about-section">
                <div class="section-content slide-in-left" ref={reveal_refs[2].clone()}>
                    <h2>{"About Us"}</h2>
                    <div class="candidate-profiles">
                        { for content.candidates.iter().map(profile) }
                    </div>
                </div>
            </section>

            <section class="video-section">
                <div class="section-content slide-in-right" ref={reveal_refs[3].clone()}>
                    <h2>{"Campaign Video"}</h2>
                    <div class="video-container">
                        <div class="video-transcript">
                            { for content.video.transcript.iter().map(|paragraph| html! {
                                <p class={classes!(paragraph.highlight.then(|| "highlight-text"))}>
                                    {paragraph.text.clone()}
                                </p>
                            }) }
                        </div>
                        <div class="video-cta">
                            <a href={content.video.url.clone()} target="_blank" rel="noopener noreferrer" class="watch-button">
                                <span class="play-icon">{"▶"}</span>
                                {"Watch Now!"}
                            </a>
                            <p class="video-note">{content.video.note.clone()}</p>
                        </div>
                    </div>
                </div>
            </section>

            <footer>
                <p>{content.footer.clone()}</p>
            </footer>

            {
                if frame.is_complete() {
                    html! {
                        <a
                            href={content.vote_url.clone()}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="vote-button"
                            aria-label="Vote Here"
                        >
                            {"Vote Here!"}
                        </a>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
