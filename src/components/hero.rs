use std::rc::Rc;

use yew::prelude::*;

use crate::content::Hero as HeroContent;
use crate::intro::IntroFrame;

pub const HERO_IMAGES: u8 = 2;

/// Counts hero images that finished loading.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ImageLoads {
    pub loaded: u8,
}

impl ImageLoads {
    pub fn all_loaded(&self) -> bool {
        self.loaded >= HERO_IMAGES
    }
}

impl Reducible for ImageLoads {
    type Action = ();

    fn reduce(self: Rc<Self>, _: ()) -> Rc<Self> {
        Rc::new(Self {
            loaded: (self.loaded + 1).min(HERO_IMAGES),
        })
    }
}

pub fn hero_class(loads: &ImageLoads) -> &'static str {
    if loads.all_loaded() {
        "hero-section loaded"
    } else {
        "hero-section"
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub content: HeroContent,
    pub frame: IntroFrame,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let HeroProps { content, frame } = props;
    let loads = use_reducer(ImageLoads::default);

    let on_load = {
        let loads = loads.dispatcher();
        Callback::from(move |_: Event| loads.dispatch(()))
    };

    html! {
        <section class={hero_class(&loads)}>
            <div class="candidate-images">
                <div class="candidate-img left" style={frame.left_transform()}>
                    <img
                        src={content.left_image.src.clone()}
                        alt={content.left_image.alt.clone()}
                        onload={on_load.clone()}
                    />
                </div>
                <div class="candidate-img right" style={frame.right_transform()}>
                    <img
                        src={content.right_image.src.clone()}
                        alt={content.right_image.alt.clone()}
                        onload={on_load}
                    />
                </div>
            </div>
            <div class="hero-content">
                <h1 class="fade-in">{content.title.clone()}</h1>
                <h2 class="fade-in delay-1">{content.tagline.clone()}</h2>
            </div>
            {
                if !frame.is_complete() {
                    html! {
                        <div class="scroll-indicator">
                            <span>{"Scroll Down"}</span>
                            <div class="scroll-arrow"></div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_flips_once_both_images_load() {
        let loads = Rc::new(ImageLoads::default());
        assert_eq!(hero_class(&loads), "hero-section");

        let loads = loads.reduce(());
        assert_eq!(hero_class(&loads), "hero-section");

        let loads = loads.reduce(());
        assert_eq!(hero_class(&loads), "hero-section loaded");
    }

    #[test]
    fn counter_saturates() {
        let loads = (0..5).fold(Rc::new(ImageLoads::default()), |loads, _| loads.reduce(()));
        assert_eq!(loads.loaded, HERO_IMAGES);
    }
}
