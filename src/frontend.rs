use js_sys::{Array, Math};
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions,
};
use yew::prelude::*;

use crate::content::{
    Certification, Project, CERTIFICATIONS, CV_DOWNLOAD_NAME, CV_HREF, HERO_HEADLINE,
    HOMELAB_FEATURES, HOMELAB_STATS, LINKEDIN_URL, NAV_LINKS, OWNER_ROLE, PROJECTS, SITE_OWNER,
    SOCIAL_LINKS, TRYHACKME_BADGE_URL, TRYHACKME_USER_ID,
};
use crate::state::{
    card_index, nav_is_condensed, scroll_progress, ActiveSectionTracker, OverlayController,
    RevealTracker, SectionObservation, SingleSelection, Typewriter, ACTIVE_SECTION_THRESHOLD,
    CARD_REVEAL_ROOT_MARGIN, CARD_REVEAL_THRESHOLD, SECTION_REVEAL_THRESHOLD, TYPEWRITER_TICK_MS,
};

const PAGE_PARTICLES: usize = 30;
const HERO_PARTICLES: usize = 20;
const CARD_STAGGER_SECONDS: f64 = 0.1;

fn scroll_offset() -> f64 {
    window().and_then(|win| win.scroll_y().ok()).unwrap_or(0.0)
}

fn document_scroll_height() -> f64 {
    window()
        .and_then(|win| win.document())
        .and_then(|document| document.document_element())
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(0.0)
}

fn viewport_height() -> f64 {
    window()
        .and_then(|win| win.inner_height().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0)
}

/// Smooth-scrolls to the section carrying `anchor` as its element id.
/// A dangling anchor is a no-op.
fn scroll_to_anchor(anchor: &str) {
    let Some(document) = window().and_then(|win| win.document()) else {
        return;
    };

    if let Some(section) = document.get_element_by_id(anchor) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        section.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

fn scroll_to_top() {
    if let Some(win) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&options);
    }
}

/// Applies the overlay scroll-lock to the document body.
fn apply_scroll_lock(locked: bool) {
    let Some(body) = window().and_then(|win| win.document()).and_then(|doc| doc.body()) else {
        return;
    };

    let value = if locked { "hidden" } else { "unset" };
    let _ = body.style().set_property("overflow", value);
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn intersection_observer(
    callback: &ObserverCallback,
    threshold: f64,
    root_margin: Option<&str>,
) -> Option<IntersectionObserver> {
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }

    IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()
}

fn observer_entries(entries: &Array) -> Vec<IntersectionObserverEntry> {
    entries
        .iter()
        .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
        .collect()
}

fn observe_matching_cards(section: &Element, selector: &str, observer: &IntersectionObserver) {
    let Ok(cards) = section.query_selector_all(selector) else {
        return;
    };

    for index in 0..cards.length() {
        if let Some(card) = cards
            .item(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        {
            observer.observe(&card);
        }
    }
}

/// Registers a window scroll listener for the component's lifetime.
#[hook]
fn use_scroll_listener<F>(on_scroll: F)
where
    F: Fn() + 'static,
{
    use_effect_with((), move |_| {
        let listener = Closure::<dyn FnMut()>::new(on_scroll);
        if let Some(win) = window() {
            let _ =
                win.add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
        }

        move || {
            if let Some(win) = window() {
                let _ = win.remove_event_listener_with_callback(
                    "scroll",
                    listener.as_ref().unchecked_ref(),
                );
            }
        }
    });
}

/// Observes the section's matching cards and feeds revealed indices into the
/// tracker until the section unmounts.
#[hook]
fn use_card_reveal_observer(
    section_ref: NodeRef,
    selector: &'static str,
    revealed: UseReducerDispatcher<RevealTracker>,
) {
    use_effect_with((), move |_| {
        let callback: ObserverCallback =
            Closure::new(move |entries: Array, _: IntersectionObserver| {
                for entry in observer_entries(&entries) {
                    if entry.is_intersecting() {
                        let index =
                            card_index(entry.target().get_attribute("data-index").as_deref());
                        revealed.dispatch(index);
                    }
                }
            });

        let observer = intersection_observer(
            &callback,
            CARD_REVEAL_THRESHOLD,
            Some(CARD_REVEAL_ROOT_MARGIN),
        );
        if let (Some(section), Some(observer)) = (section_ref.cast::<Element>(), observer.as_ref())
        {
            observe_matching_cards(&section, selector, observer);
        }

        move || {
            if let Some(observer) = observer {
                observer.disconnect();
            }
            drop(callback);
        }
    });
}

impl Reducible for RevealTracker {
    type Action = usize;

    fn reduce(self: Rc<Self>, index: usize) -> Rc<Self> {
        if self.is_revealed(index) {
            return self;
        }
        let mut next = (*self).clone();
        next.mark_revealed(index);
        Rc::new(next)
    }
}

impl Reducible for ActiveSectionTracker {
    type Action = Vec<SectionObservation>;

    fn reduce(self: Rc<Self>, batch: Vec<SectionObservation>) -> Rc<Self> {
        let mut next = (*self).clone();
        next.observe(&batch);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

impl Reducible for Typewriter {
    type Action = ();

    fn reduce(self: Rc<Self>, _action: ()) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.tick() {
            Rc::new(next)
        } else {
            self
        }
    }
}

enum CertModalAction {
    Open(&'static Certification),
    Close,
}

impl Reducible for OverlayController<&'static Certification> {
    type Action = CertModalAction;

    fn reduce(self: Rc<Self>, action: CertModalAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CertModalAction::Open(cert) => next.open(cert),
            CertModalAction::Close => next.close(),
        }
        Rc::new(next)
    }
}

fn particle_style(base_duration: f64, duration_spread: f64, delay_spread: f64) -> String {
    format!(
        "left: {:.2}%; top: {:.2}%; animation-duration: {:.2}s; animation-delay: {:.2}s;",
        Math::random() * 100.0,
        Math::random() * 100.0,
        base_duration + Math::random() * duration_spread,
        Math::random() * delay_spread,
    )
}

#[function_component(AnimatedBackground)]
fn animated_background() -> Html {
    html! {
        <div class="fixed inset-0 pointer-events-none overflow-hidden z-0">
            <div class="absolute inset-0 bg-gradient-base" />
            <div class="absolute inset-0 opacity-20 bg-grid bg-grid-drift" />
            { for (0..PAGE_PARTICLES).map(|index| html! {
                <div
                    key={index}
                    class="absolute w-1 h-1 bg-particle bg-particle-float rounded-full"
                    style={particle_style(5.0, 10.0, 5.0)}
                />
            }) }
            <div class="absolute top-1/4 left-1/4 glow-orb glow-orb-lg" />
            <div class="absolute bottom-1/4 right-1/4 glow-orb glow-orb-sm" />
            <div class="absolute inset-0 opacity-5 scan-lines" />
        </div>
    }
}

#[function_component(Navigation)]
fn navigation() -> Html {
    let condensed = use_state(|| false);
    let mobile_open = use_state(|| false);
    let active = use_reducer(ActiveSectionTracker::new);

    {
        let condensed = condensed.clone();
        use_scroll_listener(move || condensed.set(nav_is_condensed(scroll_offset())));
    }

    {
        let active = active.dispatcher();
        use_effect_with((), move |_| {
            let callback: ObserverCallback =
                Closure::new(move |entries: Array, _: IntersectionObserver| {
                    let batch: Vec<SectionObservation> = observer_entries(&entries)
                        .iter()
                        .filter_map(|entry| {
                            let id = entry.target().id();
                            let section = NAV_LINKS.iter().position(|link| link.anchor == id)?;
                            Some(SectionObservation {
                                section,
                                ratio: entry.intersection_ratio(),
                                is_intersecting: entry.is_intersecting(),
                            })
                        })
                        .collect();
                    active.dispatch(batch);
                });

            let observer = intersection_observer(&callback, ACTIVE_SECTION_THRESHOLD, None);
            if let (Some(document), Some(observer)) =
                (window().and_then(|win| win.document()), observer.as_ref())
            {
                for link in NAV_LINKS {
                    if let Some(section) = document.get_element_by_id(link.anchor) {
                        observer.observe(&section);
                    }
                }
            }

            move || {
                if let Some(observer) = observer {
                    observer.disconnect();
                }
                drop(callback);
            }
        });
    }

    let go_to = {
        let mobile_open = mobile_open.clone();
        Callback::from(move |anchor: &'static str| {
            scroll_to_anchor(anchor);
            mobile_open.set(false);
        })
    };

    let toggle_mobile = {
        let mobile_open = mobile_open.clone();
        Callback::from(move |_: MouseEvent| mobile_open.set(!*mobile_open))
    };

    let pill_class = if *condensed {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 -translate-y-full pointer-events-none"
    };
    let mobile_class = if *mobile_open {
        "opacity-100 visible"
    } else {
        "opacity-0 invisible"
    };
    let header_class = if *condensed {
        "opacity-0 pointer-events-none"
    } else {
        "opacity-100"
    };

    html! {
        <>
            // Floating pill, shown once the page scrolls past the hero top.
            <nav class={format!("fixed top-4 left-1/2 -translate-x-1/2 z-50 transition-all duration-500 {pill_class}")}>
                <div class="glass rounded-full px-2 py-2 flex items-center gap-1 shadow-card">
                    <div class="flex items-center gap-2 px-3 py-2 border-r border-white/10">
                        <span class="font-mono text-sm text-white/80">{"MSK"}</span>
                    </div>

                    <div class="hidden md:flex items-center gap-1">
                        { for NAV_LINKS.iter().enumerate().map(|(index, link)| {
                            let onclick = {
                                let go_to = go_to.clone();
                                let anchor = link.anchor;
                                Callback::from(move |_: MouseEvent| go_to.emit(anchor))
                            };
                            let link_class = if active.is_active(index) {
                                "text-cyber-green bg-cyber-green/10"
                            } else {
                                "text-white/60 hover:text-white hover:bg-white/5"
                            };
                            html! {
                                <button
                                    key={link.name}
                                    {onclick}
                                    class={format!("relative px-4 py-2 text-xs font-mono tracking-wider transition-all duration-300 rounded-full {link_class}")}
                                >
                                    {link.name}
                                </button>
                            }
                        }) }
                    </div>

                    <a
                        href={CV_HREF}
                        download={CV_DOWNLOAD_NAME}
                        class="flex items-center gap-2 px-3 py-2 ml-1 bg-cyber-green/10 hover:bg-cyber-green/20 text-cyber-green rounded-full transition-all duration-300 border border-cyber-green/30 hover:border-cyber-green/50"
                    >
                        <span aria-hidden="true">{"↓"}</span>
                        <span class="text-xs font-mono hidden sm:block">{"CV"}</span>
                    </a>

                    <button
                        onclick={toggle_mobile}
                        class="md:hidden p-2 text-white/60 hover:text-white transition-colors"
                        aria-label="Toggle menu"
                    >
                        <span aria-hidden="true">{ if *mobile_open { "✕" } else { "☰" } }</span>
                    </button>
                </div>
            </nav>

            // Fullscreen mobile menu.
            <div class={format!("fixed inset-0 z-40 bg-cyber-black/98 backdrop-blur-xl transition-all duration-500 md:hidden {mobile_class}")}>
                <div class="flex flex-col items-center justify-center h-full gap-6">
                    { for NAV_LINKS.iter().map(|link| {
                        let onclick = {
                            let go_to = go_to.clone();
                            let anchor = link.anchor;
                            Callback::from(move |_: MouseEvent| go_to.emit(anchor))
                        };
                        html! {
                            <button
                                key={link.name}
                                {onclick}
                                class="text-xl font-heading text-white/80 hover:text-cyber-green transition-colors"
                            >
                                {link.name}
                            </button>
                        }
                    }) }
                    <a
                        href={CV_HREF}
                        download={CV_DOWNLOAD_NAME}
                        class="mt-6 flex items-center gap-2 px-5 py-2.5 bg-cyber-green/10 text-cyber-green rounded-full border border-cyber-green/30"
                    >
                        <span aria-hidden="true">{"↓"}</span>
                        <span class="font-mono text-sm">{"Download CV"}</span>
                    </a>
                </div>
            </div>

            // Static header over the hero, hidden once condensed.
            <div class={format!("fixed top-0 left-0 right-0 z-40 transition-all duration-500 {header_class}")}>
                <div class="max-w-7xl mx-auto px-4 sm:px-6 py-4 sm:py-6 flex items-center justify-between">
                    <span class="font-mono text-xs sm:text-sm text-white/40">{SITE_OWNER}</span>
                    <div class="hidden md:flex items-center gap-6">
                        { for NAV_LINKS.iter().map(|link| {
                            let onclick = {
                                let go_to = go_to.clone();
                                let anchor = link.anchor;
                                Callback::from(move |_: MouseEvent| go_to.emit(anchor))
                            };
                            html! {
                                <button
                                    key={link.name}
                                    {onclick}
                                    class="text-xs font-mono text-white/40 hover:text-cyber-green transition-colors"
                                >
                                    {link.name}
                                </button>
                            }
                        }) }
                    </div>
                    <a
                        href={CV_HREF}
                        download={CV_DOWNLOAD_NAME}
                        class="flex items-center gap-1.5 text-xs font-mono text-cyber-green/60 hover:text-cyber-green transition-colors"
                    >
                        <span aria-hidden="true">{"↓"}</span>
                        <span class="hidden sm:inline">{"CV"}</span>
                    </a>
                </div>
            </div>
        </>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let revealed = use_state(|| false);
    let typed = use_reducer(|| Typewriter::new(HERO_HEADLINE));

    {
        let revealed = revealed.clone();
        let typed = typed.dispatcher();
        use_effect_with((), move |_| {
            revealed.set(true);

            let tick = Closure::<dyn FnMut()>::new(move || typed.dispatch(()));
            let interval = window().and_then(|win| {
                win.set_interval_with_callback_and_timeout_and_arguments_0(
                    tick.as_ref().unchecked_ref(),
                    TYPEWRITER_TICK_MS,
                )
                .ok()
            });

            move || {
                if let (Some(win), Some(interval)) = (window(), interval) {
                    win.clear_interval_with_handle(interval);
                }
                drop(tick);
            }
        });
    }

    let view_projects = Callback::from(|_: MouseEvent| scroll_to_anchor("projects"));

    let identity_class = if *revealed {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-10"
    };
    let badge_class = if *revealed {
        "opacity-100 translate-x-0"
    } else {
        "opacity-0 translate-x-10"
    };

    html! {
        <section class="relative min-h-screen flex items-center justify-center overflow-hidden">
            <div class="absolute inset-0">
                <div class="absolute inset-0 opacity-30 bg-grid-fine" />
            </div>

            <div class="absolute inset-0 overflow-hidden">
                { for (0..HERO_PARTICLES).map(|index| html! {
                    <div
                        key={index}
                        class="absolute w-1 h-1 bg-particle-bright hero-float rounded-full"
                        style={particle_style(3.0, 4.0, 2.0)}
                    />
                }) }
            </div>

            <div class="absolute top-1/4 left-1/4 w-96 h-96 bg-cyber-green/10 rounded-full blur-3xl animate-pulse" />
            <div class="absolute bottom-1/4 right-1/4 w-80 h-80 bg-cyber-green/5 rounded-full blur-3xl animate-pulse" style="animation-delay: 1s;" />

            <div class="relative z-10 max-w-7xl mx-auto px-4 sm:px-6 py-20">
                <div class="grid lg:grid-cols-12 gap-8 lg:gap-16 items-center">
                    <div class={format!("lg:col-span-7 space-y-6 transition-all duration-1000 {identity_class}")}>
                        <div class="space-y-2">
                            <h1 class="font-heading text-4xl sm:text-5xl lg:text-6xl font-bold text-white tracking-tight">
                                <span class="text-cyber-green">{typed.text().to_string()}</span>
                                <span class="terminal-cursor" />
                            </h1>
                            <p class="font-heading text-lg sm:text-xl text-white/60 font-light tracking-wide">
                                {OWNER_ROLE}
                            </p>
                        </div>

                        <div class="space-y-4 text-white/50 leading-relaxed max-w-2xl text-sm sm:text-base">
                            <p>
                                {"This website is a dedicated space to showcase my professional certifications, \
                                  hands-on technical projects, and homelab research. It documents my active \
                                  participation in the tech community through hackathons and continuous \
                                  experimentation with hardware and software integration."}
                            </p>
                            <p class="text-sm text-white/40">
                                {"While this portfolio highlights my independent and academic projects, my \
                                  practical work experience is detailed in full on my LinkedIn profile and \
                                  my downloadable CV."}
                            </p>
                        </div>

                        <div class="flex flex-wrap gap-3 pt-2">
                            <button
                                onclick={view_projects}
                                class="group px-5 py-2.5 bg-cyber-green text-cyber-black font-mono text-sm font-medium rounded-lg hover:bg-cyber-green-dim transition-all duration-300 flex items-center gap-2"
                            >
                                {"VIEW_PROJECTS"}
                                <span class="group-hover:translate-y-1 transition-transform" aria-hidden="true">{"⌄"}</span>
                            </button>
                            <a
                                href={LINKEDIN_URL}
                                target="_blank"
                                rel="noopener noreferrer"
                                class="px-5 py-2.5 border border-white/20 text-white/80 font-mono text-sm rounded-lg hover:border-cyber-green/50 hover:text-cyber-green transition-all duration-300"
                            >
                                {"LINKEDIN"}
                            </a>
                        </div>
                    </div>

                    <div class={format!("lg:col-span-5 relative transition-all duration-1000 delay-300 {badge_class}")}>
                        <div class="relative group max-w-md ml-auto">
                            <div class="absolute -inset-1 badge-glow rounded-2xl blur-xl opacity-0 group-hover:opacity-100 transition-opacity duration-500" />

                            <div class="relative glass rounded-2xl p-6 sm:p-8 border border-white/10 hover:border-cyber-green/30 transition-all duration-500">
                                <div class="flex items-center justify-between mb-4">
                                    <div class="flex items-center gap-1.5">
                                        <div class="w-2.5 h-2.5 rounded-full bg-red-500/80" />
                                        <div class="w-2.5 h-2.5 rounded-full bg-yellow-500/80" />
                                        <div class="w-2.5 h-2.5 rounded-full bg-green-500/80" />
                                    </div>
                                    <span class="font-mono text-xs text-white/40">{"tryhackme.com"}</span>
                                </div>

                                <div class="relative overflow-hidden rounded-xl bg-cyber-black/50 py-6 px-2 flex items-center justify-center w-full">
                                    <iframe
                                        src={TRYHACKME_BADGE_URL}
                                        style="border: none; width: 329px; height: 88px;"
                                        scrolling="no"
                                        loading="lazy"
                                        title="TryHackMe Badge"
                                    />
                                </div>

                                <div class="mt-4 flex items-center justify-between">
                                    <span class="font-mono text-xs text-white/50">{"Verified Profile"}</span>
                                    <span class="font-mono text-xs text-cyber-green/60">{format!("ID: {TRYHACKME_USER_ID}")}</span>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <div class="absolute bottom-8 left-1/2 -translate-x-1/2 flex flex-col items-center gap-2">
                <span class="font-mono text-xs text-white/30 tracking-widest">{"SCROLL"}</span>
                <div class="w-px h-8 scroll-hint" />
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct SectionHeaderProps {
    eyebrow: AttrValue,
    title: AttrValue,
    blurb: AttrValue,
}

#[function_component(SectionHeader)]
fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class="mb-10 lg:mb-14">
            <div class="flex items-center gap-3 mb-3">
                <div class="w-8 h-px bg-cyber-green/50" />
                <span class="font-mono text-xs text-cyber-green/60 tracking-widest">
                    {props.eyebrow.clone()}
                </span>
            </div>
            <h2 class="font-heading text-3xl sm:text-4xl lg:text-5xl font-bold text-white">
                {props.title.clone()}
            </h2>
            <p class="mt-3 text-white/50 max-w-2xl text-sm sm:text-base">
                {props.blurb.clone()}
            </p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: &'static Project,
    index: usize,
    revealed: bool,
    hovered: bool,
    on_hover: Callback<Option<u32>>,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;

    let reveal_class = if props.revealed {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-12"
    };
    let stagger = format!(
        "transition-delay: {:.1}s;",
        props.index as f64 * CARD_STAGGER_SECONDS
    );

    let onmouseenter = {
        let on_hover = props.on_hover.clone();
        let id = project.id;
        Callback::from(move |_: MouseEvent| on_hover.emit(Some(id)))
    };
    let onmouseleave = {
        let on_hover = props.on_hover.clone();
        Callback::from(move |_: MouseEvent| on_hover.emit(None))
    };

    let glow_class = if props.hovered { "opacity-50" } else { "opacity-0" };
    let image_class = if props.hovered { "scale-105" } else { "scale-100" };
    let shade_class = if props.hovered { "opacity-30" } else { "opacity-50" };
    let action_class = if props.hovered {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 -translate-y-1"
    };
    let accent_class = if props.hovered { "opacity-100" } else { "opacity-0" };

    html! {
        <div
            data-index={props.index.to_string()}
            class={format!("project-card group relative transition-all duration-700 {reveal_class}")}
            style={stagger}
            {onmouseenter}
            {onmouseleave}
        >
            <div class={format!("absolute -inset-0.5 bg-gradient-to-r {} rounded-xl blur-lg transition-opacity duration-500 {glow_class}", project.accent)} />

            <div class="relative h-full bg-cyber-dark rounded-xl border border-white/10 overflow-hidden hover:border-cyber-green/30 transition-all duration-500">
                <div class="relative h-40 sm:h-44 overflow-hidden">
                    <div class={format!("absolute inset-0 bg-gradient-to-r {} opacity-40", project.accent)} />
                    <img
                        src={project.image}
                        alt={project.title}
                        class={format!("w-full h-full object-cover transition-transform duration-500 {image_class}")}
                    />
                    <div class={format!("absolute inset-0 bg-cyber-black/50 transition-opacity duration-300 {shade_class}")} />

                    <div class={format!("absolute top-3 right-3 transition-all duration-300 {action_class}")}>
                        <button
                            class="w-7 h-7 bg-cyber-black/80 backdrop-blur-sm rounded-md flex items-center justify-center border border-white/10 hover:border-cyber-green/50 transition-all duration-300"
                            aria-label="Open project"
                        >
                            <span class="text-white/70" aria-hidden="true">{"↗"}</span>
                        </button>
                    </div>
                </div>

                <div class="p-4 sm:p-5 space-y-3">
                    <h3 class="font-heading text-base sm:text-lg font-semibold text-white group-hover:text-cyber-green transition-colors duration-300 line-clamp-2">
                        {project.title}
                    </h3>
                    <p class="text-sm text-white/50 leading-relaxed line-clamp-3">
                        {project.description}
                    </p>

                    <div class="flex flex-wrap gap-1.5 pt-1">
                        { for project.tags.iter().map(|tag| html! {
                            <span
                                key={*tag}
                                class="px-2 py-0.5 text-xs font-mono text-white/40 bg-white/5 rounded border border-white/10"
                            >
                                {*tag}
                            </span>
                        }) }
                    </div>
                </div>

                <div class={format!("absolute bottom-0 left-0 right-0 h-px card-accent transition-opacity duration-300 {accent_class}")} />
            </div>
        </div>
    }
}

#[function_component(Projects)]
fn projects() -> Html {
    let revealed = use_reducer(RevealTracker::new);
    let hovered = use_state(SingleSelection::<u32>::none);
    let section_ref = use_node_ref();

    use_card_reveal_observer(section_ref.clone(), ".project-card", revealed.dispatcher());

    let on_hover = {
        let hovered = hovered.clone();
        Callback::from(move |value: Option<u32>| {
            let mut next = (*hovered).clone();
            match value {
                Some(id) => next.select(id),
                None => next.clear(),
            }
            hovered.set(next);
        })
    };

    html! {
        <section id="projects" ref={section_ref} class="relative py-16 lg:py-24">
            <div class="absolute top-0 left-0 right-0 section-divider" />

            <div class="relative z-10 max-w-7xl mx-auto px-4 sm:px-6">
                <SectionHeader
                    eyebrow="FEATURED WORK"
                    title="Projects"
                    blurb="A collection of hands-on technical projects demonstrating expertise in IoT, cybersecurity, and rapid hardware prototyping."
                />

                <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-4 sm:gap-6">
                    { for PROJECTS.iter().enumerate().map(|(index, project)| html! {
                        <ProjectCard
                            key={project.id}
                            {project}
                            {index}
                            revealed={revealed.is_revealed(index)}
                            hovered={hovered.is(&project.id)}
                            on_hover={on_hover.clone()}
                        />
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct StatBoxProps {
    label: AttrValue,
    value: AttrValue,
}

#[function_component(StatBox)]
fn stat_box(props: &StatBoxProps) -> Html {
    html! {
        <div class="p-3 sm:p-4 bg-cyber-dark/50 rounded-lg border border-white/5">
            <p class="font-mono text-[10px] sm:text-xs text-white/40 mb-0.5">{props.label.clone()}</p>
            <p class="font-heading text-lg sm:text-xl font-bold text-cyber-green">{props.value.clone()}</p>
        </div>
    }
}

#[function_component(Homelab)]
fn homelab() -> Html {
    let revealed = use_state(|| false);
    let expanded = use_state(|| false);
    let section_ref = use_node_ref();

    {
        let revealed = revealed.clone();
        let section_ref = section_ref.clone();
        use_effect_with((), move |_| {
            let callback: ObserverCallback =
                Closure::new(move |entries: Array, _: IntersectionObserver| {
                    if observer_entries(&entries)
                        .iter()
                        .any(|entry| entry.is_intersecting())
                    {
                        revealed.set(true);
                    }
                });

            let observer = intersection_observer(&callback, SECTION_REVEAL_THRESHOLD, None);
            if let (Some(section), Some(observer)) =
                (section_ref.cast::<Element>(), observer.as_ref())
            {
                observer.observe(&section);
            }

            move || {
                if let Some(observer) = observer {
                    observer.disconnect();
                }
                drop(callback);
            }
        });
    }

    let toggle_expanded = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(!*expanded))
    };

    let card_class = if *revealed {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-12"
    };
    let frame_class = if *expanded {
        "border-cyber-green/30"
    } else {
        "hover:border-white/20"
    };
    let body_class = if *expanded {
        "h-[400px] sm:h-[450px]"
    } else {
        "h-[220px] sm:h-[260px]"
    };
    let image_class = if *expanded {
        "scale-105 opacity-100"
    } else {
        "scale-100 opacity-60"
    };
    let veil_class = if *expanded { "opacity-80" } else { "opacity-90" };
    let detail_class = if *expanded {
        "translate-y-0 opacity-100"
    } else {
        "translate-y-2 opacity-0"
    };
    let features_class = if *expanded {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-4"
    };
    let teaser_class = if *expanded {
        "opacity-0 translate-y-2"
    } else {
        "opacity-100 translate-y-0"
    };
    let stats_class = if *revealed {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-6"
    };

    html! {
        <section id="homelab" ref={section_ref} class="relative py-16 lg:py-24 overflow-hidden">
            <div class="absolute top-0 left-0 right-0 section-divider" />

            <div class="relative z-10 max-w-7xl mx-auto px-4 sm:px-6">
                <SectionHeader
                    eyebrow="INFRASTRUCTURE"
                    title="Homelab"
                    blurb="A containerized cybersecurity environment for monitoring real-world attacks, analyzing threat patterns, and mastering network security."
                />

                <div class={format!("relative transition-all duration-1000 {card_class}")}>
                    <div
                        class={format!("relative overflow-hidden rounded-xl border border-white/10 bg-cyber-dark transition-all duration-500 cursor-pointer {frame_class}")}
                        onclick={toggle_expanded}
                    >
                        <div class="flex items-center justify-between px-4 py-3 border-b border-white/5 bg-white/5">
                            <div class="flex items-center gap-2">
                                <span class="font-mono text-sm text-white/80">{"T-Pot Honeypot"}</span>
                                <span class="px-2 py-0.5 text-xs font-mono text-cyber-green bg-cyber-green/10 rounded">
                                    {"Active"}
                                </span>
                            </div>
                            <div class="flex items-center gap-1.5">
                                <div class="w-1.5 h-1.5 bg-cyber-green rounded-full status-pulse" />
                                <span class="font-mono text-xs text-white/40">{"Online"}</span>
                            </div>
                        </div>

                        <div class={format!("relative transition-all duration-700 {body_class}")}>
                            <div class="absolute inset-0">
                                <img
                                    src="images/Tpot.jpg"
                                    alt="T-Pot Dashboard"
                                    class={format!("w-full h-full object-cover transition-all duration-700 {image_class}")}
                                />
                                <div class={format!("absolute inset-0 card-veil transition-opacity duration-500 {veil_class}")} />
                            </div>

                            <div class="absolute inset-0 p-4 sm:p-6 flex flex-col justify-end">
                                <div class={format!("transition-all duration-500 {detail_class}")}>
                                    <h3 class="font-heading text-lg sm:text-2xl font-bold text-white mb-2 sm:mb-3">
                                        {"Live Attack Surface Monitoring"}
                                    </h3>
                                    <p class="text-white/60 text-sm max-w-2xl mb-4">
                                        {"Deployed a containerized T-Pot honeypot environment to monitor real-world \
                                          cyberattacks, utilizing the Elastic Stack for log analysis while mastering \
                                          network security via firewall configuration and Docker orchestration."}
                                    </p>
                                </div>

                                <div class={format!("grid grid-cols-2 lg:grid-cols-4 gap-2 sm:gap-3 transition-all duration-500 {features_class}")}>
                                    { for HOMELAB_FEATURES.iter().enumerate().map(|(index, feature)| html! {
                                        <div
                                            key={feature.title}
                                            class="p-2.5 sm:p-3 bg-cyber-black/70 backdrop-blur-sm rounded-lg border border-white/10"
                                            style={format!("transition-delay: {:.1}s;", index as f64 * CARD_STAGGER_SECONDS)}
                                        >
                                            <h4 class="font-mono text-xs text-white/80 mb-0.5">{feature.title}</h4>
                                            <p class="text-xs text-white/40">{feature.description}</p>
                                        </div>
                                    }) }
                                </div>

                                <div class={format!("absolute bottom-4 left-4 right-4 sm:bottom-6 sm:left-6 sm:right-6 transition-all duration-500 {teaser_class}")}>
                                    <h3 class="font-heading text-base sm:text-xl font-bold text-white mb-1">
                                        {"Live Attack Surface Monitoring with T-Pot"}
                                    </h3>
                                    <p class="text-white/50 text-xs sm:text-sm max-w-xl">
                                        {"Click to explore the honeypot infrastructure..."}
                                    </p>
                                </div>
                            </div>
                        </div>

                        <div class="absolute bottom-2 left-1/2 -translate-x-1/2 flex flex-col items-center gap-0.5">
                            <span class="font-mono text-[10px] text-white/30">
                                { if *expanded { "Tap to collapse" } else { "Tap to expand" } }
                            </span>
                        </div>
                    </div>
                </div>

                <div class={format!("grid grid-cols-2 sm:grid-cols-4 gap-3 mt-6 transition-all duration-1000 delay-300 {stats_class}")}>
                    { for HOMELAB_STATS.iter().map(|stat| html! {
                        <StatBox key={stat.label} label={stat.label} value={stat.value} />
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Certifications)]
fn certifications() -> Html {
    let revealed = use_reducer(RevealTracker::new);
    let hovered = use_state(SingleSelection::<u32>::none);
    let overlay = use_reducer(OverlayController::<&'static Certification>::closed);
    let section_ref = use_node_ref();

    use_card_reveal_observer(section_ref.clone(), ".cert-card", revealed.dispatcher());

    // The body overflow follows the lock; the cleanup restores it even when
    // the section unmounts with the modal still open.
    {
        let locked = overlay.scroll_locked();
        use_effect_with(locked, move |locked: &bool| {
            apply_scroll_lock(*locked);
            move || apply_scroll_lock(false)
        });
    }

    let on_hover = {
        let hovered = hovered.clone();
        Callback::from(move |value: Option<u32>| {
            let mut next = (*hovered).clone();
            match value {
                Some(id) => next.select(id),
                None => next.clear(),
            }
            hovered.set(next);
        })
    };

    let close_modal = {
        let overlay = overlay.dispatcher();
        Callback::from(move |_: MouseEvent| overlay.dispatch(CertModalAction::Close))
    };
    // The modal body swallows clicks so only the backdrop and the close
    // control dismiss it.
    let keep_modal_open = Callback::from(|event: MouseEvent| event.stop_propagation());

    let summary_class = if revealed.all_revealed(CERTIFICATIONS.len()) {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-6"
    };

    html! {
        <section id="certifications" ref={section_ref} class="relative py-16 lg:py-24">
            <div class="absolute top-0 left-0 right-0 section-divider" />

            <div class="relative z-10 max-w-7xl mx-auto px-4 sm:px-6">
                <SectionHeader
                    eyebrow="CREDENTIALS"
                    title="Certifications"
                    blurb="Professional certifications and achievements demonstrating continuous learning and expertise in cybersecurity, cloud computing, and emerging technologies."
                />

                <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-4 sm:gap-6">
                    { for CERTIFICATIONS.iter().enumerate().map(|(index, cert)| {
                        let is_hovered = hovered.is(&cert.id);
                        let reveal_class = if revealed.is_revealed(index) {
                            "opacity-100 translate-y-0"
                        } else {
                            "opacity-0 translate-y-12"
                        };
                        let glow_class = if is_hovered { "opacity-50" } else { "opacity-0" };
                        let image_class = if is_hovered { "scale-110" } else { "scale-100" };
                        let veil_class = if is_hovered { "opacity-40" } else { "opacity-60" };
                        let hint_class = if is_hovered { "opacity-100" } else { "opacity-0" };
                        let accent_class = if is_hovered { "opacity-100" } else { "opacity-0" };

                        let onmouseenter = {
                            let on_hover = on_hover.clone();
                            let id = cert.id;
                            Callback::from(move |_: MouseEvent| on_hover.emit(Some(id)))
                        };
                        let onmouseleave = {
                            let on_hover = on_hover.clone();
                            Callback::from(move |_: MouseEvent| on_hover.emit(None))
                        };
                        let enlarge = {
                            let overlay = overlay.dispatcher();
                            Callback::from(move |_: MouseEvent| {
                                overlay.dispatch(CertModalAction::Open(cert));
                            })
                        };

                        html! {
                            <div
                                key={cert.id}
                                data-index={index.to_string()}
                                class={format!("cert-card group relative transition-all duration-700 {reveal_class}")}
                                style={format!("transition-delay: {:.1}s;", index as f64 * CARD_STAGGER_SECONDS)}
                                {onmouseenter}
                                {onmouseleave}
                            >
                                <div class={format!("absolute -inset-0.5 cert-glow rounded-xl blur-lg transition-opacity duration-500 {glow_class}")} />

                                <div class="relative h-full bg-cyber-dark rounded-xl border border-white/10 overflow-hidden hover:border-cyber-green/30 transition-all duration-500">
                                    <div
                                        class="relative h-56 sm:h-64 overflow-hidden cert-frame cursor-pointer group"
                                        onclick={enlarge}
                                    >
                                        <div class="absolute inset-0 flex items-center justify-center p-4 sm:p-6 pt-12 sm:pt-14">
                                            <img
                                                src={cert.image}
                                                alt={cert.name}
                                                class={format!("max-w-full max-h-full object-contain transition-all duration-500 {image_class}")}
                                            />
                                        </div>
                                        <div class={format!("absolute inset-0 cert-veil transition-opacity duration-300 {veil_class}")} />

                                        <div class={format!("absolute inset-0 flex items-center justify-center transition-opacity duration-300 {hint_class}")}>
                                            <div class="text-center pointer-events-none">
                                                <div class="text-white/80 text-xs font-mono">{"Click to enlarge"}</div>
                                            </div>
                                        </div>

                                        <div class="absolute top-3 left-3">
                                            <span class="px-2 py-0.5 text-[10px] sm:text-xs font-mono text-cyber-green bg-cyber-green/10 border border-cyber-green/30 rounded-full">
                                                {cert.category}
                                            </span>
                                        </div>
                                    </div>

                                    <div class="p-4 space-y-2">
                                        <h3 class="font-heading text-sm sm:text-base font-semibold text-white group-hover:text-cyber-green transition-colors duration-300 line-clamp-2">
                                            {cert.name}
                                        </h3>

                                        <div class="flex items-center gap-3 text-xs text-white/40">
                                            <span>{cert.issuer}</span>
                                            <span>{"•"}</span>
                                            <span>{cert.date}</span>
                                        </div>

                                        <p class="text-xs text-white/50 leading-relaxed line-clamp-2">
                                            {cert.description}
                                        </p>
                                    </div>

                                    <div class={format!("absolute bottom-0 left-0 right-0 h-px card-accent transition-opacity duration-300 {accent_class}")} />
                                </div>
                            </div>
                        }
                    }) }
                </div>

                <div class={format!("mt-10 sm:mt-12 p-5 sm:p-6 bg-cyber-dark/50 rounded-xl border border-white/10 transition-all duration-1000 delay-500 {summary_class}")}>
                    <div class="grid grid-cols-3 gap-4 text-center">
                        <div>
                            <p class="font-heading text-2xl sm:text-3xl font-bold text-cyber-green mb-1">{CERTIFICATIONS.len().to_string()}</p>
                            <p class="font-mono text-[10px] sm:text-xs text-white/40">{"Total Certs"}</p>
                        </div>
                        <div>
                            <p class="font-heading text-2xl sm:text-3xl font-bold text-cyber-green mb-1">{"4"}</p>
                            <p class="font-mono text-[10px] sm:text-xs text-white/40">{"Categories"}</p>
                        </div>
                        <div>
                            <p class="font-heading text-2xl sm:text-3xl font-bold text-cyber-green mb-1">{"2025-26"}</p>
                            <p class="font-mono text-[10px] sm:text-xs text-white/40">{"Period"}</p>
                        </div>
                    </div>
                </div>
            </div>

            if let Some(cert) = overlay.item().copied() {
                <div
                    class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/80 backdrop-blur-sm"
                    onclick={close_modal.clone()}
                >
                    <div
                        class="relative max-w-3xl w-full max-h-[90vh] flex flex-col bg-cyber-dark rounded-xl border border-cyber-green/30 overflow-hidden"
                        onclick={keep_modal_open}
                    >
                        <button
                            onclick={close_modal}
                            class="absolute top-3 right-3 z-10 w-8 h-8 flex items-center justify-center bg-cyber-dark/80 hover:bg-cyber-green/20 border border-white/20 rounded-lg transition-colors duration-200"
                            aria-label="Close"
                        >
                            <span class="text-white text-lg" aria-hidden="true">{"×"}</span>
                        </button>

                        <div class="flex-1 flex items-center justify-center p-4 sm:p-8 overflow-auto cert-frame">
                            <img
                                src={cert.image}
                                alt={cert.name}
                                class="max-w-full max-h-full object-contain"
                            />
                        </div>

                        <div class="p-4 sm:p-6 border-t border-white/10">
                            <h3 class="text-lg sm:text-xl font-bold text-cyber-green mb-2">{cert.name}</h3>
                            <p class="text-sm text-white/70 mb-2">{format!("{} • {}", cert.issuer, cert.date)}</p>
                            <p class="text-sm text-white/60">{cert.description}</p>
                        </div>
                    </div>
                </div>
            }
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let back_to_top = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <footer class="relative py-12 lg:py-16 overflow-hidden">
            <div class="absolute inset-0 bg-cyber-black">
                <div class="absolute inset-0 footer-fade" />
            </div>

            <div class="absolute top-0 left-0 right-0 section-divider" />

            <div class="relative z-10 max-w-7xl mx-auto px-4 sm:px-6">
                <div class="grid md:grid-cols-3 gap-8 lg:gap-12 mb-12">
                    <div class="space-y-4">
                        <div>
                            <h3 class="font-heading text-xl font-bold text-white">{SITE_OWNER}</h3>
                            <p class="font-mono text-xs text-white/40 mt-1">{OWNER_ROLE}</p>
                        </div>

                        <p class="text-white/50 text-sm leading-relaxed max-w-sm">
                            {"From Homelab to Enterprise: Securing the future of Cloud, AI, and Network infrastructure."}
                        </p>

                        <div class="flex gap-2">
                            { for SOCIAL_LINKS.iter().map(|link| html! {
                                <a
                                    key={link.name}
                                    href={link.href}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="w-9 h-9 bg-white/5 border border-white/10 rounded-lg flex items-center justify-center hover:border-cyber-green/50 hover:bg-cyber-green/10 transition-all duration-300 group"
                                    aria-label={link.name}
                                >
                                    <span class="font-mono text-xs text-white/60 group-hover:text-cyber-green transition-colors" aria-hidden="true">
                                        {link.glyph}
                                    </span>
                                </a>
                            }) }
                        </div>
                    </div>

                    <div class="space-y-4">
                        <h4 class="font-mono text-sm text-white/40 tracking-wider">{"NAVIGATION"}</h4>
                        <ul class="space-y-2">
                            { for NAV_LINKS.iter().map(|link| {
                                let onclick = {
                                    let anchor = link.anchor;
                                    Callback::from(move |_: MouseEvent| scroll_to_anchor(anchor))
                                };
                                html! {
                                    <li key={link.name}>
                                        <button
                                            {onclick}
                                            class="text-white/60 hover:text-cyber-green transition-colors duration-300 text-sm"
                                        >
                                            {link.name}
                                        </button>
                                    </li>
                                }
                            }) }
                            <li>
                                <a
                                    href={CV_HREF}
                                    download={CV_DOWNLOAD_NAME}
                                    class="text-white/60 hover:text-cyber-green transition-colors duration-300 text-sm"
                                >
                                    {"Download CV"}
                                </a>
                            </li>
                        </ul>
                    </div>

                    <div class="space-y-4">
                        <h4 class="font-mono text-sm text-white/40 tracking-wider">{"CONTACT"}</h4>
                        <div class="space-y-2">
                            <p class="text-white/50 text-sm">
                                {"Open to opportunities in cybersecurity and IoT."}
                            </p>
                            <a
                                href="mailto:minnsetko@gmail.com"
                                class="inline-flex items-center gap-2 px-4 py-2 bg-cyber-green/10 border border-cyber-green/30 rounded-lg text-cyber-green font-mono text-sm hover:bg-cyber-green/20 transition-all duration-300"
                            >
                                <span aria-hidden="true">{"✉"}</span>
                                {"Get in Touch"}
                            </a>
                        </div>
                    </div>
                </div>

                <div class="pt-6 border-t border-white/10 flex flex-col sm:flex-row items-center justify-between gap-4">
                    <p class="font-mono text-xs text-white/30">
                        {format!("© 2025 {SITE_OWNER}. All rights reserved.")}
                    </p>
                    <button
                        onclick={back_to_top}
                        class="w-9 h-9 bg-white/5 border border-white/10 rounded-lg flex items-center justify-center hover:border-cyber-green/50 hover:bg-cyber-green/10 transition-all duration-300 group"
                        aria-label="Scroll to top"
                    >
                        <span class="text-white/60 group-hover:text-cyber-green transition-colors" aria-hidden="true">{"↑"}</span>
                    </button>
                </div>
            </div>
        </footer>
    }
}

#[function_component(App)]
fn app() -> Html {
    let progress = use_state(|| 0.0f64);

    {
        let progress = progress.clone();
        use_scroll_listener(move || {
            progress.set(scroll_progress(
                scroll_offset(),
                document_scroll_height(),
                viewport_height(),
            ));
        });
    }

    html! {
        <div class="relative min-h-screen bg-cyber-black">
            <div class="progress-bar" style={format!("width: {:.2}%;", *progress)} />

            <AnimatedBackground />
            <Navigation />

            <main class="relative z-10">
                <Hero />
                <Projects />
                <Homelab />
                <Certifications />
            </main>

            <Footer />
        </div>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
