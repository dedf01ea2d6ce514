use hero_core::{
    AnimationController, Group, HeroConfig, HeroScene, MountOutcome, MountSequence, ParallaxHost,
    ScrollSubscription, ScrollTarget, VariantLabel,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;

fn mount(seed: u64) -> HeroScene {
    HeroScene::mount(&HeroConfig::default(), &mut StdRng::seed_from_u64(seed))
}

// A minimal page: one scroll position, a list of parallax slots, and
// registered scroll handlers.
#[derive(Default)]
struct Page {
    scroll_y: RefCell<f64>,
    root_present: RefCell<bool>,
    transforms: RefCell<Vec<String>>,
    handlers: Rc<RefCell<Vec<Option<Box<dyn FnMut()>>>>>,
}

impl Page {
    fn with_elements(count: usize) -> Rc<Self> {
        Rc::new(Page {
            root_present: RefCell::new(true),
            transforms: RefCell::new(vec![String::new(); count]),
            ..Page::default()
        })
    }

    fn scroll_to(&self, y: f64) {
        *self.scroll_y.borrow_mut() = y;
        for handler in self.handlers.borrow_mut().iter_mut().flatten() {
            handler();
        }
    }

    fn live_listeners(&self) -> usize {
        self.handlers.borrow().iter().filter(|h| h.is_some()).count()
    }
}

struct PageHost(Rc<Page>);

impl ParallaxHost for PageHost {
    type Element = usize;

    fn scroll_y(&self) -> f64 {
        *self.0.scroll_y.borrow()
    }

    fn parallax_elements(&self) -> Option<Vec<usize>> {
        if *self.0.root_present.borrow() {
            Some((0..self.0.transforms.borrow().len()).collect())
        } else {
            None
        }
    }

    fn apply_translation(&self, element: &usize, offset: f64) {
        self.0.transforms.borrow_mut()[*element] = hero_core::parallax::translate_css(offset);
    }
}

struct Listener {
    slot: usize,
    handlers: Rc<RefCell<Vec<Option<Box<dyn FnMut()>>>>>,
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Some(handler) = self.handlers.borrow_mut().get_mut(self.slot) {
            *handler = None;
        }
    }
}

impl ScrollTarget for Page {
    type Listener = Listener;

    fn listen(&self, handler: Box<dyn FnMut()>) -> Listener {
        let mut handlers = self.handlers.borrow_mut();
        handlers.push(Some(handler));
        Listener {
            slot: handlers.len() - 1,
            handlers: self.handlers.clone(),
        }
    }
}

#[derive(Default)]
struct Controls {
    label: Option<VariantLabel>,
    starts: usize,
}

impl AnimationController for Controls {
    fn start(&mut self, label: VariantLabel) {
        self.label = Some(label);
        self.starts += 1;
    }
}

#[test]
fn rerenders_read_the_same_badge_layout() {
    let scene = mount(11);

    let first_render: Vec<String> = scene
        .badges()
        .badges()
        .iter()
        .map(|badge| badge.style(VariantLabel::Hidden))
        .collect();
    let second_render: Vec<String> = scene
        .badges()
        .badges()
        .iter()
        .map(|badge| badge.style(VariantLabel::Hidden))
        .collect();

    assert_eq!(first_render.len(), 5);
    assert_eq!(first_render, second_render);
}

#[test]
fn remount_draws_a_fresh_layout() {
    let first = mount(1);
    let second = mount(2);

    assert_ne!(first.badges(), second.badges());
}

#[test]
fn missing_restaurant_name_falls_back_to_placeholder() {
    let scene = mount(5);

    assert_eq!(scene.display_name(None), "abcd");
    assert_eq!(scene.display_name(Some("Shuk Bistro")), "Shuk Bistro");
    assert_eq!(scene.display_name(Some("")), "");
}

#[test]
fn mount_choreography_fires_once_after_commit() {
    let mut sequence = MountSequence::new();
    let mut controls = Controls::default();

    assert!(sequence.start(Some(&mut controls)).is_err());
    sequence.commit();
    let outcome = sequence.start(Some(&mut controls)).unwrap();
    let again = sequence.start(Some(&mut controls)).unwrap();

    assert_eq!(outcome, MountOutcome::Started);
    assert_eq!(again, MountOutcome::AlreadyStarted);
    assert_eq!(controls.starts, 1);
    assert_eq!(controls.label, Some(VariantLabel::Visible));
}

#[test]
fn cta_button_trails_the_copy() {
    let scene = mount(3);
    let choreography = scene.choreography();

    let copy_slots: Vec<f64> = Group::CHILDREN
        .iter()
        .map(|group| choreography.entry_delay(*group))
        .collect();

    assert!(copy_slots.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(choreography.button_entry_delay() > copy_slots[3]);
}

#[test]
fn scroll_updates_parallax_until_teardown() {
    let page = Page::with_elements(3);
    let scene = mount(8);
    let updater = scene.parallax();
    let host = PageHost(page.clone());

    let subscription = ScrollSubscription::attach(&*page, move || {
        updater.update(&host);
    });
    page.scroll_to(100.0);

    assert_eq!(
        *page.transforms.borrow(),
        vec!["translateY(20px)", "translateY(30px)", "translateY(40px)"]
    );
    assert_eq!(page.live_listeners(), 1);

    drop(subscription);
    page.scroll_to(500.0);

    assert_eq!(page.live_listeners(), 0);
    assert_eq!(page.transforms.borrow()[2], "translateY(40px)");
}

#[test]
fn scroll_after_root_removal_is_a_no_op() {
    let page = Page::with_elements(2);
    let updater = mount(4).parallax();
    let host = PageHost(page.clone());
    let _subscription = ScrollSubscription::attach(&*page, move || {
        updater.update(&host);
    });

    *page.root_present.borrow_mut() = false;
    page.scroll_to(250.0);

    assert!(page.transforms.borrow().iter().all(String::is_empty));
}

#[test]
fn stylesheet_declares_each_waveform_once() {
    let scene = mount(6);

    let css = scene.stylesheet();

    assert_eq!(css.matches("@keyframes hero-float").count(), 1);
    assert_eq!(css.matches("@keyframes hero-rotate").count(), 1);
}
