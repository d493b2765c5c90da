//! End-to-end behaviour of a bound page, driven through the public API only.

use glide::{bind, host::Host, Config, SimHost};
use std::{rc::Rc, time::Duration};

const TRIGGER: &str = r#"[data="scroll-button"]"#;

fn faq_page(faq_top: f64) -> Rc<SimHost> {
    glide_log::test();
    let host = Rc::new(SimHost::new());
    host.add_element("scroll-button", 40.0);
    host.match_selector(TRIGGER, "scroll-button");
    host.add_element("faq-section", faq_top);
    host
}

#[test]
fn button_glides_down_to_the_faq() {
    let host = faq_page(800.0);
    let _binding = bind(Rc::clone(&host), &Config::default()).expect("trigger is on the page");

    assert_eq!(host.click(TRIGGER), Some(true));
    host.advance(Duration::from_millis(30));
    host.run_until_idle();

    let writes = host.scroll_writes();
    assert_eq!(writes[..2], [100.0, 187.5]);
    assert_eq!(writes.last().copied(), Some(800.0));
    assert!(writes.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(host.pending_timers(), 0);
}

#[test]
fn faq_within_a_few_pixels_snaps_at_once() {
    let host = faq_page(5.0);
    let _binding = bind(Rc::clone(&host), &Config::default()).expect("trigger is on the page");

    host.click(TRIGGER);
    assert_eq!(host.scroll_writes(), vec![5.0]);
    assert_eq!(host.pending_timers(), 0);
}

#[test]
fn page_without_button_is_left_alone() {
    glide_log::test();
    let host = Rc::new(SimHost::new());
    host.add_element("faq-section", 800.0);

    assert!(bind(Rc::clone(&host), &Config::default()).is_none());
    assert_eq!(host.listener_count(), 0);
    assert_eq!(host.click(TRIGGER), None);
    assert_eq!(host.scroll_offset(), 0.0);
}

#[test]
fn repeated_clicks_never_stack_timers() {
    let host = faq_page(5_000.0);
    let binding = bind(Rc::clone(&host), &Config::default()).expect("trigger is on the page");

    for _ in 0..5 {
        host.click(TRIGGER);
        assert_eq!(host.pending_timers(), 1);
        host.advance(Duration::from_millis(15));
        assert!(host.pending_timers() <= 1);
    }

    host.run_until_idle();
    assert_eq!(host.scroll_offset(), 5_000.0);
    assert!(!binding.animator().is_animating());
}
