use timview::core::{Slideshow, Slot, Transition};
use timview::types::ViewerAction;

fn ready(show: &mut Slideshow, indices: &[usize]) {
    for &i in indices {
        show.complete(i, format!("image-{i}"));
    }
}

#[test]
fn navigation_clamps_at_both_ends() {
    let mut show = Slideshow::new(3);
    ready(&mut show, &[0, 1, 2]);
    assert_eq!(show.position(), 1);

    assert_eq!(show.apply(ViewerAction::Prev), Transition::None);
    assert_eq!(show.apply(ViewerAction::Next), Transition::Redraw);
    assert_eq!(show.apply(ViewerAction::Next), Transition::Redraw);
    assert_eq!(show.position(), 3);
    assert_eq!(show.current_frame(), Some("image-2"));
    assert_eq!(show.apply(ViewerAction::Next), Transition::None);
    assert_eq!(show.position(), 3);

    assert_eq!(show.apply(ViewerAction::Prev), Transition::Redraw);
    assert_eq!(show.current_frame(), Some("image-1"));
}

#[test]
fn next_waits_for_pending_neighbour() {
    let mut show = Slideshow::new(3);
    ready(&mut show, &[0, 2]);

    assert_eq!(show.apply(ViewerAction::Next), Transition::None);
    assert_eq!(show.position(), 1);
    assert_eq!(show.slot(1), Some(&Slot::Pending));

    ready(&mut show, &[1]);
    assert_eq!(show.apply(ViewerAction::Next), Transition::Redraw);
    assert_eq!(show.position(), 2);
}

#[test]
fn failed_images_are_skipped_both_ways() {
    let mut show = Slideshow::new(4);
    ready(&mut show, &[0, 3]);
    show.fail(1);
    show.fail(2);

    assert_eq!(show.apply(ViewerAction::Next), Transition::Redraw);
    assert_eq!(show.position(), 4);
    assert_eq!(show.apply(ViewerAction::Prev), Transition::Redraw);
    assert_eq!(show.position(), 1);
    assert_eq!(show.settled(), 4);
}

#[test]
fn all_failed_is_reported() {
    let mut show = Slideshow::new(2);
    show.fail(1);
    assert!(!show.all_failed());
    show.fail(0);
    assert!(show.all_failed());
    assert!(!show.is_started());
    assert!(!Slideshow::new(0).all_failed());
}
