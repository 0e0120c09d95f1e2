use image_carousel::carousel::Carousel;
use image_carousel::config::CarouselOptions;
use image_carousel::error::Error;
use image_carousel::structure::Host;

fn options() -> CarouselOptions {
    CarouselOptions {
        auto_play: false,
        ..CarouselOptions::default()
    }
}

fn sources(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("img/{i}.jpg")).collect()
}

fn active_dots(carousel: &Carousel) -> Vec<usize> {
    carousel
        .host()
        .subtree()
        .unwrap()
        .dots
        .iter()
        .filter(|d| d.active)
        .map(|d| d.target())
        .collect()
}

fn offset(carousel: &Carousel) -> f32 {
    carousel.host().subtree().unwrap().frame.track.offset_percent
}

#[test]
fn three_image_scenario() {
    let mut carousel = Carousel::new(Host::new(), sources(3), options()).unwrap();
    assert_eq!(carousel.len(), 3);
    assert_eq!(carousel.current_index(), 0);
    assert!((offset(&carousel) - 0.0).abs() < f32::EPSILON);
    assert_eq!(active_dots(&carousel), vec![0]);

    carousel.next();
    carousel.next();
    assert_eq!(carousel.current_index(), 2);
    assert!((offset(&carousel) + 200.0).abs() < f32::EPSILON);
    assert_eq!(active_dots(&carousel), vec![2]);

    // Wraps back to the first slide.
    carousel.next();
    assert_eq!(carousel.current_index(), 0);
    assert!((offset(&carousel) - 0.0).abs() < f32::EPSILON);
    assert_eq!(active_dots(&carousel), vec![0]);
}

#[test]
fn previous_wraps_before_the_start() {
    let mut carousel = Carousel::new(Host::new(), sources(4), options()).unwrap();
    carousel.previous();
    assert_eq!(carousel.current_index(), 3);
    assert!((offset(&carousel) + 300.0).abs() < f32::EPSILON);
    assert_eq!(active_dots(&carousel), vec![3]);
}

#[test]
fn mixed_sequences_stay_congruent_mod_len() {
    let len = 5;
    let mut carousel = Carousel::new(Host::new(), sources(len), options()).unwrap();
    let mut expected = 0usize;

    for _ in 0..7 {
        carousel.next();
        expected = (expected + 1) % len;
        assert_eq!(carousel.current_index(), expected);
    }
    for _ in 0..9 {
        carousel.previous();
        expected = (expected + len - 1) % len;
        assert_eq!(carousel.current_index(), expected);
    }
    assert_eq!(active_dots(&carousel), vec![expected]);
}

#[test]
fn go_to_slide_jumps_directly() {
    let mut carousel = Carousel::new(Host::new(), sources(4), options()).unwrap();
    carousel.go_to_slide(2).unwrap();
    assert_eq!(carousel.current_index(), 2);
    assert!((offset(&carousel) + 200.0).abs() < f32::EPSILON);
    assert_eq!(active_dots(&carousel), vec![2]);

    carousel.go_to_slide(0).unwrap();
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn go_to_slide_rejects_out_of_range() {
    let mut carousel = Carousel::new(Host::new(), sources(3), options()).unwrap();
    carousel.next();

    let err = carousel.go_to_slide(3).unwrap_err();
    assert!(matches!(
        err,
        Error::IndexOutOfRange { index: 3, len: 3 }
    ));
    // State untouched by the rejected jump.
    assert_eq!(carousel.current_index(), 1);
    assert_eq!(active_dots(&carousel), vec![1]);
}

#[test]
fn empty_sequence_is_rejected_at_construction() {
    let err = Carousel::new(Host::new(), Vec::new(), options()).unwrap_err();
    assert!(matches!(err, Error::EmptyImages));
}

#[test]
fn destroy_clears_the_host() {
    let carousel = Carousel::new(Host::new(), sources(3), options()).unwrap();
    let host = carousel.destroy();
    assert!(host.is_empty());
}

#[test]
fn stop_auto_play_is_idempotent() {
    let mut carousel = Carousel::new(Host::new(), sources(2), options()).unwrap();
    assert!(!carousel.is_auto_playing());
    carousel.stop_auto_play();
    carousel.stop_auto_play();
    assert!(!carousel.is_auto_playing());
}

#[test]
fn navigation_without_dots_still_tracks_offset() {
    let options = CarouselOptions {
        auto_play: false,
        show_dots: false,
        ..CarouselOptions::default()
    };
    let mut carousel = Carousel::new(Host::new(), sources(3), options).unwrap();
    carousel.next();
    assert_eq!(carousel.current_index(), 1);
    assert!((offset(&carousel) + 100.0).abs() < f32::EPSILON);
}
