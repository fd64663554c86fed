//! Cleanup tests - terminal restoration must be unconditional and one-shot

use tui_walle::term::ScreenSession;
use tui_walle::types::{BACKDROP_IMAGE_ID, SPRITE_IMAGE_ID};

#[test]
fn test_interrupt_cleanup_clears_both_images_and_restores_cursor() {
    let mut session = ScreenSession::with_writer(Vec::new());
    session.enter().unwrap();

    // Simulate a few frames of output, then an interrupt mid-loop.
    session.write_str("\x1b[10;10H·").unwrap();
    session
        .restore(SPRITE_IMAGE_ID, BACKDROP_IMAGE_ID, 24)
        .unwrap();

    let out = String::from_utf8(session.into_inner()).unwrap();
    let cleanup = &out[out.find("\x1b_Ga=d").expect("cleanup emitted")..];

    // Exactly two image-store deletes: sprite id first, then backdrop id.
    assert_eq!(cleanup.matches("\x1b_Ga=d,d=i,").count(), 2);
    let sprite = cleanup.find("i=2\x1b\\").expect("sprite delete");
    let backdrop = cleanup.find("i=1\x1b\\").expect("backdrop delete");
    assert!(sprite < backdrop);

    // Cursor visibility restored, parked below the sprite.
    assert!(cleanup.contains("\x1b[?25h"));
    assert!(cleanup.contains("\x1b[24;1H"));
    assert!(cleanup.contains("\x1b[2J"));
}

#[test]
fn test_cleanup_runs_exactly_once() {
    let mut session = ScreenSession::with_writer(Vec::new());
    session.enter().unwrap();
    for _ in 0..3 {
        session
            .restore(SPRITE_IMAGE_ID, BACKDROP_IMAGE_ID, 24)
            .unwrap();
    }
    let out = String::from_utf8(session.into_inner()).unwrap();
    assert_eq!(out.matches("\x1b_Ga=d").count(), 2);
    assert_eq!(out.matches("\x1b[?25h").count(), 1);
}

#[test]
fn test_enter_hides_cursor_until_restore() {
    let mut session = ScreenSession::with_writer(Vec::new());
    session.enter().unwrap();
    session
        .restore(SPRITE_IMAGE_ID, BACKDROP_IMAGE_ID, 10)
        .unwrap();
    let out = String::from_utf8(session.into_inner()).unwrap();
    let hide = out.find("\x1b[?25l").unwrap();
    let show = out.find("\x1b[?25h").unwrap();
    assert!(hide < show);
}
