#![no_main]
use libfuzzer_sys::fuzz_target;
use oxirle::rle::SlidingWindow;

fuzz_target!(|data: &[u8]| {
    // First half drives the walk, second half is the encoded input.
    if data.len() < 2 {
        return;
    }
    let (script, payload) = data.split_at(data.len() / 2);
    let width = (script[0] % 32) as usize;
    let encoded: Vec<i8> = payload.iter().map(|&b| b as i8).collect();

    let Ok(mut window) = SlidingWindow::new(&encoded, width) else {
        return;
    };
    let fill_len = window.len();

    for &b in &script[1..] {
        let before = window.to_vec();
        let moved = if b & 1 == 0 {
            window.step_right()
        } else {
            window.step_left()
        };
        // A shift never changes the window length; a refused shift never
        // changes the window at all.
        assert_eq!(window.len(), fill_len);
        if !moved {
            assert_eq!(window.to_vec(), before);
        }
    }
});
