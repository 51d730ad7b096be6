#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Full decode + render pipeline — must never panic on any input
    if let Ok(image) = bmptext::decode(data) {
        let _ = bmptext::RenderRequest::new(&image).render();
    }
});
