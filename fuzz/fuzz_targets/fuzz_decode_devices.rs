#![no_main]

use libfuzzer_sys::fuzz_target;

use gympi_core::model::decode_devices;
use gympi_tui::grid::CardGrid;

fuzz_target!(|data: &[u8]| {
    // Any body must decode or fail cleanly, and whatever decodes must render.
    let Ok(devices) = decode_devices(data) else {
        return;
    };
    let mut grid = CardGrid::new();
    grid.render_device_grid(&devices);
    assert_eq!(grid.len(), devices.len());
});
