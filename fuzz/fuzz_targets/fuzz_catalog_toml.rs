#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Catalog parsing validates effects and enriches every pillar
        if let Ok(catalog) = alchm::PillarCatalog::from_toml_str(content) {
            let _ = catalog.resolve(content);
        }
    }
});
