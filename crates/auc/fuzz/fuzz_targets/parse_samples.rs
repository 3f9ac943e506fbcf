#![no_main]
use libfuzzer_sys::fuzz_target;
use std::io::Write;
use tempfile::NamedTempFile;

fuzz_target!(|data: &[u8]| {
    let mut temp = match NamedTempFile::new() {
        Ok(f) => f,
        Err(_) => return,
    };
    if temp.write_all(data).is_err() {
        return;
    }
    let Ok(mut samples) = auc_rs::io::load_samples(temp.path()) else {
        return;
    };
    if let Ok(score) = auc_rs::compute_auc(&mut samples) {
        assert!((0.0..=1.0).contains(&score));
    }
});
