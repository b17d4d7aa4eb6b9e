#![no_main]
use libfuzzer_sys::fuzz_target;
use tentacle_hmac::{Algorithm, BackendKind, Config, Engine};

// first byte picks the algorithm, second the key length, the rest is key then message
fn sign(kind: BackendKind, algorithm: Algorithm, key: &[u8], data: &[u8], step: usize) {
    let engine = Engine::new(Config::default().backend(kind));

    let mut expected = vec![0; algorithm.digest_size()];
    if engine.compute(algorithm, key, data, &mut expected).is_err() {
        return;
    }

    let mut session = engine.init(algorithm, key).unwrap();
    for chunk in data.chunks(step) {
        session.update(chunk).unwrap();
    }
    assert_eq!(session.finalize_vec().unwrap(), expected);
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let algorithm = Algorithm::ALL[data[0] as usize % Algorithm::ALL.len()];
    let step = (data[0] as usize >> 2) + 1;
    let (key, message) = data[2..].split_at((data[1] as usize).min(data.len() - 2));

    sign(BackendKind::Native, algorithm, key, message, step);
    sign(BackendKind::Embedded, algorithm, key, message, step);
});
