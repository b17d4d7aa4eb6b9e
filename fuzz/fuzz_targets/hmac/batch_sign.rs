#![no_main]
use libfuzzer_sys::fuzz_target;
use tentacle_hmac::{compute, Algorithm, Engine};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    let algorithm = Algorithm::ALL[data[0] as usize % Algorithm::ALL.len()];
    let data = &data[1..];

    // split on every zero byte, keeping empty entries
    let entries = data.split(|b| *b == 0).collect::<Vec<_>>();
    let whole = entries.concat();

    let mut expected = [0; 64];
    let mut output = [0; 64];
    compute(algorithm, b"fuzz key", &whole, &mut expected).unwrap();
    Engine::default()
        .compute_batch(algorithm, b"fuzz key", &entries, &mut output)
        .unwrap();
    assert_eq!(output, expected);

    let lengths = entries.iter().map(|e| e.len()).collect::<Vec<_>>();
    let entries = entries.into_iter().map(Some).collect::<Vec<_>>();
    let mut output = [0; 64];
    Engine::default()
        .compute_batch_entries(algorithm, b"fuzz key", &entries, &lengths, &mut output)
        .unwrap();
    assert_eq!(output, expected);
});
