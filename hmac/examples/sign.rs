use log::info;
use tentacle_hmac::{BackendKind, Config, Engine};

use std::io::Read;

// Sign stdin, read in pieces, with the algorithm and key given on the command line:
//
//   echo -n "message" | cargo run --example sign -- SHA256 secret [embedded]
fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let algorithm = args.next().unwrap_or_else(|| "SHA256".to_string());
    let key = args.next().unwrap_or_else(|| "key".to_string());
    let backend = args
        .next()
        .map(|name| name.parse::<BackendKind>().unwrap())
        .unwrap_or(BackendKind::Native);

    let engine = Engine::new(Config::default().backend(backend));
    let mut session = engine.init_named(&algorithm, key.as_bytes()).unwrap();
    info!("Signing stdin with {:?}", session);

    let mut stdin = std::io::stdin();
    let mut buf = [0; 4096];
    loop {
        let n = stdin.read(&mut buf).unwrap();
        if n == 0 {
            break;
        }
        session.update(&buf[..n]).unwrap();
    }

    let mac = session.finalize_vec().unwrap();
    println!("{}", hex::encode(mac));
}
