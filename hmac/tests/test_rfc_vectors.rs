use tentacle_hmac::{Algorithm, BackendKind, Config, Engine};

struct Vector {
    key: Vec<u8>,
    data: Vec<u8>,
    sha256: &'static str,
    sha384: &'static str,
    sha512: &'static str,
}

/// RFC 4231 cases 1, 2, 3, 4, 6 and 7
fn rfc4231() -> Vec<Vector> {
    vec![
        Vector {
            key: vec![0x0b; 20],
            data: b"Hi There".to_vec(),
            sha256: "b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7",
            sha384: "afd03944d84895626b0825f4ab46907f15f9dadbe4101ec682aa034c7cebc59cfaea9ea9076ede7f4af152e8b2fa9cb6",
            sha512: "87aa7cdea5ef619d4ff0b4241a1d6cb02379f4e2ce4ec2787ad0b30545e17cdedaa833b7d6b8a702038b274eaea3f4e4be9d914eeb61f1702e696c203a126854",
        },
        Vector {
            key: b"Jefe".to_vec(),
            data: b"what do ya want for nothing?".to_vec(),
            sha256: "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843",
            sha384: "af45d2e376484031617f78d2b58a6b1b9c7ef464f5a01b47e42ec3736322445e8e2240ca5e69e2c78b3239ecfab21649",
            sha512: "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea2505549758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737",
        },
        Vector {
            key: vec![0xaa; 20],
            data: vec![0xdd; 50],
            sha256: "773ea91e36800e46854db8ebd09181a72959098b3ef8c122d9635514ced565fe",
            sha384: "88062608d3e6ad8a0aa2ace014c8a86f0aa635d947ac9febe83ef4e55966144b2a5ab39dc13814b94e3ab6e101a34f27",
            sha512: "fa73b0089d56a284efb0f0756c890be9b1b5dbdd8ee81a3655f83e33b2279d39bf3e848279a722c806b485a47e67c807b946a337bee8942674278859e13292fb",
        },
        Vector {
            key: (1..=25).collect(),
            data: vec![0xcd; 50],
            sha256: "82558a389a443c0ea4cc819899f2083a85f0faa3e578f8077a2e3ff46729665b",
            sha384: "3e8a69b7783c25851933ab6290af6ca77a9981480850009cc5577c6e1f573b4e6801dd23c4a7d679ccf8a386c674cffb",
            sha512: "b0ba465637458c6990e5a8c5f61d4af7e576d97ff94b872de76f8050361ee3dba91ca5c11aa25eb4d679275cc5788063a5f19741120c4f2de2adebeb10a298dd",
        },
        Vector {
            key: vec![0xaa; 131],
            data: b"Test Using Larger Than Block-Size Key - Hash Key First".to_vec(),
            sha256: "60e431591ee0b67f0d8a26aacbf5b77f8e0bc6213728c5140546040f0ee37f54",
            sha384: "4ece084485813e9088d2c63a041bc5b44f9ef1012a2b588f3cd11f05033ac4c60c2ef6ab4030fe8296248df163f44952",
            sha512: "80b24263c7c1a3ebb71493c1dd7be8b49b46d1f41b4aeec1121b013783f8f3526b56d037e05f2598bd0fd2215d6a1e5295e64f73f63f0aec8b915a985d786598",
        },
        Vector {
            key: vec![0xaa; 131],
            data: b"This is a test using a larger than block-size key and a larger than block-size data. The key needs to be hashed before being used by the HMAC algorithm.".to_vec(),
            sha256: "9b09ffa71b942fcb27635fbcd5b0e944bfdc63644f0713938a7f51535c3a35e2",
            sha384: "6617178e941f020d351e2f254e8fd32c602420feb0b8fb9adccebb82461e99c5a678cc31e799176d3860e6110c46523e",
            sha512: "e37b6a775dc87dbaa4dfa9f96e5e3ffddebd71f8867289865df5a32d20cdc944b6022cac3c4982b10d5eeb55c3e4de15134676fb6de0446065c97440fa8c6a58",
        },
    ]
}

/// RFC 2202 cases 1, 2, 3, 4, 6 and 7 for sha1
fn rfc2202() -> Vec<(Vec<u8>, Vec<u8>, &'static str)> {
    vec![
        (
            vec![0x0b; 20],
            b"Hi There".to_vec(),
            "b617318655057264e28bc0b6fb378c8ef146be00",
        ),
        (
            b"Jefe".to_vec(),
            b"what do ya want for nothing?".to_vec(),
            "effcdf6ae5eb2fa2d27416d5f184df9c259a7c79",
        ),
        (
            vec![0xaa; 20],
            vec![0xdd; 50],
            "125d7342b9ac11cd91a39af48aa17b4f63f175d3",
        ),
        (
            (1..=25).collect(),
            vec![0xcd; 50],
            "4c9007f4026250c6bc8414f9bf50c86c2d7235da",
        ),
        (
            vec![0xaa; 80],
            b"Test Using Larger Than Block-Size Key - Hash Key First".to_vec(),
            "aa4ae5e15272d00e95705637ce8a3b55ed402112",
        ),
        (
            vec![0xaa; 80],
            b"Test Using Larger Than Block-Size Key and Larger Than One Block-Size Data".to_vec(),
            "e8e99d0f45237d786d6bbaa7965c7808bbff1a91",
        ),
    ]
}

fn engines() -> Vec<Engine> {
    vec![
        Engine::new(Config::default().backend(BackendKind::Native)),
        Engine::new(Config::default().backend(BackendKind::Embedded)),
    ]
}

/// One shot, streaming byte by byte, and batch split at every third byte.
fn check(engine: &Engine, algorithm: Algorithm, key: &[u8], data: &[u8], expected: &str) {
    let expected = hex::decode(expected).unwrap();

    let mut output = vec![0; algorithm.digest_size()];
    assert_eq!(
        engine.compute(algorithm, key, data, &mut output),
        Ok(algorithm.digest_size())
    );
    assert_eq!(output, expected, "{:?} {:?} one shot", engine, algorithm);

    let mut session = engine.init(algorithm, key).unwrap();
    for byte in data {
        session.update(std::slice::from_ref(byte)).unwrap();
    }
    assert_eq!(
        session.finalize_vec().unwrap(),
        expected,
        "{:?} {:?} streaming",
        engine,
        algorithm
    );

    let mut output = vec![0; algorithm.digest_size()];
    engine
        .compute_batch(algorithm, key, data.chunks(3), &mut output)
        .unwrap();
    assert_eq!(output, expected, "{:?} {:?} batch", engine, algorithm);

    assert_eq!(engine.verify(algorithm, key, data, &expected), Ok(true));
}

#[test]
fn test_rfc4231() {
    let _ = env_logger::try_init();

    for engine in engines() {
        for vector in rfc4231() {
            check(&engine, Algorithm::Sha256, &vector.key, &vector.data, vector.sha256);
            check(&engine, Algorithm::Sha384, &vector.key, &vector.data, vector.sha384);
            check(&engine, Algorithm::Sha512, &vector.key, &vector.data, vector.sha512);
        }
    }
}

#[test]
fn test_rfc4231_truncated() {
    // case 5 only specifies the first 128 bits of the output
    let key = vec![0x0c; 20];
    let data = b"Test With Truncation";
    for engine in engines() {
        let mut output = [0; 32];
        engine
            .compute(Algorithm::Sha256, &key, data, &mut output)
            .unwrap();
        assert_eq!(hex::encode(&output[..16]), "a3b6167473100ee06e0c796c2955552b");
    }
}

#[test]
fn test_rfc2202() {
    let _ = env_logger::try_init();

    for engine in engines() {
        for (key, data, expected) in rfc2202() {
            check(&engine, Algorithm::Sha1, &key, &data, expected);
        }
    }
}
