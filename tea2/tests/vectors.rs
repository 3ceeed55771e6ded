use tea2::{decrypt, encrypt, Block, BlockCipher, Key, Tea2};

const KEY: &str = "0000000000000000 0000000000000000 0000000000000000 0000000000000001";

// (plaintext, ciphertext) under KEY
const VECTORS: [(&str, &str); 3] = [
    ("0000000000000000 0000000000000000", "D713374DD796B948 93E198C8BF480EEA"),
    ("0000000000000000 0000000000000001", "85B25256E406EF80 88B6D9C61E7C08F1"),
    ("0000000000000001 0000000000000001", "9F6CCED0EAF20C18 CA4F15379C175F5C"),
];

#[test]
fn test_reference_vectors_encrypt() {
    let key: Key = KEY.parse().unwrap();
    for (pt, ct) in VECTORS {
        let block: Block = pt.parse().unwrap();
        assert_eq!(encrypt(block, &key).to_string(), ct, "plaintext {}", pt);
    }
}

#[test]
fn test_reference_vectors_decrypt() {
    let key: Key = KEY.parse().unwrap();
    for (pt, ct) in VECTORS {
        let block: Block = ct.parse().unwrap();
        assert_eq!(decrypt(block, &key).to_string(), pt, "ciphertext {}", ct);
    }
}

#[test]
fn test_reference_vectors_through_bytes() {
    let key: Key = KEY.parse().unwrap();
    for (pt, ct) in VECTORS {
        let pt: Block = pt.parse().unwrap();
        let ct: Block = ct.parse().unwrap();
        let out = Tea2.encrypt(&key.to_bytes(), &pt.to_bytes()).unwrap();
        assert_eq!(out, ct.to_bytes());
    }
}

#[test]
fn test_tuple_interface() {
    let key = Key::from((0, 0, 0, 1));
    let (v0, v1): (u64, u64) = encrypt((0, 1).into(), &key).into();
    assert_eq!((v0, v1), (0x85B2_5256_E406_EF80, 0x88B6_D9C6_1E7C_08F1));
}

#[test]
fn test_ciphertexts_differ_from_plaintexts() {
    let key: Key = KEY.parse().unwrap();
    for (pt, _) in VECTORS {
        let block: Block = pt.parse().unwrap();
        assert_ne!(encrypt(block, &key), block);
    }
}

#[test]
fn test_independent_threads_agree() {
    let key = Key::new(0x0123_4567_89AB_CDEF, 0xFEDC_BA98_7654_3210, 0x0F1E_2D3C_4B5A_6978, 0x8796_A5B4_C3D2_E1F0);
    let block = Block::new(0x0011_2233_4455_6677, 0x8899_AABB_CCDD_EEFF);
    let expected = Block::new(0xDA23_F6E7_42D5_63E3, 0x5557_958E_C5DB_AE02);

    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || encrypt(block, &key)))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
