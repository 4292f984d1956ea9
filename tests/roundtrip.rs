//! Round-trip properties across all six ciphers.
//!
//! Each cipher's decrypt must exactly invert its encrypt, up to the
//! normalization its classical form performs (uppercasing, space
//! stripping, filler insertion).

use scytale::cipher::{
    Cipher, ColumnarCipher, MonoalphabeticCipher, PlayfairCipher, RailFenceCipher,
    RunningKeyCipher, ShiftCipher,
};
use scytale::CipherError;

const SAMPLE: &str = "We are discovered, flee at once!";

#[test]
fn shift_roundtrips_for_all_shift_values() {
    for shift in -30..=30 {
        let cipher = ShiftCipher::new(shift);
        let encrypted = cipher.encrypt(SAMPLE).unwrap();
        assert_eq!(cipher.decrypt(&encrypted).unwrap(), SAMPLE, "shift={}", shift);
    }
}

#[test]
fn shift_preserves_non_letters_exactly() {
    let cipher = ShiftCipher::new(13);
    let text = "123 !@# \t\n";
    assert_eq!(cipher.encrypt(text).unwrap(), text);
}

#[test]
fn running_key_roundtrips_under_various_keywords() {
    for keyword in ["A", "LEMON", "zyzzyva", "TheLongestKeywordAnyoneWouldUse"] {
        let cipher = RunningKeyCipher::new(keyword).unwrap();
        let encrypted = cipher.encrypt(SAMPLE).unwrap();
        assert_eq!(
            cipher.decrypt(&encrypted).unwrap(),
            SAMPLE,
            "keyword={}",
            keyword
        );
    }
}

#[test]
fn monoalphabetic_roundtrip_uppercases() {
    let cipher = MonoalphabeticCipher::new("QWERTYUIOPASDFGHJKLZXCVBNM").unwrap();
    let encrypted = cipher.encrypt(SAMPLE).unwrap();
    assert_eq!(
        cipher.decrypt(&encrypted).unwrap(),
        SAMPLE.to_ascii_uppercase()
    );
}

#[test]
fn playfair_roundtrip_equals_normalized_digraphs() {
    // Round-tripping returns the plaintext with J merged into I, spacing
    // and punctuation dropped, and inserted fillers retained.
    let cipher = PlayfairCipher::new("ORCHID");
    let encrypted = cipher.encrypt("JUMP THE HILL").unwrap();
    assert_eq!(cipher.decrypt(&encrypted).unwrap(), "IUMPTHEHILLX");
}

#[test]
fn playfair_matrix_is_deterministic() {
    let a = PlayfairCipher::new("ORCHID").encrypt("HIKETHEFOOTHILLS").unwrap();
    let b = PlayfairCipher::new("orchid").encrypt("hikethefoothills").unwrap();
    assert_eq!(a, b);
}

#[test]
fn rail_fence_roundtrips_across_rail_counts() {
    for rails in 2..=SAMPLE.chars().count() {
        let cipher = RailFenceCipher::new(rails);
        let encrypted = cipher.encrypt(SAMPLE).unwrap();
        assert_eq!(cipher.decrypt(&encrypted).unwrap(), SAMPLE, "rails={}", rails);
    }
}

#[test]
fn rail_fence_rejects_out_of_range_rails() {
    assert!(matches!(
        RailFenceCipher::new(1).encrypt(SAMPLE),
        Err(CipherError::InvalidKey(_))
    ));
    let too_many = SAMPLE.chars().count() + 1;
    assert!(matches!(
        RailFenceCipher::new(too_many).encrypt(SAMPLE),
        Err(CipherError::InvalidKey(_))
    ));
}

#[test]
fn columnar_roundtrip_equals_stripped_padded_text() {
    let cipher = ColumnarCipher::new("ZEBRA").unwrap();
    let encrypted = cipher.encrypt("we are discovered flee").unwrap();
    // 19 letters pad to 20 with one trailing filler.
    assert_eq!(
        cipher.decrypt(&encrypted).unwrap(),
        "WEAREDISCOVEREDFLEEX"
    );
}

#[test]
fn columnar_roundtrips_with_repeated_key_letters() {
    let cipher = ColumnarCipher::new("BANANA").unwrap();
    let encrypted = cipher.encrypt("MEETMEATMIDNIGHT").unwrap();
    assert_eq!(cipher.decrypt(&encrypted).unwrap(), "MEETMEATMIDNIGHTXX");
}

#[test]
fn ciphers_are_pure() {
    // Same input, same output, call after call.
    let cipher = PlayfairCipher::new("LARKSPUR");
    let first = cipher.encrypt(SAMPLE).unwrap();
    for _ in 0..3 {
        assert_eq!(cipher.encrypt(SAMPLE).unwrap(), first);
    }
}
