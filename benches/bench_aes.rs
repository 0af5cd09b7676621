use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rijndael::{Block, Cbc, Cipher, Ctr, Key};

const KEY_128: &[u8; 16] = b"\x2b\x7e\x15\x16\x28\xae\xd2\xa6\xab\xf7\x15\x88\x09\xcf\x4f\x3c";
const KEY_256: &[u8; 32] = b"\x60\x3d\xeb\x10\x15\xca\x71\xbe\x2b\x73\xae\xf0\x85\x7d\x77\x81\
      \x1f\x35\x2c\x07\x3b\x61\x08\xd7\x2d\x98\x10\xa3\x09\x14\xdf\xf4";

pub fn bench_key_expansion(c: &mut Criterion) {
    c.bench_function("aes128 key expansion", |b| {
        b.iter(|| {
            let key = Key::from_bytes(black_box(KEY_128)).unwrap();
            Cipher::new(key)
        })
    });

    c.bench_function("aes256 key expansion", |b| {
        b.iter(|| {
            let key = Key::from_bytes(black_box(KEY_256)).unwrap();
            Cipher::new(key)
        })
    });
}

pub fn bench_encrypt_block(c: &mut Criterion) {
    let cipher = Cipher::new(Key::from_bytes(KEY_128).unwrap());
    let block = Block::from(*b"\x32\x43\xf6\xa8\x88\x5a\x30\x8d\x31\x31\x98\xa2\xe0\x37\x07\x34");

    c.bench_function("aes128 encrypt block", |b| {
        b.iter(|| cipher.encrypt(black_box(block)))
    });

    c.bench_function("aes128 decrypt block", |b| {
        b.iter(|| cipher.decrypt(black_box(block)))
    });
}

pub fn bench_modes(c: &mut Criterion) {
    let message = vec![0xabu8; 1024];

    let cbc = Cbc::new(
        Cipher::new(Key::from_bytes(KEY_128).unwrap()),
        Block::default(),
    );
    c.bench_function("cbc encrypt 1 KiB", |b| {
        b.iter(|| cbc.encrypt(black_box(&message)))
    });

    let mut ctr = Ctr::new(Cipher::new(Key::from_bytes(KEY_128).unwrap()));
    c.bench_function("ctr encrypt 1 KiB", move |b| {
        b.iter(|| ctr.encrypt(black_box(&message)))
    });
}

criterion_group!(
    benches,
    bench_key_expansion,
    bench_encrypt_block,
    bench_modes
);
criterion_main!(benches);
